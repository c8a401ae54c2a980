use std::fmt;
use std::io::{self, BufRead, Write};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_GREEN: &str = "\x1b[32m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_OK: &str = "✅";
const ICON_ERR: &str = "❌";

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Yes/no prompt. An empty answer takes the default; EOF declines.
pub fn confirm(question: &str, default_yes: bool) -> bool {
    let prompt = if default_yes { " [Y/n] " } else { " [y/N] " };
    let stdin = io::stdin();

    loop {
        print!("{question}{prompt}");
        let _ = io::stdout().flush();

        let mut choice = String::new();
        if stdin.lock().read_line(&mut choice).unwrap_or(0) == 0 {
            return false;
        }

        match choice.trim().to_lowercase().as_str() {
            "" => return default_yes,
            "y" | "yes" => return true,
            "n" | "no" => return false,
            _ => continue,
        }
    }
}
