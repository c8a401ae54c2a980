//! Username resolution and capitalization.

use std::env;

/// Resolve the effective user name: the explicit override if given,
/// otherwise the current account name from the environment. Always
/// capitalized, since the log file is named after it.
pub fn resolve_user(override_name: Option<&str>) -> String {
    let name = match override_name {
        Some(n) => n.to_string(),
        None => env::var("USER")
            .or_else(|_| env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string()),
    };
    capitalize(&name)
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
