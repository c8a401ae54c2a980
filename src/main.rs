//! worklog main entrypoint.

use worklog::run;
use worklog::ui::messages;

fn main() {
    println!("Work Log Tool v{}\n", env!("CARGO_PKG_VERSION"));
    if let Err(e) = run() {
        messages::error(&e);
        std::process::exit(e.exit_code());
    }
}
