use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::entry::LogEntry;
use crate::store::LogStore;
use crate::ui::messages;
use crate::utils::user::resolve_user;

/// Append one work entry to the user's log.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let user = resolve_user(cli.user.as_deref());
    let store = LogStore::new(&cfg.log_dir);

    // First-ever entry for a user asks before creating the log file.
    let handle = store.open_or_create(&user, |name| {
        messages::confirm(&format!("Create new work log for user {name}?"), true)
    })?;

    // clap guarantees --time is present whenever --description is.
    let hours = cli
        .time
        .ok_or_else(|| AppError::Config("missing --time".to_string()))?;
    let description = cli.description.join(" ");

    handle.append(&LogEntry::now(hours, description))?;

    messages::success("Log entry written.");
    Ok(())
}
