use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::stats;
use crate::errors::AppResult;
use crate::store::LogStore;
use crate::utils::user::resolve_user;

/// Print aggregate statistics for the user's log.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let user = resolve_user(cli.user.as_deref());
    let store = LogStore::new(&cfg.log_dir);

    let entries = store.open(&user)?.read_all()?;
    let s = stats::compute(&entries)?;

    println!("Statistics for {user}");
    println!("{}", "-".repeat(32));
    println!("  Total hours    : {:.2}", s.total_hours);
    println!("  Hours per week : {:.2}", s.hours_per_week);

    Ok(())
}
