use clap::{ArgGroup, Parser};

/// Command-line interface definition for worklog
/// CLI application to keep per-user work logs in plain text
#[derive(Parser)]
#[command(
    name = "wl",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work logging CLI: record hours worked and show per-week statistics",
    long_about = None
)]
#[command(group(ArgGroup::new("mode").required(true).args(["description", "stats"])))]
pub struct Cli {
    /// Override the log directory (useful for tests or custom locations)
    #[arg(long = "log-dir", value_name = "DIR")]
    pub log_dir: Option<String>,

    /// Work description (one or more words, joined with single spaces)
    #[arg(
        short = 'd',
        long = "description",
        num_args = 1..,
        value_name = "WORD",
        requires = "time"
    )]
    pub description: Vec<String>,

    /// Hours worked (non-negative)
    #[arg(short = 't', long = "time", value_name = "HOURS", value_parser = parse_hours)]
    pub time: Option<f64>,

    /// Display work log statistics
    #[arg(short = 's', long = "stats")]
    pub stats: bool,

    /// User name (defaults to the current account name, capitalized)
    #[arg(short = 'u', long = "user", value_name = "NAME")]
    pub user: Option<String>,
}

fn parse_hours(s: &str) -> Result<f64, String> {
    let hours: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number of hours"))?;
    if hours < 0.0 {
        return Err("hours worked cannot be negative".to_string());
    }
    Ok(hours)
}
