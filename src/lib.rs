//! worklog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if cli.stats {
        cli::commands::stats::handle(cli, cfg)
    } else {
        cli::commands::add::handle(cli, cfg)
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once, then apply the command-line log directory override.
    let mut cfg = Config::load();
    if let Some(dir) = &cli.log_dir {
        cfg.log_dir = utils::path::expand_tilde(dir).to_string_lossy().to_string();
    }

    dispatch(&cli, &cfg)
}
