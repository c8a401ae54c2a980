#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wl() -> Command {
    cargo_bin_cmd!("wl")
}

/// Create a unique log directory path inside the system temp dir and remove any leftovers
pub fn setup_log_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_worklog"));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Path of `user`'s log file under `dir`
pub fn log_file(dir: &str, user: &str) -> PathBuf {
    PathBuf::from(dir).join(format!("{user}.wl"))
}

/// Append one entry via the CLI, answering yes to the creation prompt if it appears
pub fn add_entry(dir: &str, user: &str, hours: &str, desc: &str) {
    wl().args(["--log-dir", dir, "-u", user, "-t", hours, "-d", desc])
        .write_stdin("y\n")
        .assert()
        .success();
}

/// Write a log file with the given raw contents, creating the directory
pub fn seed_log(dir: &str, user: &str, contents: &str) {
    fs::create_dir_all(dir).expect("create log dir");
    fs::write(log_file(dir, user), contents).expect("seed log file");
}
