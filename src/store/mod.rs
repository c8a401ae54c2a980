//! Append-only per-user work logs.
//!
//! One plain-text file per user, `<log-dir>/<User>.wl`, one record per
//! line. Files are only ever appended to: no update, no delete, no
//! compaction. Unbounded growth is an accepted lifetime property.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::models::entry::LogEntry;

pub const LOG_FILE_EXT: &str = "wl";

/// Storage for all per-user logs under one directory.
pub struct LogStore {
    dir: PathBuf,
}

impl LogStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of `user`'s log file.
    pub fn log_path(&self, user: &str) -> PathBuf {
        self.dir.join(format!("{user}.{LOG_FILE_EXT}"))
    }

    /// True iff a log for `user` has been created before.
    pub fn exists(&self, user: &str) -> bool {
        self.log_path(user).exists()
    }

    /// Open `user`'s log, creating it if needed. A missing log is only
    /// created after `confirm` approves; declining fails with
    /// `UserAborted` and leaves nothing on disk.
    pub fn open_or_create<F>(&self, user: &str, confirm: F) -> AppResult<LogHandle>
    where
        F: FnOnce(&str) -> bool,
    {
        let path = self.log_path(user);
        if !path.exists() {
            if !confirm(user) {
                return Err(AppError::UserAborted);
            }
            fs::create_dir_all(&self.dir)?;
            File::create(&path)?;
        }
        Ok(LogHandle { path })
    }

    /// Open `user`'s existing log for reading.
    pub fn open(&self, user: &str) -> AppResult<LogHandle> {
        let path = self.log_path(user);
        if !path.exists() {
            return Err(AppError::NoSuchLog(path.display().to_string()));
        }
        Ok(LogHandle { path })
    }
}

/// Handle to one user's log file.
#[derive(Debug)]
pub struct LogHandle {
    path: PathBuf,
}

impl LogHandle {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry as a single line. Existing lines are never
    /// reordered or rewritten.
    pub fn append(&self, entry: &LogEntry) -> AppResult<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        writeln!(file, "{entry}")?;
        file.flush()?;
        Ok(())
    }

    /// Read and decode the whole log, in file order. Entries are not
    /// sorted by timestamp. One malformed line fails the entire read,
    /// there are no best-effort partial results.
    pub fn read_all(&self) -> AppResult<Vec<LogEntry>> {
        if !self.path.exists() {
            return Err(AppError::NoSuchLog(self.path.display().to_string()));
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut entries = Vec::new();
        for (n, line) in reader.lines().enumerate() {
            let line = line?;
            let entry = line.parse::<LogEntry>().map_err(|e| match e {
                AppError::CorruptRecord(msg) => {
                    AppError::CorruptRecord(format!("line {}: {msg}", n + 1))
                }
                other => other,
            })?;
            entries.push(entry);
        }
        Ok(entries)
    }
}
