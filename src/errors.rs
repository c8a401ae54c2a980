//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Log store
    // ---------------------------
    #[error("No such log file exists: {0}")]
    NoSuchLog(String),

    #[error("User aborted.")]
    UserAborted,

    #[error("Corrupt log record: {0}")]
    CorruptRecord(String),

    // ---------------------------
    // Statistics
    // ---------------------------
    #[error("The log contains no entries")]
    EmptyLog,

    #[error("All entries share one timestamp, cannot compute hours per week")]
    InsufficientSpan,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Process exit code for this error. `UserAborted` and `NoSuchLog` share
    /// code 3: both mean "no usable log". Usage errors exit 2 via clap.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::UserAborted | AppError::NoSuchLog(_) => 3,
            _ => 1,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
