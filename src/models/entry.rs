use crate::errors::AppError;
use chrono::Utc;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One recorded work session.
///
/// On disk this is a single line, `<timestamp>:<hours>:<description>`:
/// the timestamp in epoch seconds (UTC), the hours worked as a float, and
/// the description as the entire remainder of the line after the second
/// colon. The description may therefore contain colons, but never a
/// newline (an embedded newline would split the record in two).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub timestamp: i64,
    pub duration_hours: f64,
    pub description: String,
}

impl LogEntry {
    /// Build an entry stamped with the current UTC time. The timestamp is
    /// always taken from the system clock, never supplied by the caller.
    pub fn now(duration_hours: f64, description: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now().timestamp(),
            duration_hours,
            description: description.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.timestamp, self.duration_hours, self.description
        )
    }
}

impl FromStr for LogEntry {
    type Err = AppError;

    /// Decode one log line. Split on `:` at most twice: the first two
    /// fields must be strictly numeric, the third is taken verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');

        let ts_field = parts.next().unwrap_or_default();
        let hours_field = parts
            .next()
            .ok_or_else(|| AppError::CorruptRecord(format!("missing fields in '{s}'")))?;
        let description = parts
            .next()
            .ok_or_else(|| AppError::CorruptRecord(format!("missing description in '{s}'")))?;

        let timestamp = ts_field
            .parse::<i64>()
            .map_err(|_| AppError::CorruptRecord(format!("bad timestamp '{ts_field}'")))?;
        let duration_hours = hours_field
            .parse::<f64>()
            .map_err(|_| AppError::CorruptRecord(format!("bad duration '{hours_field}'")))?;

        Ok(Self {
            timestamp,
            duration_hours,
            description: description.to_string(),
        })
    }
}
