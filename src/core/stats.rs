//! Aggregate statistics over one user's full entry sequence.

use crate::errors::{AppError, AppResult};
use crate::models::entry::LogEntry;

/// Hours in a 7-day week.
const WEEK_HOURS: f64 = 168.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    /// Sum of all logged durations.
    pub total_hours: f64,
    /// Wall-clock time between the earliest and latest entry, in hours.
    pub span_hours: f64,
    /// Total hours normalized to a 168-hour week over the log's span.
    pub hours_per_week: f64,
}

/// Reduce the full entry sequence into aggregate stats.
///
/// Earliest/latest timestamps are a global min/max over the whole set, so
/// the result does not depend on file order and no sorting happens here.
pub fn compute(entries: &[LogEntry]) -> AppResult<Stats> {
    if entries.is_empty() {
        return Err(AppError::EmptyLog);
    }

    let total_hours: f64 = entries.iter().map(|e| e.duration_hours).sum();

    let earliest = entries
        .iter()
        .map(|e| e.timestamp)
        .min()
        .ok_or(AppError::EmptyLog)?;
    let latest = entries
        .iter()
        .map(|e| e.timestamp)
        .max()
        .ok_or(AppError::EmptyLog)?;

    let span_hours = (latest - earliest) as f64 / 3600.0;
    if span_hours == 0.0 {
        // A single entry (or identical timestamps) would divide by zero.
        return Err(AppError::InsufficientSpan);
    }

    Ok(Stats {
        total_hours,
        span_hours,
        hours_per_week: WEEK_HOURS * total_hours / span_hours,
    })
}
