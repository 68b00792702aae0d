//! Timestamp parsing and formatting.
//!
//! Candidate boundaries arrive as seconds; the dashboard displays them as
//! `m:ss` and some backend payloads carry `HH:MM:SS` strings.

use thiserror::Error;

/// Timestamp parsing error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimestampError {
    #[error("timestamp is empty")]
    Empty,

    #[error("timestamp contains negative values")]
    Negative,

    #[error("invalid {0} value: {1}")]
    InvalidValue(&'static str, String),

    #[error("invalid timestamp format: {0}")]
    InvalidFormat(String),
}

/// Parse a timestamp string to total seconds.
///
/// Supports `HH:MM:SS[.mmm]`, `MM:SS[.mmm]`, and bare `SS[.mmm]`.
pub fn parse_timestamp(ts: &str) -> Result<f64, TimestampError> {
    let ts = ts.trim();
    if ts.is_empty() {
        return Err(TimestampError::Empty);
    }

    let parts: Vec<&str> = ts.split(':').collect();
    let fields: &[&'static str] = match parts.len() {
        1 => &["seconds"],
        2 => &["minutes", "seconds"],
        3 => &["hours", "minutes", "seconds"],
        _ => return Err(TimestampError::InvalidFormat(ts.to_string())),
    };

    let mut total = 0.0;
    for (part, field) in parts.iter().zip(fields) {
        let value: f64 = part
            .parse()
            .map_err(|_| TimestampError::InvalidValue(field, part.to_string()))?;
        if value < 0.0 {
            return Err(TimestampError::Negative);
        }
        total = total * 60.0 + value;
    }
    Ok(total)
}

/// Format seconds as `HH:MM:SS` or `HH:MM:SS.mmm`.
pub fn format_seconds(total_secs: f64) -> String {
    let hours = (total_secs / 3600.0).floor() as u32;
    let mins = ((total_secs % 3600.0) / 60.0).floor() as u32;
    let secs = total_secs % 60.0;

    // Include milliseconds only when present
    if (secs - secs.floor()).abs() > 0.0001 {
        format!("{:02}:{:02}:{:06.3}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}:{:02}", hours, mins, secs.floor() as u32)
    }
}

/// Format seconds as the compact `m:ss` the playback controls display.
pub fn format_clock(total_secs: f64) -> String {
    let total_secs = total_secs.max(0.0);
    let mins = (total_secs / 60.0).floor() as u32;
    let secs = (total_secs % 60.0).floor() as u32;
    format!("{}:{:02}", mins, secs)
}
