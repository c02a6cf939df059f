//! Subtitle cue model and SRT timestamp codec

use crate::core::models::results::{CoreError, CoreResult};

/// One subtitle entry: a timing window in milliseconds and a text payload.
///
/// `text` may contain internal line breaks. `index` is the SRT sequence
/// number; it carries no timing meaning and is rewritten before output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    pub index: usize,
    pub start_ms: i64,
    pub end_ms: i64,
    pub text: String,
}

impl Cue {
    pub fn new(start_ms: i64, end_ms: i64, text: impl Into<String>) -> Self {
        Self {
            index: 0,
            start_ms,
            end_ms,
            text: text.into(),
        }
    }
}

/// Parse SRT timestamp (HH:MM:SS,mmm) to milliseconds
///
/// Also accepts `.` as the millisecond separator; some tools emit it.
pub fn parse_timestamp(s: &str) -> CoreResult<i64> {
    let parts: Vec<&str> = s.trim().split([':', ',', '.']).collect();
    if parts.len() != 4 {
        return Err(CoreError::ParseError(format!("bad timestamp: {}", s)));
    }

    let field = |part: &str| -> CoreResult<i64> {
        part.parse()
            .map_err(|_| CoreError::ParseError(format!("bad timestamp: {}", s)))
    };

    let hours = field(parts[0])?;
    let minutes = field(parts[1])?;
    let seconds = field(parts[2])?;
    let millis = field(parts[3])?;

    Ok((hours * 3600 + minutes * 60 + seconds) * 1000 + millis)
}

/// Format milliseconds as SRT timestamp (HH:MM:SS,mmm)
pub fn format_timestamp(ms: i64) -> String {
    let total_seconds = ms / 1000;
    let millis = ms % 1000;

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}
