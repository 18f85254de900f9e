//! Session Window Value Object

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A daily window in New York local time. `end` is exclusive and may wrap
/// past midnight (`19:00-00:00`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionWindow {
    /// Window open.
    pub start: NaiveTime,
    /// Window close (exclusive).
    pub end: NaiveTime,
}

impl SessionWindow {
    /// Window from whole hours. Hours outside `0..24` are taken modulo 24.
    #[must_use]
    pub fn from_hours(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start: NaiveTime::from_hms_opt(start_hour % 24, 0, 0).unwrap_or(NaiveTime::MIN),
            end: NaiveTime::from_hms_opt(end_hour % 24, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}

impl fmt::Display for SessionWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
