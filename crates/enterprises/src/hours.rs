use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use marketplace_core::{DomainError, DomainResult, ValueObject};

const TIME_FORMAT: &str = "%H:%M";

/// Market opening hours as two `HH:MM` times.
///
/// Closing may come before opening: `22:00`-`06:00` is a market open overnight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    opens: NaiveTime,
    closes: NaiveTime,
}

impl ValueObject for OpeningHours {}

impl OpeningHours {
    pub fn parse(opens: &str, closes: &str) -> DomainResult<Self> {
        Ok(Self {
            opens: parse_time(opens, "opening time")?,
            closes: parse_time(closes, "closing time")?,
        })
    }

    /// Whether the market stays open past midnight.
    pub fn crosses_midnight(&self) -> bool {
        self.closes < self.opens
    }

    pub fn opens_label(&self) -> String {
        self.opens.format(TIME_FORMAT).to_string()
    }

    pub fn closes_label(&self) -> String {
        self.closes.format(TIME_FORMAT).to_string()
    }
}

/// Strict two-digit `HH:MM`.
fn parse_time(value: &str, field: &str) -> DomainResult<NaiveTime> {
    let malformed = || DomainError::invalid_argument(format!("{field} must be HH:MM"));

    let bytes = value.as_bytes();
    let shaped = bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if !shaped {
        return Err(malformed());
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| malformed())
}
