use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parse a departure/arrival display string into a time of day. Accepts both
/// zero-padded and bare hours ("06:30", "9:00"); anything else is `None`
/// rather than a partial value.
pub fn parse_departure(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()
}

/// Coarse time-of-day bucket used by the departure-time filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeBucket {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeBucket {
    /// Bucket for an hour of day. The ranges mirror the filter labels:
    /// Morning 5-12, Afternoon 12-17, Evening 17-21, Night wraps the rest.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeBucket::Morning,
            12..=16 => TimeBucket::Afternoon,
            17..=20 => TimeBucket::Evening,
            _ => TimeBucket::Night,
        }
    }

    /// Classify a departure display string. `None` when the string does not
    /// parse as a time, in which case the record belongs to no bucket.
    pub fn classify(departure: &str) -> Option<Self> {
        parse_departure(departure).map(|time| Self::from_hour(time.hour()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimeBucket::Morning => "Morning",
            TimeBucket::Afternoon => "Afternoon",
            TimeBucket::Evening => "Evening",
            TimeBucket::Night => "Night",
        }
    }

    /// Case-insensitive match against a free-form slot label such as
    /// "Morning (5AM - 12PM)".
    pub fn matches_slot(&self, label: &str) -> bool {
        label.to_lowercase().contains(&self.name().to_lowercase())
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
