use sawari_catalog::{parse_departure, Bus};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Ordering applied to search results.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Chronological by departure time, earliest first.
    #[default]
    Departure,
    /// Cheapest fare first.
    Price,
    /// Shortest trip first.
    Duration,
    /// Best rated first.
    Rating,
}

impl SortKey {
    pub fn compare(self, a: &Bus, b: &Bus) -> Ordering {
        match self {
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::Departure => compare_optional(
                parse_departure(&a.departure_time),
                parse_departure(&b.departure_time),
            ),
            SortKey::Duration => compare_optional(
                parse_duration_minutes(&a.duration),
                parse_duration_minutes(&b.duration),
            ),
        }
    }
}

/// Ascending over parsed values; records whose field failed to parse sort
/// after every parseable one instead of contributing garbage ordering.
fn compare_optional<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Parse a duration label like "5h 30m" into total minutes. "5h" and "45m"
/// alone are accepted; anything else is `None`.
pub fn parse_duration_minutes(raw: &str) -> Option<u32> {
    let mut hours: Option<u32> = None;
    let mut minutes: Option<u32> = None;

    for token in raw.split_whitespace() {
        if let Some(value) = token.strip_suffix('h') {
            if hours.is_some() {
                return None;
            }
            hours = Some(value.parse().ok()?);
        } else if let Some(value) = token.strip_suffix('m') {
            if minutes.is_some() {
                return None;
            }
            minutes = Some(value.parse().ok()?);
        } else {
            return None;
        }
    }

    if hours.is_none() && minutes.is_none() {
        return None;
    }
    Some(hours.unwrap_or(0) * 60 + minutes.unwrap_or(0))
}
