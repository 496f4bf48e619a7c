use crate::query;
use serde::{Deserialize, Serialize};

/// Fallback route shown when a view is reached without search parameters.
pub const DEFAULT_FROM: &str = "Dantewada";
pub const DEFAULT_TO: &str = "Raipur";

/// The route and travel date a session is searching or booking for.
/// All three values are free text carried through navigation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TripQuery {
    pub from: String,
    pub to: String,
    /// Travel date as entered by the date picker ("YYYY-MM-DD").
    pub date: String,
}

impl TripQuery {
    pub fn new(from: impl Into<String>, to: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            date: date.into(),
        }
    }

    /// Read `from`/`to`/`date` out of a raw query string. Missing parameters
    /// fall back to the defaults, matching how the search view behaves when
    /// reached directly.
    pub fn from_query(raw: &str) -> Self {
        Self {
            from: query::get(raw, "from").unwrap_or_else(|| DEFAULT_FROM.to_string()),
            to: query::get(raw, "to").unwrap_or_else(|| DEFAULT_TO.to_string()),
            date: query::get(raw, "date").unwrap_or_else(today),
        }
    }

    pub fn to_query(&self) -> String {
        query::build(&[
            ("from", &self.from),
            ("to", &self.to),
            ("date", &self.date),
        ])
    }
}

impl Default for TripQuery {
    fn default() -> Self {
        Self {
            from: DEFAULT_FROM.to_string(),
            to: DEFAULT_TO.to_string(),
            date: today(),
        }
    }
}

fn today() -> String {
    chrono::Local::now().date_naive().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query_reads_parameters() {
        let trip = TripQuery::from_query("from=Jagdalpur&to=Bilaspur&date=2026-08-15");
        assert_eq!(trip.from, "Jagdalpur");
        assert_eq!(trip.to, "Bilaspur");
        assert_eq!(trip.date, "2026-08-15");
    }

    #[test]
    fn test_missing_parameters_fall_back_to_defaults() {
        let trip = TripQuery::from_query("date=2026-08-15");
        assert_eq!(trip.from, DEFAULT_FROM);
        assert_eq!(trip.to, DEFAULT_TO);
        assert_eq!(trip.date, "2026-08-15");
    }

    #[test]
    fn test_query_round_trip() {
        let trip = TripQuery::new("Dantewada", "Raipur", "2026-08-15");
        assert_eq!(TripQuery::from_query(&trip.to_query()), trip);
    }
}
