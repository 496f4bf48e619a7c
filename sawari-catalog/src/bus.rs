use serde::{Deserialize, Serialize};
use std::fmt;

/// Seating categories offered across the fleet
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusType {
    Sleeper,
    Seater,
    SemiSleeper,
}

impl BusType {
    /// Display label as shown in filter widgets and cards.
    pub fn label(&self) -> &'static str {
        match self {
            BusType::Sleeper => "Sleeper",
            BusType::Seater => "Seater",
            BusType::SemiSleeper => "Semi-Sleeper",
        }
    }
}

impl fmt::Display for BusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One scheduled bus trip and its fare/amenities. Records are constant
/// configuration data: the fleet never mutates at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bus {
    pub id: String,
    pub name: String,
    pub operator: String,
    pub rating: f64,
    /// Departure as a 24h "HH:MM" string, as rendered on cards.
    pub departure_time: String,
    pub arrival_time: String,
    /// Free-form duration label, e.g. "5h 30m".
    pub duration: String,
    pub pickup: String,
    pub drop: String,
    pub seat_type: String,
    pub is_ac: bool,
    /// Fare per seat, in rupees.
    pub price: u32,
    pub seats_available: u32,
    pub total_seats: u32,
    pub amenities: Vec<String>,
    pub bus_type: BusType,
}

impl Bus {
    /// Check the record invariants. Fleet data is hand-maintained, so the
    /// demo runs this over every record at startup and the fleet tests do
    /// the same.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::MissingId(self.name.clone()));
        }
        if self.price == 0 {
            return Err(CatalogError::InvalidFare(self.id.clone()));
        }
        if self.seats_available > self.total_seats {
            return Err(CatalogError::Overbooked {
                id: self.id.clone(),
                available: self.seats_available,
                total: self.total_seats,
            });
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("bus record has no identifier: {0}")]
    MissingId(String),

    #[error("bus {0} has a zero fare")]
    InvalidFare(String),

    #[error("bus {id} lists more available seats than capacity: {available} > {total}")]
    Overbooked {
        id: String,
        available: u32,
        total: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bus() -> Bus {
        Bus {
            id: "42".to_string(),
            name: "Test Express".to_string(),
            operator: "Test Travels".to_string(),
            rating: 4.2,
            departure_time: "06:30".to_string(),
            arrival_time: "12:00".to_string(),
            duration: "5h 30m".to_string(),
            pickup: "Dantewada Bus Stand".to_string(),
            drop: "Pandri Bus Stand".to_string(),
            seat_type: "AC Sleeper (2+1)".to_string(),
            is_ac: true,
            price: 650,
            seats_available: 12,
            total_seats: 36,
            amenities: vec!["WiFi".to_string()],
            bus_type: BusType::Sleeper,
        }
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(sample_bus().validate().is_ok());
    }

    #[test]
    fn test_overbooked_record_rejected() {
        let mut bus = sample_bus();
        bus.seats_available = 40;
        assert!(matches!(
            bus.validate(),
            Err(CatalogError::Overbooked { .. })
        ));
    }

    #[test]
    fn test_zero_fare_rejected() {
        let mut bus = sample_bus();
        bus.price = 0;
        assert!(matches!(bus.validate(), Err(CatalogError::InvalidFare(_))));
    }

    #[test]
    fn test_bus_type_labels() {
        assert_eq!(BusType::SemiSleeper.label(), "Semi-Sleeper");
        assert_eq!(BusType::Sleeper.to_string(), "Sleeper");
    }
}
