use crate::bus::{Bus, BusType};

/// Look up a fleet record by its identifier.
pub fn find_bus<'a>(fleet: &'a [Bus], id: &str) -> Option<&'a Bus> {
    fleet.iter().find(|bus| bus.id == id)
}

/// The static demo fleet for the Dantewada - Raipur corridor. Built on
/// demand; callers treat the list as read-only.
pub fn mock_fleet() -> Vec<Bus> {
    vec![
        Bus {
            id: "1".to_string(),
            name: "Bastar Express".to_string(),
            operator: "Mahendra Travels".to_string(),
            rating: 4.5,
            departure_time: "06:00".to_string(),
            arrival_time: "11:30".to_string(),
            duration: "5h 30m".to_string(),
            pickup: "Dantewada Bus Stand".to_string(),
            drop: "Pandri Bus Stand".to_string(),
            seat_type: "AC Sleeper (2+1)".to_string(),
            is_ac: true,
            price: 650,
            seats_available: 12,
            total_seats: 36,
            amenities: vec![
                "WiFi".to_string(),
                "Charging Point".to_string(),
                "Water Bottle".to_string(),
                "Blanket".to_string(),
            ],
            bus_type: BusType::Sleeper,
        },
        Bus {
            id: "2".to_string(),
            name: "Chhattisgarh Queen".to_string(),
            operator: "Payal Travels".to_string(),
            rating: 4.2,
            departure_time: "07:15".to_string(),
            arrival_time: "13:15".to_string(),
            duration: "6h 0m".to_string(),
            pickup: "Geedam Road".to_string(),
            drop: "Raipur Railway Station".to_string(),
            seat_type: "Seater (2+2)".to_string(),
            is_ac: false,
            price: 450,
            seats_available: 23,
            total_seats: 40,
            amenities: vec!["Charging Point".to_string(), "Water Bottle".to_string()],
            bus_type: BusType::Seater,
        },
        Bus {
            id: "3".to_string(),
            name: "Danteshwari Deluxe".to_string(),
            operator: "Shrinath Travels".to_string(),
            rating: 4.7,
            departure_time: "08:30".to_string(),
            arrival_time: "13:45".to_string(),
            duration: "5h 15m".to_string(),
            pickup: "Dantewada Bus Stand".to_string(),
            drop: "Pandri Bus Stand".to_string(),
            seat_type: "AC Semi-Sleeper (2+2)".to_string(),
            is_ac: true,
            price: 580,
            seats_available: 8,
            total_seats: 44,
            amenities: vec![
                "WiFi".to_string(),
                "Charging Point".to_string(),
                "Snacks".to_string(),
                "Reading Light".to_string(),
            ],
            bus_type: BusType::SemiSleeper,
        },
        Bus {
            id: "4".to_string(),
            name: "Indravati Travels".to_string(),
            operator: "Indravati Roadways".to_string(),
            rating: 3.9,
            departure_time: "10:45".to_string(),
            arrival_time: "17:00".to_string(),
            duration: "6h 15m".to_string(),
            pickup: "Hospital Chowk".to_string(),
            drop: "Tatibandh".to_string(),
            seat_type: "Seater (3+2)".to_string(),
            is_ac: false,
            price: 420,
            seats_available: 31,
            total_seats: 50,
            amenities: vec!["Water Bottle".to_string()],
            bus_type: BusType::Seater,
        },
        Bus {
            id: "5".to_string(),
            name: "Raipur Superfast".to_string(),
            operator: "VRL Travels".to_string(),
            rating: 4.4,
            departure_time: "13:00".to_string(),
            arrival_time: "18:20".to_string(),
            duration: "5h 20m".to_string(),
            pickup: "Dantewada Bus Stand".to_string(),
            drop: "Raipur Central".to_string(),
            seat_type: "AC Seater (2+2)".to_string(),
            is_ac: true,
            price: 550,
            seats_available: 17,
            total_seats: 40,
            amenities: vec![
                "WiFi".to_string(),
                "Charging Point".to_string(),
                "Snacks".to_string(),
            ],
            bus_type: BusType::Seater,
        },
        Bus {
            id: "6".to_string(),
            name: "Jagdalpur Link".to_string(),
            operator: "Kanker Roadlines".to_string(),
            rating: 3.6,
            departure_time: "14:30".to_string(),
            arrival_time: "20:30".to_string(),
            duration: "6h 0m".to_string(),
            pickup: "Geedam Road".to_string(),
            drop: "Pandri Bus Stand".to_string(),
            seat_type: "Semi-Sleeper (2+2)".to_string(),
            is_ac: false,
            price: 480,
            seats_available: 3,
            total_seats: 44,
            amenities: vec!["Charging Point".to_string(), "Water Bottle".to_string()],
            bus_type: BusType::SemiSleeper,
        },
        Bus {
            id: "7".to_string(),
            name: "Dandakaranya Express".to_string(),
            operator: "Mahendra Travels".to_string(),
            rating: 4.1,
            departure_time: "16:15".to_string(),
            arrival_time: "22:00".to_string(),
            duration: "5h 45m".to_string(),
            pickup: "Hospital Chowk".to_string(),
            drop: "Raipur Railway Station".to_string(),
            seat_type: "AC Sleeper (2+1)".to_string(),
            is_ac: true,
            price: 700,
            seats_available: 19,
            total_seats: 36,
            amenities: vec![
                "WiFi".to_string(),
                "Charging Point".to_string(),
                "Blanket".to_string(),
                "Water Bottle".to_string(),
            ],
            bus_type: BusType::Sleeper,
        },
        Bus {
            id: "8".to_string(),
            name: "Green Line".to_string(),
            operator: "Neeta Tours".to_string(),
            rating: 4.6,
            departure_time: "18:00".to_string(),
            arrival_time: "23:30".to_string(),
            duration: "5h 30m".to_string(),
            pickup: "Dantewada Bus Stand".to_string(),
            drop: "Raipur Central".to_string(),
            seat_type: "AC Semi-Sleeper (2+2)".to_string(),
            is_ac: true,
            price: 620,
            seats_available: 26,
            total_seats: 44,
            amenities: vec![
                "WiFi".to_string(),
                "Charging Point".to_string(),
                "Snacks".to_string(),
                "Movie".to_string(),
            ],
            bus_type: BusType::SemiSleeper,
        },
        Bus {
            id: "9".to_string(),
            name: "Night Rider".to_string(),
            operator: "Shrinath Travels".to_string(),
            rating: 4.3,
            departure_time: "21:30".to_string(),
            arrival_time: "04:45".to_string(),
            duration: "7h 15m".to_string(),
            pickup: "Geedam Road".to_string(),
            drop: "Tatibandh".to_string(),
            seat_type: "AC Sleeper (2+1)".to_string(),
            is_ac: true,
            price: 850,
            seats_available: 9,
            total_seats: 30,
            amenities: vec![
                "WiFi".to_string(),
                "Blanket".to_string(),
                "Reading Light".to_string(),
                "Water Bottle".to_string(),
            ],
            bus_type: BusType::Sleeper,
        },
        Bus {
            id: "10".to_string(),
            name: "Sleeper King".to_string(),
            operator: "Payal Travels".to_string(),
            rating: 3.8,
            departure_time: "22:45".to_string(),
            arrival_time: "05:30".to_string(),
            duration: "6h 45m".to_string(),
            pickup: "Hospital Chowk".to_string(),
            drop: "Pandri Bus Stand".to_string(),
            seat_type: "Sleeper (2+1)".to_string(),
            is_ac: false,
            price: 520,
            seats_available: 14,
            total_seats: 30,
            amenities: vec!["Blanket".to_string(), "Water Bottle".to_string()],
            bus_type: BusType::Sleeper,
        },
        Bus {
            id: "11".to_string(),
            name: "Morning Star".to_string(),
            operator: "Kanker Roadlines".to_string(),
            rating: 4.0,
            departure_time: "05:30".to_string(),
            arrival_time: "11:15".to_string(),
            duration: "5h 45m".to_string(),
            pickup: "Dantewada Bus Stand".to_string(),
            drop: "Raipur Railway Station".to_string(),
            seat_type: "Seater (2+2)".to_string(),
            is_ac: false,
            price: 430,
            seats_available: 37,
            total_seats: 40,
            amenities: vec!["Water Bottle".to_string(), "Charging Point".to_string()],
            bus_type: BusType::Seater,
        },
        Bus {
            id: "12".to_string(),
            name: "Capital Connect".to_string(),
            operator: "VRL Travels".to_string(),
            rating: 4.8,
            departure_time: "23:55".to_string(),
            arrival_time: "06:40".to_string(),
            duration: "6h 45m".to_string(),
            pickup: "Dantewada Bus Stand".to_string(),
            drop: "Raipur Central".to_string(),
            seat_type: "AC Sleeper (2+1)".to_string(),
            is_ac: true,
            price: 950,
            seats_available: 5,
            total_seats: 30,
            amenities: vec![
                "WiFi".to_string(),
                "Charging Point".to_string(),
                "Blanket".to_string(),
                "Snacks".to_string(),
                "Reading Light".to_string(),
            ],
            bus_type: BusType::Sleeper,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_record_is_valid() {
        for bus in mock_fleet() {
            bus.validate().unwrap();
        }
    }

    #[test]
    fn test_identifiers_are_unique() {
        let fleet = mock_fleet();
        let ids: HashSet<_> = fleet.iter().map(|bus| bus.id.as_str()).collect();
        assert_eq!(ids.len(), fleet.len());
    }

    #[test]
    fn test_every_departure_parses() {
        for bus in mock_fleet() {
            assert!(
                crate::timetable::parse_departure(&bus.departure_time).is_some(),
                "unparseable departure on bus {}",
                bus.id
            );
        }
    }

    #[test]
    fn test_find_bus() {
        let fleet = mock_fleet();
        assert_eq!(find_bus(&fleet, "3").map(|b| b.name.as_str()), Some("Danteshwari Deluxe"));
        assert!(find_bus(&fleet, "99").is_none());
    }
}
