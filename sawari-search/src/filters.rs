use sawari_catalog::{Bus, BusType, TimeBucket};
use serde::{Deserialize, Serialize};

/// Default bounds of the price slider, in rupees.
pub const PRICE_FLOOR: u32 = 400;
pub const PRICE_CEILING: u32 = 1000;

/// The active user-selected constraints narrowing the bus list. Owned by the
/// search session; reset to defaults on "clear all" and mutated field by
/// field as filter widgets change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterSpec {
    /// Keep only these seating categories; empty means no constraint.
    pub bus_types: Vec<BusType>,
    /// Departure-time slot labels, e.g. "Morning (5AM - 12PM)"; empty means
    /// no constraint. Matching is textual against the bucket name.
    pub time_slots: Vec<String>,
    /// Inclusive fare range, min <= max.
    pub price_range: (u32, u32),
    /// AC tri-state: Some(true) AC only, Some(false) non-AC only, None either.
    pub ac: Option<bool>,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            bus_types: Vec::new(),
            time_slots: Vec::new(),
            price_range: (PRICE_FLOOR, PRICE_CEILING),
            ac: None,
        }
    }
}

impl FilterSpec {
    /// Add or remove a seating category, checkbox-style.
    pub fn toggle_bus_type(&mut self, bus_type: BusType) {
        if let Some(index) = self.bus_types.iter().position(|t| *t == bus_type) {
            self.bus_types.remove(index);
        } else {
            self.bus_types.push(bus_type);
        }
    }

    /// Add or remove a departure slot label, checkbox-style.
    pub fn toggle_time_slot(&mut self, label: impl Into<String>) {
        let label = label.into();
        if let Some(index) = self.time_slots.iter().position(|s| *s == label) {
            self.time_slots.remove(index);
        } else {
            self.time_slots.push(label);
        }
    }

    /// Set the fare range, normalizing so min <= max always holds.
    pub fn set_price_range(&mut self, min: u32, max: u32) {
        self.price_range = if min <= max { (min, max) } else { (max, min) };
    }

    pub fn set_ac(&mut self, ac: Option<bool>) {
        self.ac = ac;
    }

    /// Reset everything back to the defaults.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when any field deviates from the defaults; drives the
    /// "Clear All" affordance.
    pub fn has_active_filters(&self) -> bool {
        *self != Self::default()
    }

    /// The filtering predicate: a record is kept iff every active
    /// constraint holds.
    pub fn matches(&self, bus: &Bus) -> bool {
        if !self.bus_types.is_empty() && !self.bus_types.contains(&bus.bus_type) {
            return false;
        }

        if let Some(wants_ac) = self.ac {
            if bus.is_ac != wants_ac {
                return false;
            }
        }

        let (min, max) = self.price_range;
        if bus.price < min || bus.price > max {
            return false;
        }

        if !self.time_slots.is_empty() {
            // A departure that does not classify belongs to no bucket and
            // cannot match any slot.
            match TimeBucket::classify(&bus.departure_time) {
                Some(bucket) => {
                    if !self.time_slots.iter().any(|slot| bucket.matches_slot(slot)) {
                        return false;
                    }
                }
                None => return false,
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sawari_catalog::mock_fleet;

    #[test]
    fn test_default_spec_keeps_fleet_records() {
        let spec = FilterSpec::default();
        for bus in mock_fleet() {
            assert!(spec.matches(&bus), "default spec dropped bus {}", bus.id);
        }
    }

    #[test]
    fn test_toggle_bus_type() {
        let mut spec = FilterSpec::default();
        spec.toggle_bus_type(BusType::Sleeper);
        assert_eq!(spec.bus_types, vec![BusType::Sleeper]);
        spec.toggle_bus_type(BusType::Sleeper);
        assert!(spec.bus_types.is_empty());
    }

    #[test]
    fn test_price_range_normalized() {
        let mut spec = FilterSpec::default();
        spec.set_price_range(900, 500);
        assert_eq!(spec.price_range, (500, 900));
    }

    #[test]
    fn test_clear_resets_to_defaults() {
        let mut spec = FilterSpec::default();
        spec.toggle_time_slot("Night (9PM - 5AM)");
        spec.set_ac(Some(true));
        assert!(spec.has_active_filters());

        spec.clear();
        assert!(!spec.has_active_filters());
        assert_eq!(spec.price_range, (PRICE_FLOOR, PRICE_CEILING));
    }

    #[test]
    fn test_time_slot_excludes_other_buckets() {
        let fleet = mock_fleet();
        let mut spec = FilterSpec::default();
        spec.toggle_time_slot("Morning (5AM - 12PM)");

        let night_bus = fleet.iter().find(|b| b.id == "9").unwrap();
        let morning_bus = fleet.iter().find(|b| b.id == "1").unwrap();
        assert!(!spec.matches(night_bus));
        assert!(spec.matches(morning_bus));
    }

    #[test]
    fn test_unparseable_departure_fails_active_slot_filter() {
        let mut bus = mock_fleet().remove(0);
        bus.departure_time = "early".to_string();

        let mut spec = FilterSpec::default();
        assert!(spec.matches(&bus));
        spec.toggle_time_slot("Morning (5AM - 12PM)");
        assert!(!spec.matches(&bus));
    }
}
