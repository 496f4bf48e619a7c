use crate::filters::FilterSpec;
use crate::sort::SortKey;
use sawari_catalog::Bus;

/// Produce the filtered, ordered view of the fleet for one search. Pure and
/// synchronous: no I/O, no error conditions. Malformed record fields
/// degrade to "sorts last" / "matches nothing" rather than failing.
///
/// The sort is stable, so records that compare equal retain fleet order.
pub fn search(fleet: &[Bus], filters: &FilterSpec, sort: SortKey) -> Vec<Bus> {
    let mut results: Vec<Bus> = fleet
        .iter()
        .filter(|bus| filters.matches(bus))
        .cloned()
        .collect();

    results.sort_by(|a, b| sort.compare(a, b));

    tracing::debug!(
        total = fleet.len(),
        matched = results.len(),
        sort = ?sort,
        "bus search complete"
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use sawari_catalog::{mock_fleet, BusType};

    #[test]
    fn test_output_satisfies_all_active_predicates() {
        let fleet = mock_fleet();
        let mut spec = FilterSpec::default();
        spec.toggle_bus_type(BusType::Sleeper);
        spec.set_ac(Some(true));
        spec.set_price_range(500, 900);

        let results = search(&fleet, &spec, SortKey::Price);
        assert!(!results.is_empty());
        for bus in &results {
            assert_eq!(bus.bus_type, BusType::Sleeper);
            assert!(bus.is_ac);
            assert!(bus.price >= 500 && bus.price <= 900);
        }

        // No false negatives: everything matching must be in the output.
        let expected = fleet.iter().filter(|b| spec.matches(b)).count();
        assert_eq!(results.len(), expected);
    }

    #[test]
    fn test_ac_and_price_predicate_example() {
        // One AC bus at 600 and one non-AC at 450: AC-only over [400, 1000]
        // yields exactly the AC bus.
        let mut ac_bus = mock_fleet().remove(0);
        ac_bus.id = "ac".to_string();
        ac_bus.is_ac = true;
        ac_bus.price = 600;
        let mut non_ac_bus = mock_fleet().remove(0);
        non_ac_bus.id = "non-ac".to_string();
        non_ac_bus.is_ac = false;
        non_ac_bus.price = 450;

        let mut spec = FilterSpec::default();
        spec.set_ac(Some(true));
        spec.set_price_range(400, 1000);

        let results = search(&[ac_bus, non_ac_bus], &spec, SortKey::Price);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "ac");
    }

    #[test]
    fn test_price_sort_is_non_decreasing() {
        let results = search(&mock_fleet(), &FilterSpec::default(), SortKey::Price);
        for pair in results.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
    }

    #[test]
    fn test_duration_sort_example() {
        let mut short = mock_fleet().remove(0);
        short.duration = "1h 45m".to_string();
        let mut long = mock_fleet().remove(0);
        long.duration = "2h 30m".to_string();

        let results = search(
            &[long.clone(), short.clone()],
            &FilterSpec::default(),
            SortKey::Duration,
        );
        assert_eq!(results[0].duration, "1h 45m");
        assert_eq!(results[1].duration, "2h 30m");
    }

    #[test]
    fn test_rating_sort_is_non_increasing() {
        let results = search(&mock_fleet(), &FilterSpec::default(), SortKey::Rating);
        for pair in results.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn test_departure_sort_is_chronological() {
        let results = search(&mock_fleet(), &FilterSpec::default(), SortKey::Departure);
        let minutes: Vec<_> = results
            .iter()
            .filter_map(|b| sawari_catalog::parse_departure(&b.departure_time))
            .collect();
        for pair in minutes.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        // Earliest fleet departure is the 05:30 Morning Star.
        assert_eq!(results[0].id, "11");
    }

    #[test]
    fn test_empty_result_when_nothing_matches() {
        let mut spec = FilterSpec::default();
        spec.set_price_range(1, 2);
        assert!(search(&mock_fleet(), &spec, SortKey::Price).is_empty());
    }
}
