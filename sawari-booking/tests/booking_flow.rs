use rand::rngs::StdRng;
use rand::SeedableRng;
use sawari_booking::{BookingSession, Offer, PassengerDetails, SeatPlan};
use sawari_catalog::mock_fleet;
use sawari_search::{search, FilterSpec, SortKey};
use sawari_shared::{Masked, TripQuery};

// The whole demo flow: search the fleet, pick a result, book a seat.
#[test]
fn test_search_to_confirmation_flow() {
    let fleet = mock_fleet();

    // Search view: AC buses between 500 and 900, cheapest first.
    let mut filters = FilterSpec::default();
    filters.set_ac(Some(true));
    filters.set_price_range(500, 900);
    let results = search(&fleet, &filters, SortKey::Price);
    assert!(!results.is_empty());

    // Book the top result.
    let chosen = &results[0];
    let trip = TripQuery::new("Dantewada", "Raipur", "2026-08-15");
    let mut rng = StdRng::seed_from_u64(42);
    let mut session =
        BookingSession::for_bus(&fleet, &chosen.id, trip, &SeatPlan::default(), &mut rng)
            .expect("chosen bus comes from the fleet");

    let seat = session
        .seat_map()
        .seats()
        .iter()
        .find(|s| s.is_available)
        .expect("seeded plan leaves seats open")
        .id
        .clone();
    session.select_seat(&seat);
    session.set_passenger(PassengerDetails {
        name: "Asha Verma".to_string(),
        age: "29".to_string(),
        phone: Masked::new("+91 9876543210".to_string()),
        ..PassengerDetails::default()
    });
    session.toggle_offer(Offer::FirstBooking);
    session.accept_terms(true);

    let confirmation = session.confirm().expect("complete session confirms");
    assert_eq!(confirmation.bus_id, chosen.id);
    assert_eq!(confirmation.total_fare, chosen.price - 100);

    // The success view receives everything it needs back.
    let query = confirmation.success_query();
    assert!(query.contains(&format!("busId={}", chosen.id)));
    assert!(query.contains(&format!("seat={}", seat)));
    assert!(query.contains("from=Dantewada"));

    // Confirmations serialize cleanly for logging/snapshotting.
    let json = serde_json::to_value(&confirmation).unwrap();
    assert_eq!(json["seat"], seat);
    assert_eq!(json["trip"]["to"], "Raipur");
}

#[test]
fn test_incomplete_booking_never_confirms() {
    let fleet = mock_fleet();
    let mut rng = StdRng::seed_from_u64(42);
    let mut session = BookingSession::for_bus(
        &fleet,
        "5",
        TripQuery::default(),
        &SeatPlan::default(),
        &mut rng,
    )
    .unwrap();

    // Seat but no details.
    let seat = session
        .seat_map()
        .seats()
        .iter()
        .find(|s| s.is_available)
        .unwrap()
        .id
        .clone();
    session.select_seat(&seat);
    assert!(session.confirm().is_err());

    // Details but no terms.
    session.set_passenger(PassengerDetails {
        name: "Ravi Sahu".to_string(),
        phone: Masked::new("+91 9000000000".to_string()),
        ..PassengerDetails::default()
    });
    assert!(session.confirm().is_err());

    // Everything in place confirms.
    session.accept_terms(true);
    assert!(session.confirm().is_ok());
}
