mod app_config;

use anyhow::Context;
use app_config::Config;
use rand::thread_rng;
use sawari_booking::{default_promotions, BookingSession, Offer, PassengerDetails};
use sawari_catalog::mock_fleet;
use sawari_search::{search, FilterSpec, SortKey};
use sawari_shared::{query, Masked, TripQuery};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Drives one scripted user session end to end: landing page search,
/// filtered results, seat selection, booking confirmation. Everything is
/// in-memory; nothing survives the process.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sawari=debug,sawari_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("failed to load config")?;

    let fleet = mock_fleet();
    for bus in &fleet {
        bus.validate()?;
    }
    tracing::info!(buses = fleet.len(), "fleet loaded");

    for promo in default_promotions() {
        tracing::info!(code = %promo.code, title = %promo.title, "active promotion");
    }

    // Landing page: the hero form submits a route and date as navigation
    // parameters.
    let trip = TripQuery::new(
        config.demo.from.clone(),
        config.demo.to.clone(),
        TripQuery::default().date,
    );
    tracing::info!(from = %trip.from, to = %trip.to, date = %trip.date, query = %trip.to_query(), "searching");

    // Search page, no filters: everything, earliest departure first.
    let all = search(&fleet, &FilterSpec::default(), SortKey::Departure);
    tracing::info!(found = all.len(), "unfiltered results");

    // Narrow down: AC evening departures within the slider range.
    let mut filters = FilterSpec {
        price_range: (config.search.price_floor, config.search.price_ceiling),
        ..FilterSpec::default()
    };
    filters.set_ac(Some(true));
    filters.toggle_time_slot("Evening (5PM - 9PM)");

    let mut results = search(&fleet, &filters, SortKey::Rating);
    if results.is_empty() {
        tracing::warn!("no bus matches the filters, clearing them");
        filters.clear();
        results = search(&fleet, &filters, SortKey::Rating);
    }
    for bus in &results {
        tracing::info!(
            id = %bus.id,
            name = %bus.name,
            departs = %bus.departure_time,
            rating = bus.rating,
            price = bus.price,
            "result"
        );
    }

    // "Book Now" hands the bus id and trip to the booking view as
    // navigation parameters.
    let chosen = results.first().context("fleet is empty")?;
    let booking_query = format!("busId={}&{}", chosen.id, trip.to_query());
    tracing::info!(url = %format!("/booking?{}", booking_query), "navigating to booking");

    let bus_id = query::get(&booking_query, "busId").context("busId parameter missing")?;
    let trip = TripQuery::from_query(&booking_query);
    let mut rng = thread_rng();
    let mut session = BookingSession::for_bus(
        &fleet,
        &bus_id,
        trip,
        &config.seat_plan,
        &mut rng,
    )?;
    tracing::info!(
        bus = %session.bus.name,
        open_seats = session.seat_map().available_count(),
        "booking started"
    );

    let seat = session
        .seat_map()
        .seats()
        .iter()
        .find(|s| s.is_available)
        .context("no open seat on this coach")?
        .id
        .clone();
    session.select_seat(&seat);

    session.set_passenger(PassengerDetails {
        name: "Asha Verma".to_string(),
        age: "29".to_string(),
        phone: Masked::new("+91 9876543210".to_string()),
        email: Some(Masked::new("asha@example.com".to_string())),
        ..PassengerDetails::default()
    });
    session.toggle_offer(Offer::FirstBooking);
    session.accept_terms(true);
    tracing::info!(seat = %seat, total = session.total_fare(), "checkout ready");

    let confirmation = session.confirm()?;
    tracing::info!(
        confirmation = %confirmation.id,
        success_url = %format!("/booking-success?{}", confirmation.success_query()),
        "done"
    );

    Ok(())
}
