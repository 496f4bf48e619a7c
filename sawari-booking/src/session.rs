use crate::offers::{self, Offer};
use crate::passenger::PassengerDetails;
use crate::seat_map::{SeatMap, SeatPlan};
use chrono::{DateTime, Utc};
use rand::Rng;
use sawari_catalog::{find_bus, Bus};
use sawari_shared::{query, TripQuery};
use serde::Serialize;
use uuid::Uuid;

/// Everything one booking flow owns: the chosen bus, the trip being booked,
/// the seat grid, the form state. Session-scoped by construction: nothing
/// here outlives the flow or leaks into another one.
#[derive(Debug, Clone, Serialize)]
pub struct BookingSession {
    pub bus: Bus,
    pub trip: TripQuery,
    seat_map: SeatMap,
    pub passenger: PassengerDetails,
    pub selected_offer: Option<Offer>,
    pub accepted_terms: bool,
}

impl BookingSession {
    /// Start a session for a bus already in hand. The seat grid is generated
    /// here, once, and never regenerated for the life of the session.
    pub fn new(bus: Bus, trip: TripQuery, plan: &SeatPlan, rng: &mut impl Rng) -> Self {
        let seat_map = SeatMap::generate(plan, rng);
        tracing::debug!(
            bus = %bus.id,
            seats = seat_map.seats().len(),
            open = seat_map.available_count(),
            "booking session started"
        );

        Self {
            bus,
            trip,
            seat_map,
            passenger: PassengerDetails::default(),
            selected_offer: None,
            accepted_terms: false,
        }
    }

    /// Start a session from a `busId` navigation parameter.
    pub fn for_bus(
        fleet: &[Bus],
        bus_id: &str,
        trip: TripQuery,
        plan: &SeatPlan,
        rng: &mut impl Rng,
    ) -> Result<Self, BookingError> {
        let bus = find_bus(fleet, bus_id)
            .cloned()
            .ok_or_else(|| BookingError::BusNotFound(bus_id.to_string()))?;
        Ok(Self::new(bus, trip, plan, rng))
    }

    pub fn seat_map(&self) -> &SeatMap {
        &self.seat_map
    }

    /// Selecting an unavailable seat is silently ignored; selecting another
    /// available seat replaces the previous choice.
    pub fn select_seat(&mut self, seat_id: &str) {
        self.seat_map.select(seat_id);
    }

    pub fn selected_seat(&self) -> Option<&str> {
        self.seat_map.selected_seat()
    }

    /// Clicking an offer card selects it; clicking the active card again
    /// deselects it. At most one offer applies.
    pub fn toggle_offer(&mut self, offer: Offer) {
        if self.selected_offer == Some(offer) {
            self.selected_offer = None;
        } else {
            self.selected_offer = Some(offer);
        }
    }

    pub fn set_passenger(&mut self, passenger: PassengerDetails) {
        self.passenger = passenger;
    }

    pub fn accept_terms(&mut self, accepted: bool) {
        self.accepted_terms = accepted;
    }

    pub fn total_fare(&self) -> u32 {
        offers::total_fare(self.bus.price, self.selected_offer)
    }

    /// Submit the booking. Requires a selected seat, a name, a phone number
    /// and accepted terms; everything else is optional. There is no payment
    /// round-trip; a confirmation is fabricated locally.
    pub fn confirm(&self) -> Result<BookingConfirmation, BookingError> {
        let seat = match self.seat_map.selected_seat() {
            Some(seat) if self.passenger.is_complete() && self.accepted_terms => seat,
            _ => return Err(BookingError::IncompleteDetails),
        };

        let confirmation = BookingConfirmation {
            id: Uuid::new_v4(),
            bus_id: self.bus.id.clone(),
            seat: seat.to_string(),
            trip: self.trip.clone(),
            total_fare: self.total_fare(),
            created_at: Utc::now(),
        };

        tracing::info!(
            confirmation = %confirmation.id,
            bus = %confirmation.bus_id,
            seat = %confirmation.seat,
            total = confirmation.total_fare,
            "booking confirmed"
        );

        Ok(confirmation)
    }
}

/// The record handed to the success view. Fabricated locally: nothing is
/// persisted and no server is involved.
#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub id: Uuid,
    pub bus_id: String,
    pub seat: String,
    pub trip: TripQuery,
    pub total_fare: u32,
    pub created_at: DateTime<Utc>,
}

impl BookingConfirmation {
    /// Navigation parameters for the success view.
    pub fn success_query(&self) -> String {
        query::build(&[
            ("busId", &self.bus_id),
            ("seat", &self.seat),
            ("from", &self.trip.from),
            ("to", &self.trip.to),
            ("date", &self.trip.date),
        ])
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("unknown bus: {0}")]
    BusNotFound(String),

    #[error("Please fill all required details and accept terms & conditions")]
    IncompleteDetails,
}
