use rand::Rng;
use serde::{Deserialize, Serialize};

/// Coach layout parameters, carried in app config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatPlan {
    pub total_seats: u32,
    pub seats_per_row: u32,
    /// Probability that any given seat is still open.
    pub availability: f64,
}

impl Default for SeatPlan {
    fn default() -> Self {
        // 40 seats in a 2+2 layout, roughly 70% open.
        Self {
            total_seats: 40,
            seats_per_row: 4,
            availability: 0.7,
        }
    }
}

/// One seat in the coach grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    pub number: u32,
    pub row: u32,
    /// Column letter across the row: A, B, C, D for a 2+2 layout.
    pub position: char,
    pub is_available: bool,
}

/// The seat grid for one booking session, plus the single selected seat.
/// Generated once when the session starts and held stable afterwards; only
/// the selection changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatMap {
    seats: Vec<Seat>,
    selected: Option<String>,
}

impl SeatMap {
    /// Build the grid. Each seat draws its availability independently, so a
    /// seeded rng reproduces the same coach in tests.
    pub fn generate(plan: &SeatPlan, rng: &mut impl Rng) -> Self {
        let per_row = plan.seats_per_row.max(1);
        let availability = plan.availability.clamp(0.0, 1.0);

        let seats = (0..plan.total_seats)
            .map(|index| {
                let column = index % per_row;
                Seat {
                    id: format!("S{}", index + 1),
                    number: index + 1,
                    row: index / per_row + 1,
                    position: (b'A' + (column % 26) as u8) as char,
                    is_available: rng.gen_bool(availability),
                }
            })
            .collect();

        Self {
            seats,
            selected: None,
        }
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, id: &str) -> Option<&Seat> {
        self.seats.iter().find(|seat| seat.id == id)
    }

    pub fn available_count(&self) -> usize {
        self.seats.iter().filter(|seat| seat.is_available).count()
    }

    /// Select a seat. A no-op unless the seat exists and is available; when
    /// it is, it becomes the sole selection, replacing any previous one.
    /// Unavailable or unknown seats are silently ignored.
    pub fn select(&mut self, id: &str) {
        if self.seat(id).map(|seat| seat.is_available) == Some(true) {
            self.selected = Some(id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_seat(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}
