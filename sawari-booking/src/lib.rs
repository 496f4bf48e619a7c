pub mod offers;
pub mod passenger;
pub mod seat_map;
pub mod session;

pub use offers::{default_promotions, total_fare, Offer, Promotion};
pub use passenger::{Gender, PassengerDetails};
pub use seat_map::{Seat, SeatMap, SeatPlan};
pub use session::{BookingConfirmation, BookingError, BookingSession};
