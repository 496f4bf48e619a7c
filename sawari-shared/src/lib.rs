pub mod pii;
pub mod query;
pub mod trip;

pub use pii::Masked;
pub use trip::TripQuery;
