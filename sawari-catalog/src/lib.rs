pub mod bus;
pub mod fleet;
pub mod timetable;

pub use bus::{Bus, BusType, CatalogError};
pub use fleet::{find_bus, mock_fleet};
pub use timetable::{parse_departure, TimeBucket};
