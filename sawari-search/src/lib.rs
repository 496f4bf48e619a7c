pub mod engine;
pub mod filters;
pub mod sort;

pub use engine::search;
pub use filters::{FilterSpec, PRICE_CEILING, PRICE_FLOOR};
pub use sort::{parse_duration_minutes, SortKey};
