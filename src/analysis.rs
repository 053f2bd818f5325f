pub mod durations;
pub mod filter;
pub mod prices;

pub use durations::min_flight_minutes;
pub use filter::filter_route;
pub use prices::{PriceSummary, price_summary};
