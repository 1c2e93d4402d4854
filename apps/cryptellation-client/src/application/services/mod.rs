//! Application Services
//!
//! Logic owned by the client itself rather than by the upstream services.

mod info_aggregator;
mod price_router;

pub use info_aggregator::InfoAggregator;
pub use price_router::{PriceRoute, route};
