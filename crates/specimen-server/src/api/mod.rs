//! API endpoints module

pub mod info;
pub mod metrics;
pub mod routing;

pub use info::{health_handler, root_handler};
pub use metrics::metrics_handler;
pub use routing::{route_handler, RouteRequest};
