//! Specimen Router Observability
//!
//! Prometheus metrics for the routing engine and the transport around it.
//! The registry is process-global and created on first use; recording
//! functions are safe to call before or after that and never fail.
//!
//! ```
//! use specimen_core_routing::optimize_route;
//! use specimen_observability::{metrics_text, record_plan};
//!
//! let plan = optimize_route("SPEC-1", &["CBC", "Culture"]);
//! record_plan(&plan);
//!
//! let text = metrics_text().unwrap();
//! assert!(text.contains("specimen_routes_total"));
//! ```

pub mod metrics;

pub use metrics::{
    inc_http_request, inc_ws_message, metrics_text, record_plan, registry, ObservabilityError,
};
