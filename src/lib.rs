/*!
 * Specimen Router - laboratory specimen routing optimizer
 *
 * Command line front end and ambient plumbing around the workspace crates:
 * - `specimen-core-routing`: station assignment, turnaround estimate, STAT triage
 * - `specimen-server`: HTTP/WebSocket transport
 * - `specimen-observability`: Prometheus metrics
 *
 * This crate owns configuration loading, logging setup and process exit codes.
 */

pub mod cli_style;
pub mod config;
pub mod error;
pub mod logging;

pub use config::{LogFormat, LogLevel, LoggingSettings, RouterConfig, ServerSettings};
pub use error::{Result, RouterError};
pub use specimen_core_routing::{optimize_route, Priority, RoutingPlan, SpecimenRouter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
