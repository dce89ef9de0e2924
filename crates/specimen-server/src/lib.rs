//! Specimen Server - HTTP/WebSocket front end for the routing engine
//!
//! Built with Axum. Every surface is a thin adapter: the route endpoint
//! forwards [`specimen_core_routing::RoutingPlan`] unchanged, the probes
//! return fixed payloads, and the WebSocket channel only echoes.

pub mod api;
pub mod error;
pub mod server;
pub mod state;
pub mod ws;

pub use error::{ServerError, ServerResult};
pub use server::{build_router, run_server, serve, shutdown_signal, UNMATCHED_ROUTE};
pub use state::{AppState, ServiceInfo};

/// Name reported by the info probe and lifecycle logs
pub const SERVICE_NAME: &str = "specimen-routing-optimizer";

/// Service version reported by the info probe
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` string suitable for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Start the server and run until Ctrl+C or SIGTERM
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    run_server(config, shutdown_signal()).await
}
