//! Application state shared across handlers

use serde::Serialize;
use specimen_core_routing::SpecimenRouter;

/// Static service metadata returned by the info probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: crate::SERVICE_NAME,
            status: "operational",
            version: crate::SERVICE_VERSION,
        }
    }
}

/// State handed to every handler
///
/// Cheap to clone; the router holds no data of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    pub router: SpecimenRouter,
    pub info: ServiceInfo,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
