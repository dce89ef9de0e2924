use crate::state::{AppState, ServiceInfo};
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// Static service metadata
pub async fn root_handler(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(state.info)
}

/// Liveness probe
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
