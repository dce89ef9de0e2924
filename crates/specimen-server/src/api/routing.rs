use crate::{
    error::{ServerError, ServerResult},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use specimen_core_routing::{RoutingPlan, TestCode};

/// Request for a routing plan
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub specimen_id: String,
    #[serde(default)]
    pub required_tests: Vec<TestCode>,
}

/// Compute the routing plan for one specimen
///
/// The engine never fails; only a malformed body is rejected.
pub async fn route_handler(
    State(state): State<AppState>,
    payload: Result<Json<RouteRequest>, JsonRejection>,
) -> ServerResult<Json<RoutingPlan>> {
    let Json(request) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;

    let plan = state
        .router
        .optimize_route(request.specimen_id, request.required_tests.as_slice());

    specimen_observability::record_plan(&plan);
    tracing::info!(
        specimen_id = %plan.specimen_id,
        steps = plan.steps.len(),
        total_time = plan.total_time,
        priority = %plan.priority,
        "Computed routing plan"
    );

    Ok(Json(plan))
}
