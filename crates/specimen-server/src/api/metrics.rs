use crate::error::ServerResult;
use axum::{http::header, response::IntoResponse};

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Prometheus scrape endpoint
pub async fn metrics_handler() -> ServerResult<impl IntoResponse> {
    let body = specimen_observability::metrics_text()?;
    Ok(([(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], body))
}
