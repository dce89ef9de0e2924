//! Prometheus metrics for routing and transport
//!
//! Metric families:
//! - `specimen_routes_total{priority}`: plans computed
//! - `specimen_route_steps_total{station}`: steps emitted
//! - `specimen_route_turnaround_minutes`: plan total time
//! - `specimen_http_requests_total{route,status}`: HTTP requests served
//! - `specimen_ws_messages_total`: echo frames handled
//! - `process_*`: process collector (Linux only)

use prometheus::{Counter, CounterVec, Histogram, HistogramOpts, Opts, Registry};
use specimen_core_routing::RoutingPlan;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObservabilityError {
    #[error("Failed to encode metrics: {0}")]
    Encode(#[from] prometheus::Error),

    #[error("Metrics output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Global Prometheus registry
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Routing plans computed, by priority (STAT, ROUTINE)
pub static ROUTES_TOTAL: OnceLock<CounterVec> = OnceLock::new();

/// Routing steps emitted, by station
pub static ROUTE_STEPS_TOTAL: OnceLock<CounterVec> = OnceLock::new();

/// Plan turnaround estimate in minutes
///
/// Buckets: 15m, 30m, 1h, 2h, 4h, 8h, 24h, 48h
pub static ROUTE_TURNAROUND_MINUTES: OnceLock<Histogram> = OnceLock::new();

/// HTTP requests served
///
/// Labels: route (matched path template), status (numeric code)
pub static HTTP_REQUESTS_TOTAL: OnceLock<CounterVec> = OnceLock::new();

/// WebSocket frames echoed
pub static WS_MESSAGES_TOTAL: OnceLock<Counter> = OnceLock::new();

/// Get or initialize the global registry
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| {
        let r = Registry::new();
        register_metrics(&r);
        r
    })
}

fn register_metrics(registry: &Registry) {
    let routes = CounterVec::new(
        Opts::new("specimen_routes_total", "Total routing plans computed"),
        &["priority"],
    )
    .expect("Failed to create routes_total metric");
    registry
        .register(Box::new(routes.clone()))
        .expect("Failed to register routes_total");
    ROUTES_TOTAL.set(routes).ok();

    let steps = CounterVec::new(
        Opts::new(
            "specimen_route_steps_total",
            "Total routing steps emitted per station",
        ),
        &["station"],
    )
    .expect("Failed to create route_steps_total metric");
    registry
        .register(Box::new(steps.clone()))
        .expect("Failed to register route_steps_total");
    ROUTE_STEPS_TOTAL.set(steps).ok();

    let turnaround = Histogram::with_opts(
        HistogramOpts::new(
            "specimen_route_turnaround_minutes",
            "Estimated specimen turnaround time in minutes",
        )
        .buckets(vec![
            15.0, 30.0, 60.0, 120.0, 240.0, 480.0, 1440.0, 2880.0,
        ]),
    )
    .expect("Failed to create route_turnaround metric");
    registry
        .register(Box::new(turnaround.clone()))
        .expect("Failed to register route_turnaround");
    ROUTE_TURNAROUND_MINUTES.set(turnaround).ok();

    let http = CounterVec::new(
        Opts::new("specimen_http_requests_total", "Total HTTP requests served"),
        &["route", "status"],
    )
    .expect("Failed to create http_requests metric");
    registry
        .register(Box::new(http.clone()))
        .expect("Failed to register http_requests");
    HTTP_REQUESTS_TOTAL.set(http).ok();

    let ws = Counter::with_opts(Opts::new(
        "specimen_ws_messages_total",
        "Total WebSocket frames echoed",
    ))
    .expect("Failed to create ws_messages metric");
    registry
        .register(Box::new(ws.clone()))
        .expect("Failed to register ws_messages");
    WS_MESSAGES_TOTAL.set(ws).ok();

    register_process_collector(registry);
}

#[cfg(target_os = "linux")]
fn register_process_collector(registry: &Registry) {
    use prometheus::process_collector::ProcessCollector;

    if let Err(e) = registry.register(Box::new(ProcessCollector::for_self())) {
        tracing::warn!("Process metrics unavailable: {}", e);
    }
}

#[cfg(not(target_os = "linux"))]
fn register_process_collector(_registry: &Registry) {}

/// Record a computed plan
pub fn record_plan(plan: &RoutingPlan) {
    registry();

    if let Some(counter) = ROUTES_TOTAL.get() {
        counter.with_label_values(&[plan.priority.as_str()]).inc();
    }

    if let Some(counter) = ROUTE_STEPS_TOTAL.get() {
        for station in plan.stations() {
            counter.with_label_values(&[station.as_str()]).inc();
        }
    }

    if let Some(histogram) = ROUTE_TURNAROUND_MINUTES.get() {
        histogram.observe(plan.total_time as f64);
    }
}

/// Increment the HTTP request counter
pub fn inc_http_request(route: &str, status: u16) {
    registry();

    if let Some(counter) = HTTP_REQUESTS_TOTAL.get() {
        let status = status.to_string();
        counter.with_label_values(&[route, status.as_str()]).inc();
    }
}

/// Increment the WebSocket echo counter
pub fn inc_ws_message() {
    registry();

    if let Some(counter) = WS_MESSAGES_TOTAL.get() {
        counter.inc();
    }
}

/// Get metrics in Prometheus text format
pub fn metrics_text() -> Result<String, ObservabilityError> {
    use prometheus::{Encoder, TextEncoder};

    let encoder = TextEncoder::new();
    let metric_families = registry().gather();
    let mut buffer = Vec::new();

    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use specimen_core_routing::optimize_route;

    #[test]
    fn test_registry_initialization() {
        let reg = registry();
        let metrics = reg.gather();
        assert!(!metrics.is_empty());
    }

    #[test]
    fn test_record_plan() {
        let plan = optimize_route("SPEC-M1", &["CBC", "Troponin"]);
        record_plan(&plan);

        let output = metrics_text().unwrap();
        assert!(output.contains("specimen_routes_total"));
        assert!(output.contains("priority=\"STAT\""));
        assert!(output.contains("station=\"Hematology\""));
        assert!(output.contains("specimen_route_turnaround_minutes_bucket"));
    }

    #[test]
    fn test_record_empty_plan() {
        let plan = optimize_route::<&str>("SPEC-M2", &[]);
        record_plan(&plan);

        let counter = ROUTES_TOTAL.get().unwrap();
        assert!(counter.with_label_values(&["ROUTINE"]).get() >= 1.0);
    }

    #[test]
    fn test_inc_http_request() {
        inc_http_request("/health", 200);
        inc_http_request("/health", 200);

        let counter = HTTP_REQUESTS_TOTAL.get().unwrap();
        assert!(counter.with_label_values(&["/health", "200"]).get() >= 2.0);
        assert!(metrics_text()
            .unwrap()
            .contains("specimen_http_requests_total"));
    }

    #[test]
    fn test_inc_ws_message() {
        inc_ws_message();

        let output = metrics_text().unwrap();
        assert!(output.contains("specimen_ws_messages_total"));
    }

    #[test]
    fn test_metrics_text_format() {
        inc_ws_message();

        let output = metrics_text().unwrap();
        assert!(output.starts_with("# HELP") || output.contains("specimen_"));
    }
}
