//! Axum server setup

use crate::{
    api,
    error::{ServerError, ServerResult},
    state::AppState,
    ws, ServerConfig, SERVICE_NAME,
};
use axum::{
    extract::{MatchedPath, Request},
    http::{Method, Uri},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Probes
        .route("/", get(api::root_handler).fallback(method_not_allowed_handler))
        .route(
            "/health",
            get(api::health_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/metrics",
            get(api::metrics_handler).fallback(method_not_allowed_handler),
        )
        // Routing engine
        .route(
            "/api/route",
            post(api::route_handler).fallback(method_not_allowed_handler),
        )
        // Echo channel
        .route("/ws", get(ws::ws_handler).fallback(method_not_allowed_handler))
        .fallback(not_found_handler)
        .layer(middleware::from_fn(track_requests))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Route label for requests that matched no route
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Count requests per matched route and status
///
/// Unmatched paths share one label so the series count stays bounded.
async fn track_requests(req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_owned());

    let response = next.run(req).await;
    specimen_observability::inc_http_request(&route, response.status().as_u16());
    response
}

async fn not_found_handler(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}

async fn method_not_allowed_handler(method: Method, uri: Uri) -> ServerError {
    ServerError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// Bind to the configured address and serve until `shutdown` resolves
pub async fn run_server<F>(config: ServerConfig, shutdown: F) -> ServerResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!("Starting {} service...", SERVICE_NAME);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    serve(listener, build_router(AppState::new()), shutdown).await
}

/// Serve `app` on an already bound listener
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> ServerResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local = listener.local_addr().map_err(ServerError::Serve)?;
    tracing::info!("Listening on http://{}", local);
    tracing::info!("   Route: POST http://{}/api/route", local);
    tracing::info!("   Health: http://{}/health", local);
    tracing::info!("   Metrics: http://{}/metrics", local);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Shutting down {} service...", SERVICE_NAME);
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
