//! HTTP API surface: health, latency snapshot, and metrics exposition.

use crate::config::Config;
use crate::store::SnapshotStore;
use crate::types::Snapshot;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Shared state for the request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Snapshot slot written by the collector
    pub store: Arc<SnapshotStore>,
    /// Static probe target configuration
    pub config: Arc<Config>,
}

/// Build the three-endpoint router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/latency", get(latency_handler))
        .route("/metrics", get(metrics_handler))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Liveness check, independent of probe state.
async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}

/// Latest snapshot as JSON, or a warming-up body before the first cycle
/// completes. Always 200; probe failure is reported in the body.
async fn latency_handler(State(state): State<AppState>) -> Response {
    match state.store.read().await {
        Some(snapshot) => Json(snapshot).into_response(),
        None => Json(json!({
            "status": "warming_up",
            "message": format!(
                "App not ready yet. Retry in {}s.",
                state.config.interval_seconds()
            ),
        }))
        .into_response(),
    }
}

/// Latest snapshot in Prometheus exposition format.
async fn metrics_handler(State(state): State<AppState>) -> Response {
    let body = match state.store.read().await {
        Some(snapshot) => render_metrics(&snapshot),
        None => "# App not ready yet\n".to_string(),
    };

    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4")],
        body,
    )
        .into_response()
}

/// Render the exposition body for one snapshot.
///
/// The `tcp_latency_ms` gauge is emitted only for successful probes; a
/// failed probe leaves a comment line in its place, so the series is
/// simply absent for that cycle. `tcp_up` is always emitted.
fn render_metrics(snapshot: &Snapshot) -> String {
    let host = &snapshot.target_host;
    let tcp = &snapshot.tcp;
    let mut out = String::new();

    out.push_str(
        "# HELP tcp_latency_ms TCP handshake latency to the target host (milliseconds)\n",
    );
    out.push_str("# TYPE tcp_latency_ms gauge\n");
    match tcp.latency_ms {
        Some(latency_ms) if tcp.is_ok() => {
            out.push_str(&format!(
                "tcp_latency_ms{{host=\"{}\",port=\"{}\"}} {}\n",
                host, tcp.port, latency_ms
            ));
        }
        _ => {
            out.push_str(&format!(
                "# tcp status={} port={} target={}\n",
                tcp.status, tcp.port, host
            ));
        }
    }

    out.push_str("\n# HELP tcp_up 1 if the TCP port is reachable, 0 otherwise\n");
    out.push_str("# TYPE tcp_up gauge\n");
    out.push_str(&format!(
        "tcp_up{{host=\"{}\",port=\"{}\"}} {}\n",
        host,
        tcp.port,
        if tcp.is_ok() { 1 } else { 0 }
    ));

    out
}
