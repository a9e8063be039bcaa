//! Axum-based HTTP server exposing the battery bridge
//!
//! The method channel of the original bridge is carried over as a single
//! JSON endpoint; a few conventional REST routes sit alongside it.

use crate::battery::interpret;
use crate::bridge;
use crate::config::Config;
use crate::error::LeydenError;
use crate::telemetry::TelemetrySource;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn TelemetrySource>,
    pub config: Config,
}

#[derive(Deserialize)]
pub struct ChannelBody {
    pub method: String,
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// The method channel: a named request in, a mapping out
async fn channel(State(state): State<AppState>, Json(body): Json<ChannelBody>) -> Response {
    match bridge::dispatch(state.source.as_ref(), &body.method).await {
        Ok(status) => (StatusCode::OK, Json(status)).into_response(),
        Err(err) => error_response(err),
    }
}

/// Convenience route, equivalent to calling getBatteryStatus on the channel
async fn battery(State(state): State<AppState>) -> Response {
    match bridge::dispatch(state.source.as_ref(), bridge::GET_BATTERY_STATUS).await {
        Ok(status) => (StatusCode::OK, Json(status)).into_response(),
        Err(err) => error_response(err),
    }
}

/// Service status: identity, raw snapshot, and derived record
async fn status(State(state): State<AppState>) -> Response {
    match state.source.sample().await {
        Ok(raw) => {
            let root = serde_json::json!({
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "version": env!("APP_VERSION"),
                "channel": bridge::CHANNEL_NAME,
                "telemetry_source": state.source.kind(),
                "raw": raw,
                "battery": interpret(&raw),
            });
            (StatusCode::OK, Json(root)).into_response()
        }
        Err(err) => error_response(err),
    }
}

async fn get_config(State(state): State<AppState>) -> impl IntoResponse {
    let json = serde_json::to_value(state.config.clone())
        .unwrap_or(serde_json::json!({"error":"serialization"}));
    Json(json)
}

fn error_response(err: LeydenError) -> Response {
    match err {
        LeydenError::NotImplemented { method } => (
            StatusCode::NOT_IMPLEMENTED,
            Json(serde_json::json!({"error": "not implemented", "method": method})),
        )
            .into_response(),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": other.to_string()})),
        )
            .into_response(),
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/channel", post(channel))
        .route("/api/battery", get(battery))
        .route("/api/status", get(status))
        .route("/api/config", get(get_config))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(
    source: Arc<dyn TelemetrySource>,
    config: Config,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    let state = AppState { source, config };
    let router = build_router(state);

    let logger = crate::logging::get_logger("web");
    {
        let msg = format!(
            "Starting web server; requested host={}, port={}",
            host, port
        );
        logger.info(&msg);
    }

    let (addr, parsed_ok): (SocketAddr, bool) = match host.parse::<IpAddr>() {
        Ok(ip) => (SocketAddr::new(ip, port), true),
        Err(_) => (([127, 0, 0, 1], port).into(), false),
    };
    if !parsed_ok {
        let warn_msg = format!("Invalid host '{}'; falling back to 127.0.0.1", host);
        logger.warn(&warn_msg);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    {
        let listen_msg = format!(
            "Web server listening at http://{}:{} (channel /api/channel, API /api)",
            local_addr.ip(),
            local_addr.port()
        );
        logger.info(&listen_msg);
    }

    axum::serve(listener, router).await?;
    Ok(())
}
