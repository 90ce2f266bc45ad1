//! HTTP gateway (Axum) over search, filter options and publishing.
//!
//! Used by the `fibersheet` server binary.

#![allow(missing_docs)]

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{datasheets_handler, options_handler, search_handler};
pub use state::HandlerState;

use crate::lookup::ParameterSource;
use crate::search::SearchBackend;

/// Response header carrying the outcome label of a request.
pub const FIBERSHEET_STATUS_HEADER: &str = "x-fibersheet-status";

pub const FIBERSHEET_STATUS_HEALTHY: &str = "HEALTHY";

/// Service name reported by the health route.
pub const SERVICE_NAME: &str = "fibersheet";

pub fn create_router_with_state<B, P>(state: HandlerState<B, P>) -> Router
where
    B: SearchBackend + 'static,
    P: ParameterSource + 'static,
{
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/search", post(search_handler::<B, P>))
        .route("/api/options", get(options_handler::<B, P>))
        .route("/api/datasheets", post(datasheets_handler::<B, P>))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        FIBERSHEET_STATUS_HEADER,
        HeaderValue::from_static(FIBERSHEET_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse {
            status: "healthy",
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
        .into_response()
}
