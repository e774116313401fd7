//! Router assembly for the HTTP surface.

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use crate::advice::{AdviceRouteState, AdviceService, advice_routes};

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "segment-advisor"
    }))
}

/// Build the full application router around an advice service.
pub fn app(service: Arc<AdviceService>) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(advice_routes(AdviceRouteState { service }))
        .layer(CorsLayer::permissive())
}
