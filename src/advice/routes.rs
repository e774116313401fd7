//! REST endpoint for AI advice.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::service::AdviceService;
use super::{AdviceResponse, RawAdviceRequest};
use crate::error::AdviceError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Shared state for advice routes.
#[derive(Clone)]
pub struct AdviceRouteState {
    pub service: Arc<AdviceService>,
}

/// POST /api/ai-advice
///
/// Body `{ profile, question? }`. Answers `200 { advice }`, or `{ error }`
/// with 500 when no key is configured and 400 for everything else.
///
/// The body is parsed by hand so a missing or wrong content type is treated
/// like any other unreadable body.
async fn post_advice(State(state): State<AdviceRouteState>, body: Bytes) -> Response {
    let request_id = Uuid::new_v4();

    let result = match serde_json::from_slice::<RawAdviceRequest>(&body) {
        Ok(request) => state.service.handle(request).await,
        Err(e) => Err(AdviceError::MalformedBody(e.to_string())),
    };

    let mut response = match result {
        Ok(advice) => {
            info!(%request_id, "Advice served");
            Json(AdviceResponse { advice }).into_response()
        }
        Err(err @ AdviceError::Configuration) => {
            error!(%request_id, "Advice refused: API key not configured");
            err.into_response()
        }
        Err(err) => {
            warn!(%request_id, error = ?err, "Advice request failed");
            err.into_response()
        }
    };

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// Build the advice REST routes.
pub fn advice_routes(state: AdviceRouteState) -> Router {
    Router::new()
        .route("/api/ai-advice", post(post_advice))
        .with_state(state)
}
