//! HTTP API for playing turns.

use crate::ApiError;
use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use tides_core::{SessionOutcome, SessionRequest};
use tides_interface::CompletionDriver;
use tides_narrative::SessionController;
use tracing::instrument;

/// API state containing the session controller.
pub struct ApiState<D> {
    controller: Arc<SessionController<D>>,
}

impl<D> ApiState<D> {
    /// Creates new API state.
    pub fn new(controller: Arc<SessionController<D>>) -> Self {
        Self { controller }
    }
}

// Manual impl so `D` itself need not be `Clone`.
impl<D> Clone for ApiState<D> {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
        }
    }
}

/// Creates the game API router.
pub fn create_router<D>(state: ApiState<D>) -> Router
where
    D: CompletionDriver + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/play", post(play::<D>))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Advance one turn.
#[instrument(skip_all)]
async fn play<D>(
    State(state): State<ApiState<D>>,
    body: Result<Json<SessionRequest>, JsonRejection>,
) -> Result<Json<SessionOutcome>, ApiError>
where
    D: CompletionDriver + 'static,
{
    let Json(request) = body?;
    let outcome = state.controller.take_turn(&request).await?;
    Ok(Json(outcome))
}
