//! HTTP endpoint and logging setup for Tides.
//!
//! `POST /api/play` takes `{ history, playerInput, sessionId? }` and answers
//! `{ reply, history, frame? }`, or `{ error, class }` with a status derived
//! from the failure class. `GET /health` answers `{"status": "ok"}`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod error;
mod observability;

pub use api::{ApiState, create_router};
pub use error::{ApiError, ErrorBody, status_for};
pub use observability::{ObservabilityConfig, init_observability};

use std::sync::Arc;
use tides_interface::CompletionDriver;
use tides_narrative::SessionController;
use tracing::info;

/// Bind `addr` and serve the game API until the process is stopped.
pub async fn serve<D>(controller: Arc<SessionController<D>>, addr: &str) -> std::io::Result<()>
where
    D: CompletionDriver + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Serving Tides API");
    axum::serve(listener, create_router(ApiState::new(controller))).await
}
