//! HTTP server command.

use super::gemini_client;
use std::sync::Arc;
use tides_interface::CompletionDriver;
use tides_narrative::{SessionController, TidesConfig};
use tracing::{info, warn};

/// Serve the game API until interrupted.
pub async fn serve(
    config: TidesConfig,
    bind: Option<String>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = match bind {
        Some(bind) => config.with_bind(bind),
        None => config,
    };

    let client = gemini_client(&config)?;
    if let Err(e) = client.check_ready() {
        // Keep serving; every turn reports the missing credential.
        warn!("{}", e.public_message());
    }
    info!(
        model = client.model_name(),
        policy = %config.contract_policy(),
        timeout_secs = config.request_timeout().as_secs(),
        "Starting server"
    );

    let controller = Arc::new(SessionController::from_config(client, &config));
    tides_server::serve(controller, config.server().bind()).await?;
    Ok(())
}
