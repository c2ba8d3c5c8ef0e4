//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the tides binary.

mod commands;
mod play;
mod serve;

pub use commands::{Cli, Commands};
pub use play::play;
pub use serve::serve;

use tides_error::ConfigError;
use tides_models::{API_KEY_ENV, ApiKey, GeminiClient};
use tides_narrative::TidesConfig;

/// Load configuration from `path`, or from the default locations.
pub fn load_config(path: Option<&std::path::Path>) -> Result<TidesConfig, ConfigError> {
    match path {
        Some(path) => TidesConfig::from_file(path),
        None => TidesConfig::load(),
    }
}

/// Build the Gemini client, reading the credential from the environment once.
fn gemini_client(config: &TidesConfig) -> Result<GeminiClient, ConfigError> {
    let api_key = std::env::var(API_KEY_ENV).ok().and_then(ApiKey::new);
    GeminiClient::new(config.gemini_config(api_key)?)
}
