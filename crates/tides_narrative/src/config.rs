//! Layered TOML configuration.
//!
//! Sources, later ones overriding earlier ones:
//! - Bundled defaults (include_str! from tides.toml)
//! - ~/.config/tides/tides.toml
//! - ./tides.toml
//! - `TIDES_<SECTION>__<KEY>` environment variables
//!
//! The Gemini credential is deliberately absent from every file source; it is
//! supplied separately when building the client configuration.

use crate::ContractPolicy;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tides_core::GenerationConfig;
use tides_error::ConfigError;
use tides_models::{ApiKey, GeminiConfig};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../tides.toml");

/// `[gemini]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GeminiSettings {
    /// API root
    base_url: String,
    /// Model identifier
    model: String,
    /// Upper bound on one completion round trip, in seconds
    request_timeout_secs: u64,
}

/// `[generation]` section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationSettings {
    /// Creativity factor
    temperature: f64,
    /// Nucleus-sampling threshold
    top_p: f64,
    /// Maximum generated tokens
    max_output_tokens: u32,
}

/// `[session]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SessionSettings {
    /// Enforce the story-frame contract on every reply
    strict_contract: bool,
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ServerSettings {
    /// Socket address the HTTP endpoint binds to
    bind: String,
}

/// Top-level Tides configuration.
///
/// # Example
///
/// ```no_run
/// use tides_narrative::TidesConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = TidesConfig::load()?;
/// println!("Narrating with {}", config.gemini().model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TidesConfig {
    /// Completion service settings
    gemini: GeminiSettings,
    /// Sampling parameters
    generation: GenerationSettings,
    /// Session behavior
    session: SessionSettings,
    /// HTTP endpoint settings
    server: ServerSettings,
}

impl TidesConfig {
    /// Load configuration with precedence: env > current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped when absent.
    #[instrument]
    pub fn load() -> Result<Self, ConfigError> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/tides/tides.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("tides").required(false))
            .add_source(Environment::with_prefix("TIDES").separator("__"));

        Self::finish(builder)
    }

    /// Load the bundled defaults overlaid with one specific file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        debug!("Loading configuration from file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Bundled defaults overlaid with an in-memory TOML document.
    pub fn from_toml(overrides: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(overrides, FileFormat::Toml));
        Self::finish(builder)
    }

    /// The bundled defaults alone.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_toml("")
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))
    }

    /// Gemini client settings carrying the given credential.
    pub fn gemini_config(&self, api_key: Option<ApiKey>) -> Result<GeminiConfig, ConfigError> {
        GeminiConfig::builder()
            .base_url(self.gemini.base_url.clone())
            .model(self.gemini.model.clone())
            .api_key(api_key)
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid Gemini configuration: {}", e)))
    }

    /// Sampling parameters for the prompt assembler.
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.generation.temperature,
            top_p: self.generation.top_p,
            max_output_tokens: self.generation.max_output_tokens,
        }
    }

    /// Bound on one completion round trip.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.gemini.request_timeout_secs)
    }

    /// Contract enforcement policy.
    pub fn contract_policy(&self) -> ContractPolicy {
        if self.session.strict_contract {
            ContractPolicy::Strict
        } else {
            ContractPolicy::Lenient
        }
    }

    /// Same configuration with a different bind address.
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.server.bind = bind.into();
        self
    }

    /// Same configuration with contract enforcement switched off.
    pub fn lenient(mut self) -> Self {
        self.session.strict_contract = false;
        self
    }
}
