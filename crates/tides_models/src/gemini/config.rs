//! Connection settings for the Gemini client.

use tides_error::ConfigError;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Gemini REST API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Secret API credential. Never printed.
///
/// # Examples
///
/// ```
/// use tides_models::ApiKey;
///
/// assert!(ApiKey::new("   ").is_none());
///
/// let key = ApiKey::new("AIza-secret").unwrap();
/// assert_eq!(key.expose(), "AIza-secret");
/// assert!(!format!("{:?}", key).contains("secret"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a credential; blank values are treated as absent.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// The raw credential, for placing on the outbound request only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Configuration for [`GeminiClient`](crate::GeminiClient).
///
/// The credential is captured once, when the configuration is built. A
/// configuration without a credential is valid; the client reports the
/// missing key as a configuration error on every call instead.
///
/// # Examples
///
/// ```
/// use tides_models::{ApiKey, GeminiConfigBuilder};
///
/// let config = GeminiConfigBuilder::default()
///     .model("gemini-2.5-flash")
///     .api_key(ApiKey::new("test-key"))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.model(), "gemini-2.5-flash");
/// assert!(config.api_key().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// API root, without a trailing slash
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// API credential
    #[builder(default)]
    api_key: Option<ApiKey>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }
}

impl GeminiConfig {
    /// Default endpoint and model with the credential read from `GEMINI_API_KEY`.
    ///
    /// An unset variable yields a configuration without a credential rather
    /// than an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::builder()
            .api_key(std::env::var(API_KEY_ENV).ok().and_then(ApiKey::new))
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid Gemini configuration: {}", e)))
    }

    /// Creates a new configuration builder.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// Same settings with a different credential.
    pub fn with_api_key(mut self, api_key: Option<ApiKey>) -> Self {
        self.api_key = api_key;
        self
    }
}
