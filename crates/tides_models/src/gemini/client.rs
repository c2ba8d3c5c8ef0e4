use super::{ApiKey, GeminiConfig, wire::GenerateContentResponse};
use tides_core::GenerateContentRequest;
use tides_error::{CompletionError, CompletionErrorKind, ConfigError, TidesResult};
use tides_interface::CompletionDriver;
use tracing::instrument;

const API_KEY_HEADER: &str = "x-goog-api-key";
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Client for the Gemini `generateContent` endpoint.
///
/// Each call is exactly one outbound POST. There are no retries; failures
/// surface to the caller.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a new Gemini client.
    #[instrument(skip(config), fields(base_url = %config.base_url(), model = %config.model()))]
    pub fn new(config: GeminiConfig) -> Result<Self, ConfigError> {
        tracing::debug!("Creating Gemini client");
        let client = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                ConfigError::new(format!("Failed to build HTTP client: {}", e))
            })?;
        Ok(Self { config, client })
    }

    /// Get the client configuration
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url().trim_end_matches('/'),
            self.config.model()
        )
    }

    fn credential(&self) -> Result<&ApiKey, ConfigError> {
        self.config.api_key().as_ref().ok_or_else(|| {
            tracing::warn!("Gemini API key is not configured");
            ConfigError::missing_credential()
        })
    }

    fn transport_error(e: reqwest::Error) -> CompletionError {
        let e = e.without_url();
        if e.is_timeout() {
            tracing::error!("Gemini request timed out: {}", e);
            CompletionError::new(CompletionErrorKind::Timeout {
                seconds: CONNECT_TIMEOUT_SECS,
            })
        } else {
            tracing::error!("Gemini request failed: {}", e);
            CompletionError::new(CompletionErrorKind::Network(e.to_string()))
        }
    }
}

#[async_trait::async_trait]
impl CompletionDriver for GeminiClient {
    #[instrument(skip(self, payload), fields(model = %self.config.model(), turns = payload.contents.len()))]
    async fn complete(&self, payload: &GenerateContentRequest) -> TidesResult<String> {
        let key = self.credential()?;
        let url = self.endpoint();
        tracing::debug!("Sending generateContent request to {}", url);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, key.expose())
            .json(payload)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body still reports the status.
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "Gemini returned error: {}", body);
            return Err(CompletionError::new(CompletionErrorKind::Http {
                status_code: status.as_u16(),
                body,
            })
            .into());
        }

        let body = response.text().await.map_err(Self::transport_error)?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CompletionError::new(CompletionErrorKind::MalformedResponse(e.to_string()))
        })?;

        let reply = parsed.first_text().ok_or_else(|| {
            tracing::warn!("Gemini response carried no reply text");
            CompletionError::new(CompletionErrorKind::EmptyReply)
        })?;

        tracing::debug!(chars = reply.len(), "Gemini completion successful");
        Ok(reply.to_string())
    }

    fn check_ready(&self) -> TidesResult<()> {
        self.credential()?;
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
