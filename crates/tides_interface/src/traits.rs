//! Trait definitions for completion backends.

use async_trait::async_trait;
use tides_core::GenerateContentRequest;
use tides_error::TidesResult;

/// One request/response cycle against a text-completion service.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Send the payload and return the reply text.
    ///
    /// Performs exactly one outbound call. Implementations must not retry.
    async fn complete(&self, payload: &GenerateContentRequest) -> TidesResult<String>;

    /// Fail with a configuration error when the driver cannot make calls.
    ///
    /// Checked before any other work so a missing credential is reported
    /// regardless of the request contents.
    fn check_ready(&self) -> TidesResult<()> {
        Ok(())
    }

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.0-flash").
    fn model_name(&self) -> &str;
}
