//! Completion service integrations for Tides.
//!
//! Currently one provider: Google Gemini's `generateContent` REST endpoint.
//!
//! # Example
//!
//! ```no_run
//! use tides_core::{History, PromptAssembler};
//! use tides_interface::CompletionDriver;
//! use tides_models::{GeminiClient, GeminiConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new(GeminiConfig::from_env()?)?;
//! let payload = PromptAssembler::new().assemble(&History::new(), "look around");
//! let reply = client.complete(&payload).await?;
//! println!("{}", reply);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    API_KEY_ENV, ApiKey, DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, GeminiConfig,
    GeminiConfigBuilder,
};
