//! Google Gemini `generateContent` client.

mod client;
mod config;
mod wire;

pub use client::GeminiClient;
pub use config::{
    API_KEY_ENV, ApiKey, DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig, GeminiConfigBuilder,
};
