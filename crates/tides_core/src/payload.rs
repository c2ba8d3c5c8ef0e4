//! Request payload for the completion service.
//!
//! Field names follow the service's JSON exactly (`system_instruction`,
//! `generation_config`, `topP`, `maxOutputTokens`).

use crate::Role;
use serde::{Deserialize, Serialize};

/// Sampling temperature sent with every request.
pub const DEFAULT_TEMPERATURE: f64 = 0.9;
/// Nucleus-sampling threshold sent with every request.
pub const DEFAULT_TOP_P: f64 = 0.95;
/// Maximum number of generated tokens per reply.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 512;

/// A single text part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Part {
    /// Text content
    pub text: String,
}

impl Part {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Behavioral instructions, delivered apart from the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SystemInstruction {
    /// Instruction parts
    pub parts: Vec<Part>,
}

/// One conversation entry in the service's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Content {
    /// Author of the entry
    pub role: Role,
    /// Entry parts
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a single-part text entry.
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part::text(text)],
        }
    }
}

/// Fixed generation parameters.
///
/// # Examples
///
/// ```
/// use tides_core::GenerationConfig;
///
/// let json = serde_json::to_value(GenerationConfig::default()).unwrap();
/// assert_eq!(json["maxOutputTokens"], 512);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Creativity factor
    pub temperature: f64,
    /// Nucleus-sampling threshold
    #[serde(rename = "topP")]
    pub top_p: f64,
    /// Maximum generated tokens
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

/// Complete body of one `generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// Narrative-contract instructions
    pub system_instruction: SystemInstruction,
    /// Prior turns followed by the new player input
    pub contents: Vec<Content>,
    /// Sampling parameters
    pub generation_config: GenerationConfig,
}
