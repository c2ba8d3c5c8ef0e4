//! Core data types for the Tides narrative session engine.
//!
//! This crate owns everything about a session that is pure data:
//! the turn history, the request payload sent to the completion service,
//! and the structured story frame parsed out of a narrator reply.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod contract;
mod history;
mod lore;
mod payload;
mod prompt;
mod request;
mod role;
mod story;
mod turn;

pub use contract::{Section, parse_story_frame};
pub use history::History;
pub use lore::{NARRATOR_INSTRUCTIONS, TIDES_GAME_DESCRIPTION};
pub use payload::{
    Content, DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_TEMPERATURE, DEFAULT_TOP_P, GenerateContentRequest,
    GenerationConfig, Part, SystemInstruction,
};
pub use prompt::PromptAssembler;
pub use request::{SessionOutcome, SessionRequest};
pub use role::Role;
pub use story::{Inventory, Stats, StoryFrame};
pub use turn::Turn;
