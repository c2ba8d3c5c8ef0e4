//! Prompt assembly for the completion service.

use crate::{
    Content, GenerateContentRequest, GenerationConfig, History, NARRATOR_INSTRUCTIONS, Part, Role,
    SystemInstruction,
};
use std::borrow::Cow;

/// Builds completion payloads from a history and a new player input.
///
/// The instruction block and generation parameters are fixed when the
/// assembler is built and stay constant for its lifetime.
///
/// # Examples
///
/// ```
/// use tides_core::{History, PromptAssembler, Role, Turn};
///
/// let assembler = PromptAssembler::new();
/// let history = History::new()
///     .append(Turn::user("start"))
///     .append(Turn::narrator("LOCATION:\nA cove"));
///
/// let payload = assembler.assemble(&history, "look around");
/// assert_eq!(payload.contents.len(), 3);
/// assert_eq!(payload.contents[1].role, Role::Narrator);
/// assert_eq!(payload.contents[2].parts[0].text, "look around");
/// ```
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct PromptAssembler {
    /// Narrative-contract instruction block
    instructions: Cow<'static, str>,
    /// Generation parameters sent with every payload
    generation: GenerationConfig,
}

impl Default for PromptAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptAssembler {
    /// Assembler using the built-in Tides of Remembrance instructions.
    pub fn new() -> Self {
        Self {
            instructions: Cow::Borrowed(NARRATOR_INSTRUCTIONS),
            generation: GenerationConfig::default(),
        }
    }

    /// Replace the instruction block.
    pub fn with_instructions(mut self, instructions: impl Into<Cow<'static, str>>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Replace the generation parameters.
    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    /// Build the payload for one turn.
    ///
    /// Every history turn is carried over in order with no reordering or
    /// deduplication, and the new input is appended last as a user entry.
    /// An empty history yields exactly one entry.
    pub fn assemble(&self, history: &History, player_input: &str) -> GenerateContentRequest {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|turn| Content::text(*turn.role(), turn.content().as_str()))
            .collect();
        contents.push(Content::text(Role::User, player_input));

        GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part::text(self.instructions.as_ref())],
            },
            contents,
            generation_config: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Turn;

    #[test]
    fn empty_history_yields_single_user_entry() {
        let payload = PromptAssembler::new().assemble(&History::new(), "begin");
        assert_eq!(payload.contents, vec![Content::text(Role::User, "begin")]);
        assert_eq!(payload.system_instruction.parts.len(), 1);
        assert_eq!(payload.system_instruction.parts[0].text, NARRATOR_INSTRUCTIONS);
    }

    #[test]
    fn preserves_duplicates_and_order() {
        let history = History::from(vec![
            Turn::user("wait"),
            Turn::narrator("nothing happens"),
            Turn::user("wait"),
            Turn::narrator("nothing happens"),
        ]);
        let payload = PromptAssembler::new().assemble(&history, "wait");

        let texts: Vec<&str> = payload
            .contents
            .iter()
            .map(|c| c.parts[0].text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec!["wait", "nothing happens", "wait", "nothing happens", "wait"]
        );
    }

    #[test]
    fn wire_shape_is_exact() {
        let history = History::from(vec![Turn::user("a"), Turn::narrator("b")]);
        let payload = PromptAssembler::new()
            .with_instructions("RULES")
            .assemble(&history, "c");
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "system_instruction": { "parts": [{ "text": "RULES" }] },
                "contents": [
                    { "role": "user", "parts": [{ "text": "a" }] },
                    { "role": "model", "parts": [{ "text": "b" }] },
                    { "role": "user", "parts": [{ "text": "c" }] }
                ],
                "generation_config": {
                    "temperature": 0.9,
                    "topP": 0.95,
                    "maxOutputTokens": 512
                }
            })
        );
    }
}
