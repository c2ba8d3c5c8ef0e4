//! Loop lifecycle: the opening prompt, restarts, and player commands.

use tracing::info;

/// Sent as the player's first line of a new game.
pub const INTRO_PROMPT: &str = "Start a fresh loop of *Tides of Remembrance*. \
Introduce the Waker (he/him) waking near the sea or coastal ruins, hint at his \
engineering skill, the flooded kingdom, and the mystery of spirits stored in \
vials. Present the first situation plus options following the required \
LOCATION/SCENE/OPTIONS/STATS format.";

/// Sent as the player's first line after a restart.
pub const RESTART_PROMPT: &str = "Begin a completely new loop in *Tides of Remembrance*. \
Keep the core lore, but change early details: starting spot, NPCs introduced, \
and early events. The Waker faintly remembers having done this before, but \
only as vague déjà vu. Follow the LOCATION/SCENE/OPTIONS/STATS format.";

/// Ensures each loop is opened exactly once.
///
/// [`opening`](Self::opening) may be polled every time a front end
/// re-renders; only the first poll of a loop yields a prompt. The first
/// loop opens with [`INTRO_PROMPT`], every loop after a
/// [`restart`](Self::restart) with [`RESTART_PROMPT`].
///
/// # Examples
///
/// ```
/// use tides_narrative::{INTRO_PROMPT, LoopKeeper, RESTART_PROMPT};
///
/// let mut keeper = LoopKeeper::new();
/// assert_eq!(keeper.opening(), Some(INTRO_PROMPT));
/// assert_eq!(keeper.opening(), None);
///
/// keeper.restart();
/// assert_eq!(keeper.opening(), Some(RESTART_PROMPT));
/// assert_eq!(keeper.opening(), None);
/// assert_eq!(keeper.loop_number(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopKeeper {
    started: bool,
    loop_number: u32,
    prompt: &'static str,
}

impl Default for LoopKeeper {
    fn default() -> Self {
        Self {
            started: false,
            loop_number: 0,
            prompt: INTRO_PROMPT,
        }
    }
}

impl LoopKeeper {
    /// A keeper for a game that has not started.
    pub fn new() -> Self {
        Self::default()
    }

    /// The opening prompt if the current loop has not been opened yet.
    pub fn opening(&mut self) -> Option<&'static str> {
        if self.started {
            return None;
        }
        self.started = true;
        self.loop_number += 1;
        info!(loop_number = self.loop_number, "Opening loop");
        Some(self.prompt)
    }

    /// Abandon the current loop; the next [`opening`](Self::opening) yields
    /// the restart prompt.
    pub fn restart(&mut self) {
        info!(loop_number = self.loop_number, "Abandoning loop");
        self.started = false;
        self.prompt = RESTART_PROMPT;
    }

    /// Forget that the current loop was opened, for when its opening turn
    /// failed. The next [`opening`](Self::opening) yields the same prompt.
    pub fn reopen(&mut self) {
        if self.started {
            self.started = false;
            self.loop_number = self.loop_number.saturating_sub(1);
        }
    }

    /// Whether the current loop has been opened.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// 1-based number of the current loop, 0 before the first.
    pub fn loop_number(&self) -> u32 {
        self.loop_number
    }
}

/// What a line typed at the prompt means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Leave the game
    Quit,
    /// Abandon the loop and start a new one
    Restart,
    /// Nothing was typed
    Blank,
    /// An in-story action, trimmed
    Action(String),
}

impl PlayerCommand {
    /// Interpret one line of player input.
    ///
    /// # Examples
    ///
    /// ```
    /// use tides_narrative::PlayerCommand;
    ///
    /// assert_eq!(PlayerCommand::parse("  EXIT "), PlayerCommand::Quit);
    /// assert_eq!(PlayerCommand::parse("New Game"), PlayerCommand::Restart);
    /// assert_eq!(PlayerCommand::parse("   "), PlayerCommand::Blank);
    /// assert_eq!(
    ///     PlayerCommand::parse(" pry open the hatch "),
    ///     PlayerCommand::Action("pry open the hatch".into())
    /// );
    /// ```
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Self::Blank,
            "/quit" | "quit" | "exit" => Self::Quit,
            "/restart" | "new loop" | "new run" | "new game" => Self::Restart,
            _ => Self::Action(trimmed.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reopen_after_failed_opening() {
        let mut keeper = LoopKeeper::new();
        assert!(keeper.opening().is_some());
        keeper.reopen();
        assert!(!keeper.is_started());
        assert_eq!(keeper.opening(), Some(INTRO_PROMPT));
        assert_eq!(keeper.loop_number(), 1);
    }

    #[test]
    fn restart_before_opening_counts_once() {
        let mut keeper = LoopKeeper::new();
        keeper.restart();
        assert_eq!(keeper.opening(), Some(RESTART_PROMPT));
        assert_eq!(keeper.opening(), None);
        assert_eq!(keeper.loop_number(), 1);
    }

    #[test]
    fn failed_restart_reopens_with_restart_prompt() {
        let mut keeper = LoopKeeper::new();
        assert_eq!(keeper.opening(), Some(INTRO_PROMPT));
        keeper.restart();
        assert_eq!(keeper.opening(), Some(RESTART_PROMPT));
        keeper.reopen();
        assert!(!keeper.is_started());
        assert_eq!(keeper.opening(), Some(RESTART_PROMPT));
        assert_eq!(keeper.loop_number(), 2);
    }

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(PlayerCommand::parse("/QUIT"), PlayerCommand::Quit);
        assert_eq!(PlayerCommand::parse("quit"), PlayerCommand::Quit);
        assert_eq!(PlayerCommand::parse("/Restart"), PlayerCommand::Restart);
        assert_eq!(PlayerCommand::parse("new run"), PlayerCommand::Restart);
        assert_eq!(PlayerCommand::parse("new loop"), PlayerCommand::Restart);
        assert_eq!(PlayerCommand::parse(""), PlayerCommand::Blank);
        assert_eq!(
            PlayerCommand::parse("quit the tower"),
            PlayerCommand::Action("quit the tower".into())
        );
    }
}
