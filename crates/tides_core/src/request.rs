//! Request and outcome types for a single turn.

use crate::{History, StoryFrame};
use serde::{Deserialize, Serialize};

/// The unit of input to one turn.
///
/// # Examples
///
/// ```
/// use tides_core::SessionRequest;
///
/// let request: SessionRequest =
///     serde_json::from_str(r#"{"history": [], "playerInput": "look around"}"#).unwrap();
///
/// assert!(request.history.is_empty());
/// assert_eq!(request.player_input, "look around");
/// assert_eq!(request.session_id, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    /// Full history the turn extends
    pub history: History,
    /// What the player just typed
    pub player_input: String,
    /// Optional stable session identity for overlap detection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl SessionRequest {
    /// Create a request without a session identity.
    pub fn new(history: History, player_input: impl Into<String>) -> Self {
        Self {
            history,
            player_input: player_input.into(),
            session_id: None,
        }
    }

    /// Attach a session identity.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Key used to detect overlapping turns for the same session.
    ///
    /// The explicit session id when present, otherwise the fingerprint of
    /// the base history. A fresh session with no id has no identity to
    /// share, so it gets no key and is never reported busy.
    ///
    /// # Examples
    ///
    /// ```
    /// use tides_core::{History, SessionRequest, Turn};
    ///
    /// assert_eq!(SessionRequest::new(History::new(), "wake").flight_key(), None);
    ///
    /// let request = SessionRequest::new(History::new(), "wake").with_session_id("tide-7");
    /// assert_eq!(request.flight_key().as_deref(), Some("session:tide-7"));
    ///
    /// let history = History::new().append(Turn::user("wake"));
    /// assert!(SessionRequest::new(history, "look").flight_key().is_some());
    /// ```
    pub fn flight_key(&self) -> Option<String> {
        match &self.session_id {
            Some(id) => Some(format!("session:{}", id)),
            None if self.history.is_empty() => None,
            None => Some(format!("history:{}", self.history.fingerprint())),
        }
    }
}

/// Result of a successful turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
    /// Raw narrator text
    pub reply: String,
    /// The request history extended by the user and narrator turns
    pub history: History,
    /// Structured reply, when contract validation was enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame: Option<StoryFrame>,
}
