//! Caller-side history with optimistic appends.
//!
//! A front end usually shows the player's line the moment it is submitted,
//! before the narrator answers. [`Transcript::begin`] produces that
//! optimistic view without committing it; [`PendingTurn::settle`] either
//! adopts the controller's new history or discards the optimistic line so a
//! resubmission does not duplicate it.

use tides_core::{History, SessionOutcome, SessionRequest, StoryFrame, Turn};
use tides_error::{TidesError, TidesResult};
use tracing::debug;

/// The history a caller currently holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    history: History,
    session_id: Option<String>,
}

impl Transcript {
    /// Empty transcript without a session identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a session identity sent with every request.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Confirmed history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether no turn has been confirmed yet.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Drop all confirmed turns, keeping the session identity.
    pub fn reset(&mut self) {
        self.history = History::new();
    }

    /// Start a turn. The transcript is borrowed until the turn settles.
    pub fn begin(&mut self, player_input: impl Into<String>) -> PendingTurn<'_> {
        let mut request = SessionRequest::new(self.history.clone(), player_input);
        request.session_id = self.session_id.clone();
        PendingTurn {
            transcript: self,
            request,
        }
    }
}

/// How a pending turn ended.
#[derive(Debug)]
pub enum Settlement {
    /// The narrator answered; the transcript now ends with this exchange
    Confirmed {
        /// Raw narrator text
        reply: String,
        /// Structured reply, when the contract was enforced
        frame: Option<StoryFrame>,
    },
    /// The turn failed; the transcript is as it was before `begin`
    RolledBack {
        /// The input that was not committed, for resubmission
        input: String,
        /// Why the turn failed
        error: TidesError,
    },
}

/// A submitted turn that has not settled yet.
#[derive(Debug)]
pub struct PendingTurn<'a> {
    transcript: &'a mut Transcript,
    request: SessionRequest,
}

impl PendingTurn<'_> {
    /// The request to hand to the controller.
    pub fn request(&self) -> &SessionRequest {
        &self.request
    }

    /// History as displayed while the turn is in flight.
    pub fn optimistic_history(&self) -> History {
        self.request
            .history
            .append(Turn::user(self.request.player_input.clone()))
    }

    /// Reconcile with the controller's result.
    pub fn settle(self, result: TidesResult<SessionOutcome>) -> Settlement {
        match result {
            Ok(outcome) => {
                debug!(turns = outcome.history.len(), "Confirming turn");
                self.transcript.history = outcome.history;
                Settlement::Confirmed {
                    reply: outcome.reply,
                    frame: outcome.frame,
                }
            }
            Err(error) => {
                debug!(class = %error.class(), "Rolling back turn");
                Settlement::RolledBack {
                    input: self.request.player_input,
                    error,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tides_core::Role;
    use tides_error::ValidationError;

    fn outcome_for(request: &SessionRequest, reply: &str) -> SessionOutcome {
        SessionOutcome {
            reply: reply.to_string(),
            history: request
                .history
                .append(Turn::user(request.player_input.clone()))
                .append(Turn::narrator(reply)),
            frame: None,
        }
    }

    #[test]
    fn confirm_adopts_new_history() {
        let mut transcript = Transcript::new();
        let pending = transcript.begin("open the vial");
        let optimistic = pending.optimistic_history();
        assert_eq!(optimistic.len(), 1);
        assert_eq!(optimistic.last().map(|t| *t.role()), Some(Role::User));

        let outcome = outcome_for(pending.request(), "A spirit stirs.");
        match pending.settle(Ok(outcome)) {
            Settlement::Confirmed { reply, .. } => assert_eq!(reply, "A spirit stirs."),
            other => panic!("unexpected settlement: {:?}", other),
        }
        assert_eq!(transcript.history().len(), 2);
    }

    #[test]
    fn rollback_keeps_history_and_returns_input() {
        let mut transcript = Transcript::new();
        let first = transcript.begin("wake");
        let outcome = outcome_for(first.request(), "You wake.");
        first.settle(Ok(outcome));
        let before = transcript.history().clone();

        let pending = transcript.begin("swim");
        let settlement = pending.settle(Err(ValidationError::new("nope").into()));

        match settlement {
            Settlement::RolledBack { input, .. } => assert_eq!(input, "swim"),
            other => panic!("unexpected settlement: {:?}", other),
        }
        assert_eq!(transcript.history(), &before);
    }

    #[test]
    fn session_id_travels_with_request() {
        let mut transcript = Transcript::new().with_session_id("abc");
        let pending = transcript.begin("look");
        assert_eq!(pending.request().session_id.as_deref(), Some("abc"));
    }
}
