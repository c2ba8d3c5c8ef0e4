//! One narrative turn, end to end.

use crate::{SingleFlight, TidesConfig};
use std::time::Duration;
use tides_core::{PromptAssembler, SessionOutcome, SessionRequest, Turn, parse_story_frame};
use tides_error::{CompletionError, CompletionErrorKind, TidesResult, ValidationError};
use tides_interface::CompletionDriver;
use tracing::{debug, info, instrument, warn};

/// Default bound on one completion round trip.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Whether narrator replies must satisfy the story-frame contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum ContractPolicy {
    /// Parse every reply; a violation fails the turn
    #[default]
    #[display("strict")]
    Strict,
    /// Accept any non-empty reply without a frame
    #[display("lenient")]
    Lenient,
}

/// Runs turns against a completion driver.
///
/// The controller holds no session state. Each call reads the caller's
/// history and returns a new one; the only shared state is the registry of
/// sessions with a turn in flight.
///
/// # Example
///
/// ```no_run
/// use tides_core::{History, SessionRequest};
/// use tides_models::{GeminiClient, GeminiConfig};
/// use tides_narrative::SessionController;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let controller = SessionController::new(GeminiClient::new(GeminiConfig::from_env()?)?);
/// let outcome = controller
///     .take_turn(&SessionRequest::new(History::new(), "look around"))
///     .await?;
/// assert_eq!(outcome.history.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SessionController<D> {
    driver: D,
    assembler: PromptAssembler,
    policy: ContractPolicy,
    request_timeout: Duration,
    flights: SingleFlight,
}

impl<D: CompletionDriver> SessionController<D> {
    /// Controller with default prompt, strict contract, and default timeout.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            assembler: PromptAssembler::new(),
            policy: ContractPolicy::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            flights: SingleFlight::new(),
        }
    }

    /// Controller configured from loaded settings.
    pub fn from_config(driver: D, config: &TidesConfig) -> Self {
        Self::new(driver)
            .with_assembler(PromptAssembler::new().with_generation(config.generation_config()))
            .with_policy(config.contract_policy())
            .with_request_timeout(config.request_timeout())
    }

    /// Replace the prompt assembler.
    pub fn with_assembler(mut self, assembler: PromptAssembler) -> Self {
        self.assembler = assembler;
        self
    }

    /// Set the contract policy.
    pub fn with_policy(mut self, policy: ContractPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the completion timeout.
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Share an existing in-flight registry.
    pub fn with_single_flight(mut self, flights: SingleFlight) -> Self {
        self.flights = flights;
        self
    }

    /// The completion driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The active contract policy.
    pub fn policy(&self) -> ContractPolicy {
        self.policy
    }

    /// The in-flight registry.
    pub fn flights(&self) -> &SingleFlight {
        &self.flights
    }

    /// Advance the story by one turn.
    ///
    /// On success the outcome's history is the request history followed by
    /// the player's input and the narrator's reply. On failure nothing is
    /// returned but the error; the request is untouched and can be resent.
    ///
    /// # Errors
    ///
    /// - configuration error when the driver has no credential
    /// - validation error for blank input
    /// - session busy when a turn for the same session is in flight
    /// - completion errors from the driver, or a timeout
    /// - contract violation under [`ContractPolicy::Strict`]
    #[instrument(
        skip(self, request),
        fields(
            provider = self.driver.provider_name(),
            turns = request.history.len(),
            policy = %self.policy,
        )
    )]
    pub async fn take_turn(&self, request: &SessionRequest) -> TidesResult<SessionOutcome> {
        self.driver.check_ready()?;

        let input = request.player_input.as_str();
        if input.trim().is_empty() {
            warn!("Rejecting blank player input");
            return Err(ValidationError::new("Player input must not be empty.").into());
        }

        let _guard = request
            .flight_key()
            .map(|key| self.flights.try_acquire(key))
            .transpose()?;

        let payload = self.assembler.assemble(&request.history, input);
        debug!(contents = payload.contents.len(), "Prompt assembled");

        let reply = tokio::time::timeout(self.request_timeout, self.driver.complete(&payload))
            .await
            .map_err(|_| {
                warn!(
                    seconds = self.request_timeout.as_secs(),
                    "Completion timed out"
                );
                CompletionError::new(CompletionErrorKind::Timeout {
                    seconds: self.request_timeout.as_secs(),
                })
            })??;

        let frame = match self.policy {
            ContractPolicy::Strict => Some(parse_story_frame(&reply).inspect_err(|e| {
                warn!(violation = %e.kind, "Narrator reply broke the story format");
            })?),
            ContractPolicy::Lenient => None,
        };

        let history = request
            .history
            .append(Turn::user(input))
            .append(Turn::narrator(reply.clone()));

        info!(turns = history.len(), "Turn settled");
        Ok(SessionOutcome {
            reply,
            history,
            frame,
        })
    }
}
