//! Top-level error wrapper types.

use crate::{CompletionError, ConfigError, ContractError, SessionError, ValidationError};

/// Every failure a turn can end in.
///
/// # Examples
///
/// ```
/// use tides_error::{ConfigError, TidesError};
///
/// let config_err = ConfigError::new("GEMINI_API_KEY environment variable not set");
/// let err: TidesError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum TidesErrorKind {
    /// Credential or configuration file problem
    #[from(ConfigError)]
    Config(ConfigError),
    /// Malformed turn request
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Completion round trip failure
    #[from(CompletionError)]
    Completion(CompletionError),
    /// Narrator reply failed structural validation
    #[from(ContractError)]
    Contract(ContractError),
    /// Session coordination failure
    #[from(SessionError)]
    Session(SessionError),
}

/// Caller-facing classification of a failure.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
pub enum ErrorClass {
    /// Malformed JSON, missing fields or empty input
    #[display("invalid-body")]
    InvalidBody,
    /// Credential absent
    #[display("missing-config")]
    MissingConfig,
    /// Completion service failure or unusable reply
    #[display("upstream-failure")]
    UpstreamFailure,
    /// Completion service did not answer in time
    #[display("upstream-timeout")]
    Timeout,
    /// Another turn for the session is in flight
    #[display("session-busy")]
    Busy,
}

/// Tides error with kind discrimination.
///
/// # Examples
///
/// ```
/// use tides_error::{ConfigError, ErrorClass, TidesResult};
///
/// fn might_fail() -> TidesResult<()> {
///     Err(ConfigError::missing_credential())?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert_eq!(err.class(), ErrorClass::MissingConfig);
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Tides Error: {}", _0)]
pub struct TidesError(Box<TidesErrorKind>);

impl TidesError {
    /// Create a new error from a kind.
    pub fn new(kind: TidesErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TidesErrorKind {
        &self.0
    }

    /// Which caller-facing class this error belongs to.
    pub fn class(&self) -> ErrorClass {
        match self.kind() {
            TidesErrorKind::Config(_) => ErrorClass::MissingConfig,
            TidesErrorKind::Validation(_) => ErrorClass::InvalidBody,
            TidesErrorKind::Completion(e) => match e.kind {
                crate::CompletionErrorKind::Timeout { .. } => ErrorClass::Timeout,
                _ => ErrorClass::UpstreamFailure,
            },
            TidesErrorKind::Contract(_) => ErrorClass::UpstreamFailure,
            TidesErrorKind::Session(_) => ErrorClass::Busy,
        }
    }

    /// Short message suitable for showing to a player.
    pub fn public_message(&self) -> String {
        match self.kind() {
            TidesErrorKind::Config(e) => e.message.clone(),
            TidesErrorKind::Validation(e) => e.message.clone(),
            TidesErrorKind::Completion(e) => e.kind.to_string(),
            TidesErrorKind::Contract(e) => format!("Narrator reply broke the story format: {}", e.kind),
            TidesErrorKind::Session(e) => e.kind.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to TidesErrorKind
impl<T> From<T> for TidesError
where
    T: Into<TidesErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Tides operations.
pub type TidesResult<T> = std::result::Result<T, TidesError>;
