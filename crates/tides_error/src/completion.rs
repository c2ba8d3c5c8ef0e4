//! Completion service error types.

/// Failure conditions of a single completion round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CompletionErrorKind {
    /// The service answered with a non-success status
    #[display("Completion service returned HTTP {}: {}", status_code, body)]
    Http {
        /// Upstream HTTP status code
        status_code: u16,
        /// Upstream response body, verbatim
        body: String,
    },
    /// The request never produced a response
    #[display("Completion request failed: {}", _0)]
    Network(String),
    /// The service answered 2xx with a body that does not match its schema
    #[display("Malformed completion response: {}", _0)]
    MalformedResponse(String),
    /// The service answered without any extractable text
    #[display("No reply received from the completion service")]
    EmptyReply,
    /// The bounded wait for the service expired
    #[display("Completion request timed out after {}s", seconds)]
    Timeout {
        /// Configured timeout in seconds
        seconds: u64,
    },
}

impl CompletionErrorKind {
    /// Whether this failure came from the transport (as opposed to the content).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            CompletionErrorKind::Http { .. }
                | CompletionErrorKind::Network(_)
                | CompletionErrorKind::MalformedResponse(_)
        )
    }

    /// Upstream status code, when the service produced one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            CompletionErrorKind::Http { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

/// Completion error with source location tracking.
///
/// # Examples
///
/// ```
/// use tides_error::{CompletionError, CompletionErrorKind};
///
/// let err = CompletionError::new(CompletionErrorKind::Http {
///     status_code: 503,
///     body: "overloaded".to_string(),
/// });
/// assert!(format!("{}", err).contains("503"));
/// assert!(err.kind.is_transport());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Completion Error: {} at line {} in {}", kind, line, file)]
pub struct CompletionError {
    /// The kind of error that occurred
    pub kind: CompletionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CompletionError {
    /// Create a new CompletionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompletionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
