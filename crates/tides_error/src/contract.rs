//! Narrator reply contract violations.

/// Ways a narrator reply can fail the LOCATION/SCENE/OPTIONS/STATS format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ContractErrorKind {
    /// A required section label never appeared
    #[display("Missing required section {}", _0)]
    MissingSection(String),
    /// A section appeared before one that must precede it
    #[display("Section {} appeared before {}", found, expected)]
    OutOfOrder {
        /// Section that was found
        found: String,
        /// Section that was expected next
        expected: String,
    },
    /// A section label appeared more than once
    #[display("Section {} appears more than once", _0)]
    DuplicateSection(String),
    /// A section had no content
    #[display("Section {} is empty", _0)]
    EmptySection(String),
    /// OPTIONS did not contain between two and four bullets
    #[display("Expected 2 to 4 options, found {}", _0)]
    OptionCount(usize),
    /// An option bullet had no text
    #[display("Option {} is empty", _0)]
    EmptyOption(usize),
    /// A STATS line was absent
    #[display("Missing stat line {}", _0)]
    MissingStat(String),
    /// A STATS line appeared more than once
    #[display("Stat line {} appears more than once", _0)]
    DuplicateStat(String),
    /// A STATS line had no value
    #[display("Stat line {} is empty", _0)]
    EmptyStat(String),
    /// Health was not a whole number
    #[display("Health must be an integer, found '{}'", _0)]
    HealthNotInteger(String),
    /// Health was outside 0..=100
    #[display("Health must be between 0 and 100, found {}", _0)]
    HealthOutOfRange(i64),
}

/// Contract violation with source location tracking.
///
/// # Examples
///
/// ```
/// use tides_error::{ContractError, ContractErrorKind};
///
/// let err = ContractError::new(ContractErrorKind::OptionCount(5));
/// assert!(format!("{}", err).contains("found 5"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Contract Violation: {} at line {} in {}", kind, line, file)]
pub struct ContractError {
    /// The specific violation
    pub kind: ContractErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ContractError {
    /// Create a new ContractError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ContractErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
