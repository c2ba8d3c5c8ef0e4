//! Error types for the Tides narrative engine.
//!
//! This crate provides the error taxonomy shared by every Tides crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Every concern error converts into [`TidesError`], and [`TidesError::class`]
//! reports which caller-facing class a failure belongs to.
//!
//! # Examples
//!
//! ```
//! use tides_error::{ErrorClass, TidesResult, ValidationError};
//!
//! fn take_turn(input: &str) -> TidesResult<()> {
//!     if input.trim().is_empty() {
//!         Err(ValidationError::new("playerInput must not be empty"))?
//!     }
//!     Ok(())
//! }
//!
//! let err = take_turn("  ").unwrap_err();
//! assert_eq!(err.class(), ErrorClass::InvalidBody);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod completion;
mod config;
mod contract;
mod error;
mod session;
mod validation;

pub use completion::{CompletionError, CompletionErrorKind};
pub use config::ConfigError;
pub use contract::{ContractError, ContractErrorKind};
pub use error::{ErrorClass, TidesError, TidesErrorKind, TidesResult};
pub use session::{SessionError, SessionErrorKind};
pub use validation::ValidationError;
