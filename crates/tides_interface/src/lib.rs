//! Trait definitions for the Tides narrative session engine.
//!
//! The session controller talks to the completion service only through
//! [`CompletionDriver`], so tests and alternative providers can stand in for
//! the real HTTP client.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::CompletionDriver;
