//! Narrative session control for Tides.
//!
//! [`SessionController`] runs one turn: it checks the driver is usable,
//! validates the input, guards against overlapping turns, assembles the
//! prompt, calls the completion driver under a timeout, enforces the story
//! contract and returns the extended history. [`Transcript`] and
//! [`LoopKeeper`] are the caller-side helpers front ends build on.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod controller;
mod loops;
mod single_flight;
mod transcript;

pub use config::{
    GeminiSettings, GenerationSettings, ServerSettings, SessionSettings, TidesConfig,
};
pub use controller::{ContractPolicy, DEFAULT_REQUEST_TIMEOUT, SessionController};
pub use loops::{INTRO_PROMPT, LoopKeeper, PlayerCommand, RESTART_PROMPT};
pub use single_flight::{FlightGuard, SingleFlight};
pub use transcript::{PendingTurn, Settlement, Transcript};
