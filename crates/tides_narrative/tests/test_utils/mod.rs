//! Test utilities for Tides narrative tests.
//!
//! This module provides a scripted completion driver and shared fixtures.

pub mod scripted_driver;

#[allow(unused_imports)]
pub use scripted_driver::{Step, ScriptedDriver};

/// A reply that satisfies the story contract.
#[allow(dead_code)]
pub const VALID_REPLY: &str = "LOCATION:\nA\nSCENE:\nB\nOPTIONS:\n- go\n- wait\nSTATS:\n- Health: 80\n- Inventory: Empty\n- Notable Traits: calm";
