//! Rejection of overlapping turns for the same session.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use tides_error::{SessionError, SessionErrorKind};
use tracing::{debug, warn};

/// Registry of session keys with a turn currently in flight.
///
/// Cloning yields a handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct SingleFlight {
    in_flight: Arc<Mutex<HashSet<String>>>,
}

impl SingleFlight {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `key` for the lifetime of the returned guard.
    ///
    /// # Errors
    ///
    /// [`SessionErrorKind::Busy`] when the key is already claimed.
    pub fn try_acquire(&self, key: impl Into<String>) -> Result<FlightGuard, SessionError> {
        let key = key.into();
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if !in_flight.insert(key.clone()) {
            warn!(key = %key, "Rejecting overlapping turn");
            return Err(SessionError::new(SessionErrorKind::Busy(key)));
        }
        debug!(key = %key, "Turn in flight");
        Ok(FlightGuard {
            key,
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    /// Whether `key` is currently claimed.
    pub fn is_in_flight(&self, key: &str) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key)
    }

    /// Number of turns currently in flight.
    pub fn len(&self) -> usize {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no turn is in flight.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Releases its key when dropped, including when the owning future is cancelled.
#[derive(Debug)]
pub struct FlightGuard {
    key: String,
    in_flight: Arc<Mutex<HashSet<String>>>,
}

impl FlightGuard {
    /// The claimed key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for FlightGuard {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
        debug!(key = %self.key, "Turn settled");
    }
}
