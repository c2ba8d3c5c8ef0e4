//! A single attributed message in a session.

use crate::Role;
use serde::{Deserialize, Serialize};

/// One turn of the transcript. Immutable once created.
///
/// # Examples
///
/// ```
/// use tides_core::{Role, Turn};
///
/// let turn = Turn::user("look around");
/// assert_eq!(*turn.role(), Role::User);
/// assert_eq!(turn.content(), "look around");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct Turn {
    /// Author of the turn
    role: Role,
    /// Text of the turn
    content: String,
}

impl Turn {
    /// Create a turn for the given role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// A player turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// A narrator turn.
    pub fn narrator(content: impl Into<String>) -> Self {
        Self::new(Role::Narrator, content)
    }
}
