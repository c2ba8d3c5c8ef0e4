//! Role types for session participants.

use serde::{Deserialize, Serialize};

/// Who authored a turn.
///
/// The wire vocabulary is the completion service's: `"user"` for the player
/// and `"model"` for the narrator. Any other string fails to deserialize.
///
/// # Examples
///
/// ```
/// use tides_core::Role;
///
/// assert_eq!(Role::Narrator.wire_name(), "model");
/// assert_eq!(format!("{}", Role::User), "User");
///
/// let role: Role = serde_json::from_str("\"model\"").unwrap();
/// assert_eq!(role, Role::Narrator);
/// assert!(serde_json::from_str::<Role>("\"system\"").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// The player
    #[serde(rename = "user")]
    User,
    /// The story engine
    #[serde(rename = "model")]
    Narrator,
}

impl Role {
    /// Role name in the completion service's protocol.
    pub fn wire_name(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Narrator => "model",
        }
    }
}
