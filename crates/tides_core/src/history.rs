//! Append-only session transcript.

use crate::{Role, Turn};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Ordered sequence of turns forming a session's canonical transcript.
///
/// Insertion order is chronological order. A `History` is never mutated in
/// place: [`History::append`] returns a new value and leaves `self` intact,
/// so a caller holding the old value can always resubmit it.
///
/// Serializes as a plain JSON array of `{ role, content }` objects.
///
/// # Examples
///
/// ```
/// use tides_core::{History, Turn};
///
/// let empty = History::new();
/// let one = empty.append(Turn::user("look around"));
///
/// assert!(empty.is_empty());
/// assert_eq!(one.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(Vec<Turn>);

impl History {
    /// An empty history, the state of a fresh session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new history equal to `self` with `turn` added at the end.
    pub fn append(&self, turn: Turn) -> Self {
        let mut turns = Vec::with_capacity(self.0.len() + 1);
        turns.extend_from_slice(&self.0);
        turns.push(turn);
        Self(turns)
    }

    /// Whether no turn has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded turns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The turns in chronological order.
    pub fn turns(&self) -> &[Turn] {
        &self.0
    }

    /// Iterate over the turns in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.0.iter()
    }

    /// The most recent turn, if any.
    pub fn last(&self) -> Option<&Turn> {
        self.0.last()
    }

    /// The most recent narrator turn, if any.
    pub fn last_narration(&self) -> Option<&Turn> {
        self.0.iter().rev().find(|turn| *turn.role() == Role::Narrator)
    }

    /// Whether turns alternate User/Narrator starting with User.
    ///
    /// Histories produced by the session controller always satisfy this
    /// when they started empty; caller-supplied histories are not required to.
    pub fn is_alternating(&self) -> bool {
        self.0.iter().enumerate().all(|(index, turn)| {
            let expected = if index % 2 == 0 {
                Role::User
            } else {
                Role::Narrator
            };
            *turn.role() == expected
        })
    }

    /// Stable hex digest of the role/content sequence.
    ///
    /// Two histories have the same fingerprint exactly when they hold the
    /// same turns in the same order.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for turn in &self.0 {
            hasher.update(turn.role().wire_name().as_bytes());
            hasher.update([0u8]);
            hasher.update((turn.content().len() as u64).to_be_bytes());
            hasher.update(turn.content().as_bytes());
        }
        format!("{:x}", hasher.finalize())
    }
}

impl From<Vec<Turn>> for History {
    fn from(turns: Vec<Turn>) -> Self {
        Self(turns)
    }
}

impl FromIterator<Turn> for History {
    fn from_iter<I: IntoIterator<Item = Turn>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_leaves_original_untouched() {
        let base = History::from(vec![Turn::user("a"), Turn::narrator("b")]);
        let before = base.clone();
        let next = base.append(Turn::user("c"));

        assert_eq!(base, before);
        assert_eq!(next.len(), 3);
        assert_eq!(next.turns()[..2], base.turns()[..]);
        assert_eq!(next.last(), Some(&Turn::user("c")));
    }

    #[test]
    fn alternation_check() {
        assert!(History::new().is_alternating());
        assert!(History::from(vec![Turn::user("a"), Turn::narrator("b")]).is_alternating());
        assert!(!History::from(vec![Turn::narrator("b")]).is_alternating());
        assert!(!History::from(vec![Turn::user("a"), Turn::user("b")]).is_alternating());
    }

    #[test]
    fn fingerprint_tracks_content_and_order() {
        let ab = History::from(vec![Turn::user("a"), Turn::narrator("b")]);
        let ba = History::from(vec![Turn::narrator("b"), Turn::user("a")]);
        let ab_again = History::from(vec![Turn::user("a"), Turn::narrator("b")]);

        assert_eq!(ab.fingerprint(), ab_again.fingerprint());
        assert_ne!(ab.fingerprint(), ba.fingerprint());
        assert_ne!(ab.fingerprint(), History::new().fingerprint());
    }

    #[test]
    fn serializes_as_array() {
        let history = History::from(vec![Turn::user("hi"), Turn::narrator("LOCATION:")]);
        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"role": "user", "content": "hi"},
                {"role": "model", "content": "LOCATION:"}
            ])
        );
    }

    #[test]
    fn rejects_unknown_role() {
        let result = serde_json::from_str::<History>(r#"[{"role":"system","content":"x"}]"#);
        assert!(result.is_err());
    }
}
