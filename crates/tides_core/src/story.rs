//! Structured decomposition of a narrator reply.

use serde::{Serialize, Serializer};

/// What the Waker is carrying.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Inventory {
    /// The explicit "empty" marker
    Empty,
    /// Comma-separated items, in reply order
    Items(Vec<String>),
}

impl Inventory {
    /// Items carried; empty for [`Inventory::Empty`].
    pub fn items(&self) -> &[String] {
        match self {
            Inventory::Empty => &[],
            Inventory::Items(items) => items,
        }
    }

    /// Whether the marker was "empty".
    pub fn is_empty(&self) -> bool {
        matches!(self, Inventory::Empty)
    }
}

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Inventory::Empty => serializer.serialize_str("empty"),
            Inventory::Items(items) => items.serialize(serializer),
        }
    }
}

/// The STATS block of a reply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_getters::Getters)]
pub struct Stats {
    /// Health between 0 and 100
    health: u8,
    /// Carried items
    inventory: Inventory,
    /// Notable emotional/physical/mental traits
    traits: String,
}

impl Stats {
    pub(crate) fn new(health: u8, inventory: Inventory, traits: String) -> Self {
        Self {
            health,
            inventory,
            traits,
        }
    }
}

/// A structurally validated narrator reply.
///
/// Only [`parse_story_frame`](crate::parse_story_frame) produces a
/// `StoryFrame`; there is no other constructor.
///
/// # Examples
///
/// ```
/// use tides_core::parse_story_frame;
///
/// let frame = parse_story_frame(
///     "LOCATION:\nA\nSCENE:\nB\nOPTIONS:\n- go\n- wait\nSTATS:\n- Health: 80\n- Inventory: Empty\n- Notable Traits: calm",
/// )
/// .unwrap();
///
/// assert_eq!(*frame.stats().health(), 80);
/// assert_eq!(frame.options(), &vec!["go".to_string(), "wait".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_getters::Getters)]
pub struct StoryFrame {
    /// Where the Waker is right now
    location: String,
    /// What is happening
    scene: String,
    /// Two to four actionable choices
    options: Vec<String>,
    /// Health, inventory and traits
    stats: Stats,
}

impl StoryFrame {
    pub(crate) fn new(location: String, scene: String, options: Vec<String>, stats: Stats) -> Self {
        Self {
            location,
            scene,
            options,
            stats,
        }
    }

    /// Whether the Waker has died and the loop is about to reset.
    pub fn is_loop_over(&self) -> bool {
        self.stats.health == 0
    }
}
