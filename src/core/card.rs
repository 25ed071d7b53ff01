//! Card values.
//!
//! A Combat card carries nothing but a positive integer. The value decides
//! plain rounds (higher card wins) and, in Recursive Combat, how many cards
//! a player must still hold to recurse into a sub-game.

use serde::{Deserialize, Serialize};

/// A single card.
///
/// Ordering compares card values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card(pub u32);

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the card value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The card value as a count, for comparing against deck sizes.
    #[must_use]
    pub const fn as_count(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Card {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
