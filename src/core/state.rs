//! Round snapshots and loop-detection history.
//!
//! ## RoundState
//!
//! Both decks, in order, as they stand before a round is played. Two
//! snapshots are equal only if every card sits in the same position of the
//! same deck.
//!
//! ## History
//!
//! Every `RoundState` one game instance has started a round from. Lookups are
//! hashed, so checking for a repeat costs O(deck size) rather than a scan of
//! all prior rounds. A history belongs to exactly one game; sub-games start
//! with their own.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::deck::Deck;
use super::player::PlayerMap;

/// Snapshot of both decks at the start of a round.
///
/// Cloning the decks is O(1): the snapshot shares structure with the live
/// decks until they diverge.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundState {
    decks: PlayerMap<Deck>,
}

impl RoundState {
    /// Capture the current decks.
    #[must_use]
    pub fn capture(decks: &PlayerMap<Deck>) -> Self {
        Self {
            decks: decks.clone(),
        }
    }

    /// The captured decks.
    #[must_use]
    pub fn decks(&self) -> &PlayerMap<Deck> {
        &self.decks
    }
}

/// States already seen by one game instance.
#[derive(Clone, Debug, Default)]
pub struct History {
    seen: FxHashSet<RoundState>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Has this exact state been recorded before?
    #[must_use]
    pub fn contains(&self, state: &RoundState) -> bool {
        self.seen.contains(state)
    }

    /// Record a state.
    ///
    /// Returns `false` if the state was already present.
    pub fn record(&mut self, state: RoundState) -> bool {
        self.seen.insert(state)
    }

    /// Number of distinct states recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
