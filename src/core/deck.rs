//! Decks: ordered card sequences.
//!
//! The front of a deck is its top (next card drawn); round winnings are
//! placed at the back (bottom). Backed by `im::Vector`, so cloning a deck
//! for a history snapshot or a sub-game is O(1) and never aliases the
//! original.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;

/// An ordered deck of cards, top first.
///
/// ```
/// use crab_combat::core::{Card, Deck};
///
/// let mut deck = Deck::from_values([3, 1]);
/// assert_eq!(deck.draw(), Some(Card::new(3)));
///
/// deck.place_winnings(Card::new(9), Card::new(2));
/// assert_eq!(deck.values(), vec![1, 9, 2]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck from raw card values, top first.
    pub fn from_values(values: impl IntoIterator<Item = u32>) -> Self {
        values.into_iter().map(Card::new).collect()
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw the top card.
    ///
    /// Returns `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Put a won round at the bottom: the winner's card first, then the
    /// loser's card.
    pub fn place_winnings(&mut self, own: Card, taken: Card) {
        self.cards.push_back(own);
        self.cards.push_back(taken);
    }

    /// Copy the top `count` cards into a new deck, preserving order.
    ///
    /// Panics if the deck holds fewer than `count` cards.
    #[must_use]
    pub fn copy_top(&self, count: usize) -> Self {
        assert!(
            count <= self.len(),
            "Cannot copy {} cards from a deck of {}",
            count,
            self.len()
        );
        Self {
            cards: self.cards.take(count),
        }
    }

    /// Iterate over cards, top first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Raw card values, top first.
    #[must_use]
    pub fn values(&self) -> Vec<u32> {
        self.iter().map(Card::value).collect()
    }

    /// Score the deck.
    ///
    /// Each card is multiplied by its 1-based position counted from the
    /// bottom: the bottom card counts once, the top card counts `len()`
    /// times. The deck is left untouched.
    ///
    /// ```
    /// use crab_combat::core::Deck;
    ///
    /// let deck = Deck::from_values([3, 2, 10, 6, 8, 5, 9, 4, 7, 1]);
    /// assert_eq!(deck.score(), 306);
    /// ```
    #[must_use]
    pub fn score(&self) -> u64 {
        self.iter()
            .rev()
            .zip(1u64..)
            .map(|(card, weight)| u64::from(card.value()) * weight)
            .sum()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for card in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", card)?;
            first = false;
        }
        Ok(())
    }
}
