//! Dealing random decks.

use crate::core::{Card, Deck, GameRng, PlayerMap};

/// Shuffle cards `1..=card_count` and split them between the two players.
///
/// Player 1 receives the first half (and the extra card when `card_count`
/// is odd), so both decks are non-empty. The same seed always produces the
/// same decks.
///
/// Panics if `card_count` is less than 2.
///
/// ```
/// use crab_combat::core::PlayerId;
/// use crab_combat::games::combat::deal;
///
/// let decks = deal(11, 7);
/// assert_eq!(decks[PlayerId::ONE].len(), 6);
/// assert_eq!(decks[PlayerId::TWO].len(), 5);
/// assert_eq!(deal(11, 7), decks);
/// ```
#[must_use]
pub fn deal(card_count: u32, seed: u64) -> PlayerMap<Deck> {
    assert!(card_count >= 2, "Must deal at least 2 cards");

    let mut cards: Vec<Card> = (1..=card_count).map(Card::new).collect();
    GameRng::new(seed).shuffle(&mut cards);

    let second_half = cards.split_off(cards.len().div_ceil(2));
    PlayerMap::from_pair(cards.into_iter().collect(), second_half.into_iter().collect())
}
