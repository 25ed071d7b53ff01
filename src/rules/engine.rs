//! Rules engine trait and game results.
//!
//! A rule set answers one question: given the two cards just drawn and
//! what is left in each deck, who takes the round? It may answer with a
//! player directly or ask for a sub-game to be played first.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Deck, PlayerId, PlayerMap, Variant};
use crate::error::{GameError, PlayResult};

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndReason {
    /// The loser ran out of cards.
    DeckExhausted,
    /// A round would have started from a state seen before; player 1 wins.
    LoopDetected,
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// The winning player.
    pub winner: PlayerId,

    /// The winner's deck as the game ended.
    pub deck: Deck,

    /// Why the game stopped.
    pub reason: EndReason,

    /// Rounds played in this game (not counting rounds of sub-games).
    pub rounds: u64,

    /// Sub-games played, including sub-games of sub-games.
    pub sub_games: u64,
}

impl GameResult {
    /// Score of the winning deck.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.deck.score()
    }
}

/// What a rule set decided for one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundDecision {
    /// The round goes straight to this player.
    Winner(PlayerId),
    /// The round goes to whoever wins a sub-game played with these decks.
    SubGame(PlayerMap<Deck>),
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `decide_round` must be deterministic.
/// - Decks passed to a sub-game must be copies; the calling game keeps its
///   own decks.
pub trait RulesEngine: Clone {
    /// Which variant this rule set implements.
    fn variant(&self) -> Variant;

    /// Decide a round.
    ///
    /// `drawn` holds the cards each player just drew; `remaining` holds the
    /// decks after the draw.
    fn decide_round(
        &self,
        drawn: &PlayerMap<Card>,
        remaining: &PlayerMap<Deck>,
    ) -> PlayResult<RoundDecision>;
}

/// Higher card takes the round.
///
/// Equal cards have no winner and are reported as `GameError::TiedRound`.
pub fn higher_card(drawn: &PlayerMap<Card>) -> PlayResult<PlayerId> {
    let (one, two) = (drawn[PlayerId::ONE], drawn[PlayerId::TWO]);
    match one.cmp(&two) {
        std::cmp::Ordering::Greater => Ok(PlayerId::ONE),
        std::cmp::Ordering::Less => Ok(PlayerId::TWO),
        std::cmp::Ordering::Equal => Err(GameError::TiedRound { card: one, depth: 0 }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawn(one: u32, two: u32) -> PlayerMap<Card> {
        PlayerMap::from_pair(Card::new(one), Card::new(two))
    }

    #[test]
    fn test_higher_card() {
        assert_eq!(higher_card(&drawn(9, 5)), Ok(PlayerId::ONE));
        assert_eq!(higher_card(&drawn(2, 8)), Ok(PlayerId::TWO));
    }

    #[test]
    fn test_higher_card_tie() {
        assert!(matches!(
            higher_card(&drawn(4, 4)),
            Err(GameError::TiedRound { card, .. }) if card == Card::new(4)
        ));
    }

    #[test]
    fn test_game_result_score() {
        let result = GameResult {
            winner: PlayerId::TWO,
            deck: Deck::from_values([7, 5, 6, 2, 4, 1, 10, 8, 9, 3]),
            reason: EndReason::DeckExhausted,
            rounds: 17,
            sub_games: 4,
        };

        assert_eq!(result.score(), 291);
    }

    #[test]
    fn test_game_result_json_winner_is_checked() {
        let result = GameResult {
            winner: PlayerId::TWO,
            deck: Deck::from_values([3, 1]),
            reason: EndReason::LoopDetected,
            rounds: 6,
            sub_games: 0,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""winner":2"#));
        assert_eq!(serde_json::from_str::<GameResult>(&json).unwrap(), result);

        let tampered = json.replace(r#""winner":2"#, r#""winner":7"#);
        assert!(serde_json::from_str::<GameResult>(&tampered).is_err());
    }
}
