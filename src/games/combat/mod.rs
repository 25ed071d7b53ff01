//! Combat and Recursive Combat.
//!
//! Two players each hold a deck. Every round both draw their top card and
//! one player takes both cards, placing their own card first at the bottom
//! of their deck. A player who runs out of cards loses. A game that would
//! start a round from a state it has already started one from ends at once
//! with player 1 as the winner.
//!
//! Recursive Combat settles a round with a sub-game whenever both players
//! hold at least as many cards as the value they drew.
//!
//! ```
//! use crab_combat::core::{Deck, GameConfig, PlayerId, PlayerMap};
//! use crab_combat::games::combat;
//!
//! let decks = PlayerMap::from_pair(
//!     Deck::from_values([9, 2, 6, 3, 1]),
//!     Deck::from_values([5, 8, 4, 7, 10]),
//! );
//!
//! let result = combat::play(GameConfig::recursive(), decks).unwrap();
//! assert_eq!(result.winner, PlayerId::TWO);
//! assert_eq!(result.score(), 291);
//! ```

mod deal;
mod game;
mod stack;

pub use deal::deal;
pub use game::{CombatGame, Step};

use crate::core::{Deck, GameConfig, PlayerMap, Variant};
use crate::error::PlayResult;
use crate::rules::{ClassicRules, GameResult, RecursiveRules};

/// Play a complete game with the configured variant and evaluation.
pub fn play(config: GameConfig, decks: PlayerMap<Deck>) -> PlayResult<GameResult> {
    match config.variant {
        Variant::Classic => CombatGame::new(ClassicRules, decks).play_with(config.evaluation),
        Variant::Recursive => CombatGame::new(RecursiveRules, decks).play_with(config.evaluation),
    }
}
