//! # crab-combat
//!
//! A game engine for the two-player card game Combat and its recursive
//! variant.
//!
//! ## Design Principles
//!
//! 1. **One State Machine**: Both variants share the same round loop.
//!    Only the `RulesEngine` that decides each round differs.
//!
//! 2. **Always Terminates**: A game that would start a round from a state
//!    it has already started one from ends immediately, player 1 winning.
//!
//! 3. **Isolated Sub-games**: A sub-game gets copies of the cards it plays
//!    with and its own history. Nothing it does is visible to its parent
//!    except who won.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Decks are `im::Vector`s, so the
//!   per-round history snapshot and sub-game decks are O(1) copies.
//!
//! - **Hashed History**: Loop detection is a hash-set lookup, not a scan
//!   of every prior round.
//!
//! ## Modules
//!
//! - `core`: Players, cards, decks, round state, configuration, RNG
//! - `rules`: RulesEngine trait, Combat rule sets, game results
//! - `games`: The Combat state machine and dealing
//! - `input`: The two-deck text format
//! - `error`: Parse and game errors

pub mod core;
pub mod rules;
pub mod games;
pub mod input;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    Card, Deck,
    RoundState, History,
    Variant, Evaluation, GameConfig,
    GameRng,
};

pub use crate::rules::{
    RulesEngine, RoundDecision, GameResult, EndReason,
    ClassicRules, RecursiveRules,
};

pub use crate::games::combat::{CombatGame, Step};

pub use crate::input::{parse_decks, format_decks};

pub use crate::error::{GameError, InvalidPlayer, ParseError, PlayResult, ParseResult};
