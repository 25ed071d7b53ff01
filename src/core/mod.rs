//! Core types: players, cards, decks, round state, configuration, RNG.
//!
//! These are shared by both rule sets. Rules decide rounds; everything
//! else about a Combat game lives here.

pub mod player;
pub mod card;
pub mod deck;
pub mod state;
pub mod config;
pub mod rng;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use card::Card;
pub use deck::Deck;
pub use state::{RoundState, History};
pub use config::{Variant, Evaluation, GameConfig};
pub use rng::GameRng;
