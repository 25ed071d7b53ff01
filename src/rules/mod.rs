//! Rules engine trait for the Combat variants.
//!
//! Rule sets implement `RulesEngine` to define:
//! - Who takes a round
//! - When a round is settled by a sub-game instead
//!
//! The game state machine calls into `RulesEngine` but never compares
//! cards itself.

pub mod engine;
pub mod combat;

pub use engine::{higher_card, EndReason, GameResult, RoundDecision, RulesEngine};
pub use combat::{ClassicRules, RecursiveRules};
