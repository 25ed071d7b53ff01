//! Error types for reading decks and playing games.

use thiserror::Error;

use crate::core::Card;

/// Errors that can occur while reading the two-deck text format.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A section did not start with a `Player N:` header.
    #[error("line {line}: expected a `Player N:` header, found {found:?}")]
    MissingHeader { line: usize, found: String },

    /// A header named a player out of sequence.
    #[error("line {line}: expected header for player {expected}, found {found:?}")]
    UnexpectedPlayer {
        line: usize,
        expected: u32,
        found: String,
    },

    /// A card line was not an integer.
    #[error("line {line}: invalid card value {found:?}")]
    InvalidCard { line: usize, found: String },

    /// Card values are positive.
    #[error("line {line}: card value must be positive")]
    ZeroCard { line: usize },

    /// A player section had a header but no cards.
    #[error("player {player} has an empty deck")]
    EmptyDeck { player: u32 },

    /// The input did not contain exactly two sections.
    #[error("expected 2 player sections, found {found}")]
    PlayerCount { found: usize },
}

/// Errors that can occur while playing a game.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Both decks were empty before the first round.
    #[error("both decks are empty")]
    NoCards,

    /// Both players drew the same value and the round has no winner.
    #[error("both players drew {card} at depth {depth}; tied rounds have no winner")]
    TiedRound { card: Card, depth: usize },
}

/// A player number other than 1 or 2.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("invalid player number {0}; expected 1 or 2")]
pub struct InvalidPlayer(pub u8);

/// Result type for parsing operations.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type for game operations.
pub type PlayResult<T> = std::result::Result<T, GameError>;
