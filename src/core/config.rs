//! Game configuration types.
//!
//! Callers configure a game by providing:
//! - `Variant`: which rule set decides rounds
//! - `Evaluation`: how sub-games are scheduled
//! - `GameConfig`: combines both
//!
//! Neither setting changes which player wins; `Evaluation` only changes
//! where sub-game state lives while it is suspended.

use serde::{Deserialize, Serialize};

/// Rule set used to decide each round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Higher card always wins the round.
    Classic,
    /// Rounds recurse into a sub-game when both players hold enough cards.
    #[default]
    Recursive,
}

impl Variant {
    /// Human-readable name (for logging/display).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Classic => "Combat",
            Variant::Recursive => "Recursive Combat",
        }
    }
}

/// How sub-games are evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Evaluation {
    /// Each sub-game is a nested call; depth is limited by the call stack.
    #[default]
    CallStack,
    /// Suspended games are kept on a heap-allocated stack.
    WorkStack,
}

/// Complete game configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rule set.
    pub variant: Variant,

    /// Sub-game scheduling.
    pub evaluation: Evaluation,
}

impl GameConfig {
    /// Create a configuration with default settings
    /// (Recursive Combat, call-stack evaluation).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain Combat.
    #[must_use]
    pub fn classic() -> Self {
        Self::new().with_variant(Variant::Classic)
    }

    /// Recursive Combat.
    #[must_use]
    pub fn recursive() -> Self {
        Self::new().with_variant(Variant::Recursive)
    }

    /// Set the rule set.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the sub-game scheduling.
    #[must_use]
    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.variant, Variant::Recursive);
        assert_eq!(config.evaluation, Evaluation::CallStack);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::classic().with_evaluation(Evaluation::WorkStack);
        assert_eq!(config.variant, Variant::Classic);
        assert_eq!(config.evaluation, Evaluation::WorkStack);
        assert_eq!(config.variant.name(), "Combat");
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::recursive().with_evaluation(Evaluation::WorkStack);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"variant":"recursive","evaluation":"work-stack"}"#);

        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
