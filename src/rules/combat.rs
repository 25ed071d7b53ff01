//! The two Combat rule sets.

use crate::core::{Card, Deck, PlayerId, PlayerMap, Variant};
use crate::error::PlayResult;

use super::engine::{higher_card, RoundDecision, RulesEngine};

/// Plain Combat: the higher card always takes the round.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassicRules;

impl RulesEngine for ClassicRules {
    fn variant(&self) -> Variant {
        Variant::Classic
    }

    fn decide_round(
        &self,
        drawn: &PlayerMap<Card>,
        _remaining: &PlayerMap<Deck>,
    ) -> PlayResult<RoundDecision> {
        higher_card(drawn).map(RoundDecision::Winner)
    }
}

/// Recursive Combat.
///
/// If every player still holds at least as many cards as the value they
/// just drew, the round is settled by a sub-game over that many cards from
/// the top of each deck. Otherwise the higher card wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecursiveRules;

impl RecursiveRules {
    /// Can this round recurse?
    #[must_use]
    pub fn should_recurse(drawn: &PlayerMap<Card>, remaining: &PlayerMap<Deck>) -> bool {
        PlayerId::all().all(|p| remaining[p].len() >= drawn[p].as_count())
    }
}

impl RulesEngine for RecursiveRules {
    fn variant(&self) -> Variant {
        Variant::Recursive
    }

    fn decide_round(
        &self,
        drawn: &PlayerMap<Card>,
        remaining: &PlayerMap<Deck>,
    ) -> PlayResult<RoundDecision> {
        if Self::should_recurse(drawn, remaining) {
            let decks = remaining.map(|p, deck| deck.copy_top(drawn[p].as_count()));
            Ok(RoundDecision::SubGame(decks))
        } else {
            higher_card(drawn).map(RoundDecision::Winner)
        }
    }
}
