//! Combat game state machine.

use log::{debug, trace};

use crate::core::{Card, Deck, Evaluation, History, PlayerId, PlayerMap, RoundState};
use crate::error::{GameError, PlayResult};
use crate::rules::{EndReason, GameResult, RoundDecision, RulesEngine};

/// Outcome of starting a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The game was already over; no cards were drawn.
    Finished(GameResult),
    /// The round was played to completion.
    Played,
    /// The round needs a sub-game. Play it with these decks, then hand its
    /// result to `finish_round` together with `drawn`.
    SubGame {
        drawn: PlayerMap<Card>,
        decks: PlayerMap<Deck>,
    },
}

/// One game of Combat.
///
/// Owns both decks and the history of states this game has started rounds
/// from. Sub-games are separate `CombatGame`s with copied decks and an
/// empty history.
#[derive(Clone, Debug)]
pub struct CombatGame<R: RulesEngine> {
    rules: R,
    decks: PlayerMap<Deck>,
    history: History,
    /// 0 for the top-level game.
    depth: usize,
    rounds: u64,
    sub_games: u64,
}

impl<R: RulesEngine> CombatGame<R> {
    /// Create a top-level game.
    #[must_use]
    pub fn new(rules: R, decks: PlayerMap<Deck>) -> Self {
        Self::at_depth(rules, decks, 0)
    }

    fn at_depth(rules: R, decks: PlayerMap<Deck>, depth: usize) -> Self {
        Self {
            rules,
            decks,
            history: History::new(),
            depth,
            rounds: 0,
            sub_games: 0,
        }
    }

    /// Create a sub-game one level below this game.
    #[must_use]
    pub fn spawn(&self, decks: PlayerMap<Deck>) -> Self {
        trace!(
            "depth {}: sub-game [{}] vs [{}]",
            self.depth + 1,
            decks[PlayerId::ONE],
            decks[PlayerId::TWO]
        );
        Self::at_depth(self.rules.clone(), decks, self.depth + 1)
    }

    // === Accessors ===

    /// The rule set.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Both decks.
    #[must_use]
    pub fn decks(&self) -> &PlayerMap<Deck> {
        &self.decks
    }

    /// A player's deck.
    #[must_use]
    pub fn deck(&self, player: PlayerId) -> &Deck {
        &self.decks[player]
    }

    /// Nesting depth (0 for the top-level game).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Rounds played so far.
    #[must_use]
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Sub-games played so far, transitively.
    #[must_use]
    pub fn sub_games(&self) -> u64 {
        self.sub_games
    }

    /// Round states recorded for loop detection.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Total cards held by both players.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.decks.values().map(Deck::len).sum()
    }

    // === Playing ===

    /// Play until the game ends.
    ///
    /// Sub-games are evaluated according to `evaluation`; the result is the
    /// same either way.
    pub fn play_with(&mut self, evaluation: Evaluation) -> PlayResult<GameResult> {
        match evaluation {
            Evaluation::CallStack => self.play(),
            Evaluation::WorkStack => self.play_on_work_stack(),
        }
    }

    /// Play until the game ends, evaluating sub-games by recursion.
    pub fn play(&mut self) -> PlayResult<GameResult> {
        loop {
            if let Some(result) = self.play_round()? {
                return Ok(result);
            }
        }
    }

    /// Play one round, including any sub-game it needs.
    ///
    /// Returns `Some` when the game is over; in that case no round was
    /// played, so the call after the final round is the one that reports
    /// the result. If a sub-game fails, this game is left mid-round with the
    /// drawn cards out of both decks.
    pub fn play_round(&mut self) -> PlayResult<Option<GameResult>> {
        match self.begin_round()? {
            Step::Finished(result) => Ok(Some(result)),
            Step::Played => Ok(None),
            Step::SubGame { drawn, decks } => {
                let result = self.spawn(decks).play()?;
                self.finish_round(&drawn, &result);
                Ok(None)
            }
        }
    }

    /// Start a round.
    ///
    /// Checks for an empty deck, then for a repeated state, and only then
    /// draws. If the rules settle the round directly it is completed here;
    /// otherwise the caller must play the sub-game and call `finish_round`.
    ///
    /// On error the game is left as it was: no cards are drawn, no round is
    /// counted and the state is not recorded.
    pub fn begin_round(&mut self) -> PlayResult<Step> {
        if let Some(winner) = self.exhausted_winner()? {
            return Ok(Step::Finished(self.finish(winner, EndReason::DeckExhausted)));
        }

        let state = RoundState::capture(&self.decks);
        if self.history.contains(&state) {
            if self.depth == 0 {
                debug!("state repeated before round {}; player 1 wins", self.rounds + 1);
            } else {
                trace!("depth {}: state repeated; player 1 wins", self.depth);
            }
            return Ok(Step::Finished(self.finish(PlayerId::ONE, EndReason::LoopDetected)));
        }

        let mut remaining = self.decks.clone();
        let (Some(one), Some(two)) = (
            remaining[PlayerId::ONE].draw(),
            remaining[PlayerId::TWO].draw(),
        ) else {
            unreachable!("both decks were checked non-empty");
        };
        let drawn = PlayerMap::from_pair(one, two);

        let depth = self.depth;
        let decision = self
            .rules
            .decide_round(&drawn, &remaining)
            .map_err(|err| match err {
                GameError::TiedRound { card, .. } => GameError::TiedRound { card, depth },
                other => other,
            })?;

        self.history.record(state);
        self.decks = remaining;
        self.rounds += 1;

        match decision {
            RoundDecision::Winner(winner) => {
                trace!(
                    "depth {} round {}: {} vs {}, {} wins",
                    self.depth,
                    self.rounds,
                    one,
                    two,
                    winner
                );
                self.award(winner, &drawn);
                Ok(Step::Played)
            }
            RoundDecision::SubGame(decks) => Ok(Step::SubGame { drawn, decks }),
        }
    }

    /// Complete a round that was settled by a sub-game.
    pub fn finish_round(&mut self, drawn: &PlayerMap<Card>, sub_game: &GameResult) {
        self.sub_games += 1 + sub_game.sub_games;
        trace!(
            "depth {} round {}: sub-game won by {}",
            self.depth,
            self.rounds,
            sub_game.winner
        );
        self.award(sub_game.winner, drawn);
    }

    fn award(&mut self, winner: PlayerId, drawn: &PlayerMap<Card>) {
        self.decks[winner].place_winnings(drawn[winner], drawn[winner.opponent()]);
    }

    fn exhausted_winner(&self) -> PlayResult<Option<PlayerId>> {
        match (
            self.decks[PlayerId::ONE].is_empty(),
            self.decks[PlayerId::TWO].is_empty(),
        ) {
            (true, true) => Err(GameError::NoCards),
            (true, false) => Ok(Some(PlayerId::TWO)),
            (false, true) => Ok(Some(PlayerId::ONE)),
            (false, false) => Ok(None),
        }
    }

    fn finish(&self, winner: PlayerId, reason: EndReason) -> GameResult {
        if self.depth == 0 {
            debug!(
                "{} won {} after {} rounds and {} sub-games ({:?})",
                winner,
                self.rules.variant().name(),
                self.rounds,
                self.sub_games,
                reason
            );
        }
        GameResult {
            winner,
            deck: self.decks[winner].clone(),
            reason,
            rounds: self.rounds,
            sub_games: self.sub_games,
        }
    }
}
