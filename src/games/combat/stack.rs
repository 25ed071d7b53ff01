//! Sub-game evaluation on an explicit stack.
//!
//! `CombatGame::play` nests one call per sub-game level. For very large
//! decks that can exhaust the thread stack, so this evaluator keeps the
//! suspended games in a `Vec` instead. It drives the same `begin_round` /
//! `finish_round` state machine, so results are identical.

use crate::core::{Card, PlayerMap};
use crate::error::PlayResult;
use crate::rules::{GameResult, RulesEngine};

use super::game::{CombatGame, Step};

/// A sub-game in progress, plus the cards its parent drew for the round
/// that the sub-game is settling.
struct Frame<R: RulesEngine> {
    game: CombatGame<R>,
    parent_drawn: PlayerMap<Card>,
}

impl<R: RulesEngine> CombatGame<R> {
    /// Play until the game ends, keeping sub-games on a heap-allocated
    /// stack rather than the call stack.
    pub fn play_on_work_stack(&mut self) -> PlayResult<GameResult> {
        let mut frames: Vec<Frame<R>> = Vec::new();

        loop {
            let active = frames.last_mut().map_or(&mut *self, |f| &mut f.game);

            match active.begin_round()? {
                Step::Played => {}
                Step::SubGame { drawn, decks } => {
                    let game = active.spawn(decks);
                    frames.push(Frame {
                        game,
                        parent_drawn: drawn,
                    });
                }
                Step::Finished(result) => {
                    let Some(finished) = frames.pop() else {
                        return Ok(result);
                    };
                    let parent = frames.last_mut().map_or(&mut *self, |f| &mut f.game);
                    parent.finish_round(&finished.parent_drawn, &result);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Deck, PlayerId};
    use crate::rules::{ClassicRules, EndReason, RecursiveRules};

    fn decks(one: &[u32], two: &[u32]) -> PlayerMap<Deck> {
        PlayerMap::from_pair(
            Deck::from_values(one.iter().copied()),
            Deck::from_values(two.iter().copied()),
        )
    }

    #[test]
    fn test_recursive_sample() {
        let mut game = CombatGame::new(RecursiveRules, decks(&[9, 2, 6, 3, 1], &[5, 8, 4, 7, 10]));
        let result = game.play_on_work_stack().unwrap();

        assert_eq!(result.winner, PlayerId::TWO);
        assert_eq!(result.score(), 291);
        assert_eq!(result.rounds, 17);
        assert_eq!(result.sub_games, 4);
    }

    #[test]
    fn test_classic_never_pushes() {
        let mut game = CombatGame::new(ClassicRules, decks(&[9, 2, 6, 3, 1], &[5, 8, 4, 7, 10]));
        let result = game.play_on_work_stack().unwrap();

        assert_eq!(result.score(), 306);
        assert_eq!(result.sub_games, 0);
    }

    #[test]
    fn test_loop_rule() {
        let mut game = CombatGame::new(RecursiveRules, decks(&[43, 19], &[2, 29, 14]));
        let result = game.play_on_work_stack().unwrap();

        assert_eq!(result.winner, PlayerId::ONE);
        assert_eq!(result.reason, EndReason::LoopDetected);
        assert_eq!(result.rounds, 6);
    }

    #[test]
    fn test_root_state_updated_in_place() {
        let mut game = CombatGame::new(RecursiveRules, decks(&[9, 2, 6, 3, 1], &[5, 8, 4, 7, 10]));
        let result = game.play_on_work_stack().unwrap();

        assert_eq!(game.deck(PlayerId::TWO), &result.deck);
        assert!(game.deck(PlayerId::ONE).is_empty());
        assert_eq!(game.sub_games(), 4);
    }
}
