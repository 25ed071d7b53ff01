//! End-to-end Combat tests: input files through to scores.

use crab_combat::core::{Deck, Evaluation, GameConfig, PlayerId, PlayerMap};
use crab_combat::games::combat::{self, deal, CombatGame, Step};
use crab_combat::rules::{ClassicRules, EndReason, RecursiveRules};
use crab_combat::{parse_decks, GameError};

const SAMPLE: &str = include_str!("data/sample.txt");
const LOOPING: &str = include_str!("data/loop.txt");

fn decks(one: &[u32], two: &[u32]) -> PlayerMap<Deck> {
    PlayerMap::from_pair(
        Deck::from_values(one.iter().copied()),
        Deck::from_values(two.iter().copied()),
    )
}

// =============================================================================
// Sample Games
// =============================================================================

#[test]
fn test_sample_classic() {
    let decks = parse_decks(SAMPLE).unwrap();
    let result = combat::play(GameConfig::classic(), decks).unwrap();

    assert_eq!(result.winner, PlayerId::TWO);
    assert_eq!(result.score(), 306);
}

#[test]
fn test_sample_recursive() {
    let decks = parse_decks(SAMPLE).unwrap();
    let result = combat::play(GameConfig::recursive(), decks).unwrap();

    assert_eq!(result.winner, PlayerId::TWO);
    assert_eq!(result.reason, EndReason::DeckExhausted);
    assert_eq!(result.score(), 291);
}

#[test]
fn test_sample_all_configurations_agree_per_variant() {
    for config in [GameConfig::classic(), GameConfig::recursive()] {
        let call = combat::play(config, parse_decks(SAMPLE).unwrap()).unwrap();
        let work = combat::play(
            config.with_evaluation(Evaluation::WorkStack),
            parse_decks(SAMPLE).unwrap(),
        )
        .unwrap();
        assert_eq!(call, work);
    }
}

// =============================================================================
// Loop Detection
// =============================================================================

#[test]
fn test_loop_input_terminates() {
    let decks = parse_decks(LOOPING).unwrap();
    let result = combat::play(GameConfig::recursive(), decks).unwrap();

    assert_eq!(result.winner, PlayerId::ONE);
    assert_eq!(result.reason, EndReason::LoopDetected);
    assert_eq!(result.rounds, 6);
    assert_eq!(result.deck.values(), vec![43, 19]);
}

#[test]
fn test_loop_history_grows_once_per_round() {
    let mut game = CombatGame::new(RecursiveRules, parse_decks(LOOPING).unwrap());

    for round in 1..=6 {
        assert_eq!(game.play_round(), Ok(None));
        assert_eq!(game.history().len(), round);
    }

    let result = game.play_round().unwrap().unwrap();
    assert_eq!(result.reason, EndReason::LoopDetected);
    // The repeated state is not recorded twice.
    assert_eq!(game.history().len(), 6);
}

// =============================================================================
// Sub-game Isolation
// =============================================================================

#[test]
fn test_parent_history_invisible_to_sub_game() {
    let start = decks(&[9, 2, 6, 3, 1], &[5, 8, 4, 7, 10]);
    let mut game = CombatGame::new(RecursiveRules, start.clone());
    game.play_round().unwrap();

    // A sub-game starting from a state the parent already recorded still
    // plays its first round.
    let mut sub = game.spawn(start);
    assert_eq!(sub.begin_round(), Ok(Step::Played));
    assert_eq!(sub.rounds(), 1);
}

#[test]
fn test_sub_game_history_invisible_to_parent() {
    let mut game = CombatGame::new(RecursiveRules, decks(&[2, 7, 3], &[1, 4]));

    let Step::SubGame { drawn, decks } = game.begin_round().unwrap() else {
        panic!("expected a sub-game");
    };
    let parent_decks = game.decks().clone();

    let mut sub = game.spawn(decks);
    let sub_result = sub.play().unwrap();
    assert!(!sub.history().is_empty());

    // Nothing the sub-game did touched the parent.
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.decks(), &parent_decks);

    game.finish_round(&drawn, &sub_result);
    assert_eq!(game.card_count(), 5);
    assert_eq!(game.sub_games(), 1 + sub_result.sub_games);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_identical_inputs_identical_results() {
    for seed in 0..5 {
        let first = combat::play(GameConfig::recursive(), deal(30, seed)).unwrap();
        let second = combat::play(GameConfig::recursive(), deal(30, seed)).unwrap();

        assert_eq!(first, second);
    }
}

#[test]
fn test_dealt_full_size_game() {
    let result = combat::play(GameConfig::recursive(), deal(50, 2020)).unwrap();

    assert!(result.winner == PlayerId::ONE || result.winner == PlayerId::TWO);
    if result.reason == EndReason::DeckExhausted {
        assert_eq!(result.deck.len(), 50);
    }
}

// =============================================================================
// Degenerate Input
// =============================================================================

#[test]
fn test_classic_rules_report_tie() {
    let mut game = CombatGame::new(ClassicRules, decks(&[3], &[3]));
    assert!(matches!(game.play(), Err(GameError::TiedRound { depth: 0, .. })));
}

#[test]
fn test_no_cards() {
    let result = combat::play(GameConfig::new(), decks(&[], &[]));
    assert_eq!(result, Err(GameError::NoCards));
}
