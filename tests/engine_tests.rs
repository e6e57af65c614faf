//! Engine state machine integration tests.

use std::sync::Arc;

use stem_guess::catalog::{Catalog, Character, CharacterId, Field, Question};
use stem_guess::core::EngineConfig;
use stem_guess::engine::{GuessingEngine, Phase};

fn ids<'a>(engine: &'a GuessingEngine) -> Vec<&'a str> {
    engine.remaining_characters().map(|c| c.id.as_str()).collect()
}

/// Four characters; "quarter" splits 1/3 and "half" splits 2/2.
fn four_catalog() -> Arc<Catalog> {
    Arc::new(
        Catalog::builder()
            .character(Character::new("a", "A", Field::Science).with_attr("q", true).with_attr("h", true))
            .character(Character::new("b", "B", Field::Science).with_attr("h", true))
            .character(Character::new("c", "C", Field::Arts))
            .character(Character::new("d", "D", Field::Arts))
            .question(Question::attribute("quarter", "Quarter?", "q", true))
            .question(Question::attribute("half", "Half?", "h", true))
            .build()
            .unwrap(),
    )
}

/// Two leading characters nobody can tell apart, then `solos` characters
/// that each answer "yes" to exactly one question.
fn long_catalog(solos: usize) -> Arc<Catalog> {
    let mut builder = Catalog::builder()
        .character(Character::new("twin-a", "Twin A", Field::Science))
        .character(Character::new("twin-b", "Twin B", Field::Science));
    for i in 0..solos {
        let key = format!("k{i}");
        builder = builder
            .character(Character::new(format!("solo-{i}"), format!("Solo {i}"), Field::Arts).with_attr(key.as_str(), true))
            .question(Question::attribute(format!("q{i}"), format!("Question {i}?"), key.as_str(), true));
    }
    Arc::new(builder.build().unwrap())
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn test_even_split_beats_earlier_question() {
    let mut engine = GuessingEngine::new(four_catalog());
    engine.start_game();

    let question = engine.current_question().unwrap();
    assert_eq!(question.id.as_str(), "half");
}

#[test]
fn test_builtin_first_question() {
    let mut engine = GuessingEngine::new(Arc::new(Catalog::builtin().unwrap()));
    engine.start_game();

    assert_eq!(engine.current_question().unwrap().id.as_str(), "is-woman");
    assert_eq!(engine.question_index(), 1);
    assert_eq!(engine.remaining_count(), 18);
}

// =============================================================================
// Decision Policy
// =============================================================================

#[test]
fn test_single_candidate_goes_to_guessing() {
    let mut engine = GuessingEngine::new(four_catalog());
    engine.start_game();

    // half: yes -> {a, b}
    assert_eq!(engine.answer_question(true), Some(Phase::Playing));
    assert_eq!(ids(&engine), vec!["a", "b"]);

    // quarter: no -> {b}
    assert_eq!(engine.current_question().unwrap().id.as_str(), "quarter");
    assert_eq!(engine.answer_question(false), Some(Phase::Guessing));
    assert_eq!(engine.guessed_character().unwrap().id.as_str(), "b");
    assert!(engine.current_question().is_none());
}

#[test]
fn test_empty_candidates_lose_without_guess() {
    // Nobody has "x", so the only question is a last-resort pick
    let catalog = Arc::new(
        Catalog::builder()
            .character(Character::new("a", "A", Field::Science))
            .character(Character::new("b", "B", Field::Science))
            .question(Question::attribute("x", "X?", "x", true))
            .build()
            .unwrap(),
    );
    let mut engine = GuessingEngine::new(catalog);
    engine.start_game();

    assert_eq!(engine.current_question().unwrap().id.as_str(), "x");
    assert_eq!(engine.answer_question(true), Some(Phase::Lost));
    assert_eq!(engine.remaining_count(), 0);
    assert!(engine.guessed_character().is_none());
    assert!(engine.state().guessed.is_none());
}

#[test]
fn test_question_limit_forces_first_remaining() {
    let mut engine = GuessingEngine::new(long_catalog(12));
    engine.start_game();

    for i in 0..10 {
        assert_eq!(engine.phase(), Phase::Playing, "ended early at {i}");
        assert_eq!(engine.current_question().unwrap().id.as_str(), format!("q{i}"));
        engine.answer_question(false);
    }

    // Questions q10 and q11 would still split the candidates
    assert_eq!(engine.phase(), Phase::Guessing);
    assert_eq!(engine.state().questions_asked(), 10);
    assert_eq!(ids(&engine), vec!["twin-a", "twin-b", "solo-10", "solo-11"]);
    assert_eq!(engine.guessed_character().unwrap().id.as_str(), "twin-a");
}

#[test]
fn test_custom_question_limit() {
    let config = EngineConfig::new().with_max_questions(3);
    let mut engine = GuessingEngine::with_config(long_catalog(12), config);
    engine.start_game();

    for _ in 0..3 {
        engine.answer_question(false);
    }

    assert_eq!(engine.phase(), Phase::Guessing);
    assert_eq!(engine.state().questions_asked(), 3);
    assert_eq!(engine.remaining_count(), 11);
}

#[test]
fn test_out_of_questions_forces_guess() {
    let mut engine = GuessingEngine::new(long_catalog(3));
    engine.start_game();

    for _ in 0..3 {
        engine.answer_question(false);
    }

    assert_eq!(engine.phase(), Phase::Guessing);
    assert_eq!(ids(&engine), vec!["twin-a", "twin-b"]);
    assert_eq!(engine.guessed_character().unwrap().id.as_str(), "twin-a");
}

// =============================================================================
// Confirmation
// =============================================================================

#[test]
fn test_confirm_correct_wins() {
    let mut engine = GuessingEngine::new(four_catalog());
    engine.start_game();
    engine.answer_question(true);
    engine.answer_question(false);

    assert_eq!(engine.confirm_guess(true, None), Some(Phase::Won));
    assert_eq!(engine.correct_character().unwrap().id.as_str(), "b");
    assert!(engine.phase().is_over());
}

#[test]
fn test_confirm_wrong_records_actual() {
    let mut engine = GuessingEngine::new(four_catalog());
    engine.start_game();
    engine.answer_question(true);
    engine.answer_question(false);

    assert_eq!(
        engine.confirm_guess(false, Some(CharacterId::new("d"))),
        Some(Phase::Lost)
    );
    assert_eq!(engine.correct_character().unwrap().id.as_str(), "d");
    assert_eq!(engine.guessed_character().unwrap().id.as_str(), "b");
}

#[test]
fn test_confirm_wrong_without_actual() {
    let mut engine = GuessingEngine::new(four_catalog());
    engine.start_game();
    // half: no -> {c, d}; "quarter" can't split them, answering no keeps both
    engine.answer_question(false);
    engine.answer_question(false);

    assert_eq!(engine.phase(), Phase::Guessing);
    assert_eq!(engine.guessed_character().unwrap().id.as_str(), "c");
    assert_eq!(engine.confirm_guess(false, None), Some(Phase::Lost));
    assert!(engine.correct_character().is_none());
}

#[test]
fn test_answer_ignored_after_game_over() {
    let mut engine = GuessingEngine::new(four_catalog());
    engine.start_game();
    engine.answer_question(true);
    engine.answer_question(false);
    engine.confirm_guess(true, None);

    let before = engine.state().clone();
    assert_eq!(engine.answer_question(true), None);
    assert_eq!(engine.confirm_guess(false, None), None);
    assert_eq!(engine.state(), &before);
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_matches_fresh_engine() {
    let catalog = four_catalog();
    let fresh = GuessingEngine::new(Arc::clone(&catalog));

    let mut engine = GuessingEngine::new(catalog);
    engine.start_game();
    engine.answer_question(true);
    engine.answer_question(false);
    engine.confirm_guess(true, None);
    engine.reset_game();

    assert_eq!(engine.state(), fresh.state());

    let mut fresh = fresh;
    fresh.start_game();
    engine.start_game();
    assert_eq!(engine.state(), fresh.state());
    assert_eq!(engine.remaining_count(), 4);
    assert_eq!(engine.answered_questions().count(), 0);
}

#[test]
fn test_start_game_mid_game_restarts() {
    let mut engine = GuessingEngine::new(four_catalog());
    engine.start_game();
    engine.answer_question(true);
    assert_eq!(engine.remaining_count(), 2);

    engine.start_game();
    assert_eq!(engine.phase(), Phase::Playing);
    assert_eq!(engine.remaining_count(), 4);
    assert_eq!(engine.question_index(), 1);
}
