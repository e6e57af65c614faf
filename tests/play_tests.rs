//! Simulated play against the built-in catalog.

use std::sync::Arc;

use stem_guess::catalog::{Catalog, CharacterId};
use stem_guess::core::{EngineConfig, SessionRng};
use stem_guess::engine::{GuessingEngine, Phase};
use stem_guess::play::{
    evaluate_all, evaluate_random, play_session, EvaluationConfig, NoisyRespondent,
    OracleRespondent,
};

fn builtin() -> Arc<Catalog> {
    Arc::new(Catalog::builtin().unwrap())
}

// =============================================================================
// Truthful Play
// =============================================================================

#[test]
fn test_builtin_every_character_guessed() {
    let stats = evaluate_all(&builtin(), &EngineConfig::default());

    assert_eq!(stats.games, 18);
    assert_eq!(stats.wins, 18, "missed: {:?}", stats.missed);
    assert_eq!(stats.exhausted, 0);
    assert!(stats.max_questions <= 5, "took {} questions", stats.max_questions);
}

#[test]
fn test_einstein_session() {
    let mut engine = GuessingEngine::new(builtin());
    let mut oracle = OracleRespondent::new(CharacterId::new("albert-einstein"));

    let record = play_session(&mut engine, &mut oracle);

    assert!(record.won());
    assert_eq!(record.history[0].question.as_str(), "is-woman");
    assert!(!record.history[0].answer);
    assert_eq!(record.questions_asked(), 3);
    assert_eq!(engine.correct_character().unwrap().name, "Albert Einstein");
}

#[test]
fn test_history_never_repeats() {
    let catalog = builtin();
    let mut engine = GuessingEngine::new(Arc::clone(&catalog));

    for secret in catalog.character_ids() {
        let mut oracle = OracleRespondent::new(secret.clone());
        let record = play_session(&mut engine, &mut oracle);

        let mut asked: Vec<_> = record.history.iter().map(|a| a.question.clone()).collect();
        asked.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        asked.dedup();
        assert_eq!(asked.len(), record.questions_asked(), "repeat for {secret}");
    }
}

// =============================================================================
// Noisy Play
// =============================================================================

#[test]
fn test_random_evaluation_is_deterministic() {
    let catalog = builtin();
    let config = EngineConfig::default();
    let evaluation = EvaluationConfig::new().with_games(40).with_seed(7).with_noise(0.2);

    let first = evaluate_random(&catalog, &config, &evaluation);
    let second = evaluate_random(&catalog, &config, &evaluation);

    assert_eq!(first, second);
    assert_eq!(first.games, 40);
    assert_eq!(first.wins + first.losses, 40);
}

#[test]
fn test_truthful_random_evaluation_always_wins() {
    let evaluation = EvaluationConfig::new().with_games(25).with_seed(3);
    let stats = evaluate_random(&builtin(), &EngineConfig::default(), &evaluation);

    assert_eq!(stats.wins, 25);
    assert!((stats.win_rate() - 1.0).abs() < 1e-9);
}

#[test]
fn test_noisy_games_terminate() {
    let catalog = builtin();
    let mut engine = GuessingEngine::new(Arc::clone(&catalog));
    let mut rng = SessionRng::new(11);

    for secret in catalog.character_ids() {
        let mut respondent = NoisyRespondent::new(secret.clone(), 0.5, rng.fork());
        let record = play_session(&mut engine, &mut respondent);

        assert!(record.outcome.is_over());
        assert!(record.questions_asked() <= 10);
        assert!(matches!(engine.phase(), Phase::Won | Phase::Lost));
    }
}
