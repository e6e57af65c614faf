//! Driving one game from start to finish.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::CharacterId;
use crate::engine::{AnsweredQuestion, GuessingEngine, Phase};

use super::respondent::Respondent;

/// Outcome of one played game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// `Won` or `Lost`.
    pub outcome: Phase,
    /// The engine's guess, if it made one.
    pub guessed: Option<CharacterId>,
    /// The confirmed character, if known.
    pub correct: Option<CharacterId>,
    /// Every question asked, in order.
    pub history: Vec<AnsweredQuestion>,
}

impl SessionRecord {
    /// Whether the engine guessed right.
    #[must_use]
    pub fn won(&self) -> bool {
        self.outcome == Phase::Won
    }

    /// Whether the candidates ran out before any guess.
    #[must_use]
    pub fn exhausted(&self) -> bool {
        self.outcome == Phase::Lost && self.guessed.is_none()
    }

    /// Number of questions asked.
    #[must_use]
    pub fn questions_asked(&self) -> usize {
        self.history.len()
    }
}

/// Play a full game against a respondent.
///
/// Starts a fresh game (discarding any game in progress), asks questions
/// until the engine guesses or gives up, then has the respondent judge the
/// guess. Leaves the engine in `Won` or `Lost`.
pub fn play_session<R>(engine: &mut GuessingEngine, respondent: &mut R) -> SessionRecord
where
    R: Respondent + ?Sized,
{
    let catalog = Arc::clone(engine.catalog());
    engine.start_game();

    while engine.phase() == Phase::Playing {
        let answer = match engine.current_question() {
            Some(question) => respondent.answer(&catalog, question),
            None => {
                engine.force_guess();
                break;
            }
        };
        engine.answer_question(answer);
    }

    if engine.phase() == Phase::Guessing {
        if let Some(guess) = engine.guessed_character() {
            let confirmation = respondent.confirm(&catalog, guess);
            engine.confirm_guess(confirmation.correct, confirmation.actual);
        }
    }

    let state = engine.state();
    debug!(
        outcome = %state.phase,
        asked = state.history.len(),
        "session finished"
    );

    SessionRecord {
        outcome: state.phase,
        guessed: state.guessed.clone(),
        correct: state.correct.clone(),
        history: state.history.iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Character, Field, Question};
    use crate::play::OracleRespondent;

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::builder()
                .character(Character::new("a", "A", Field::Science).with_attr("x", true))
                .character(Character::new("b", "B", Field::Science))
                .character(Character::new("c", "C", Field::Arts))
                .question(Question::attribute("science", "Science?", "field", "science"))
                .question(Question::attribute("x", "X?", "x", true))
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_oracle_session_wins() {
        let mut engine = GuessingEngine::new(catalog());
        for secret in ["a", "b", "c"] {
            let mut oracle = OracleRespondent::new(secret.into());
            let record = play_session(&mut engine, &mut oracle);

            assert!(record.won(), "lost with secret {secret}");
            assert_eq!(record.correct.as_ref().map(|c| c.as_str()), Some(secret));
            assert_eq!(engine.phase(), Phase::Won);
        }
    }

    #[test]
    fn test_session_without_questions_forces_guess() {
        let catalog = Arc::new(
            Catalog::builder()
                .character(Character::new("a", "A", Field::Science))
                .character(Character::new("b", "B", Field::Arts))
                .build()
                .unwrap(),
        );
        let mut engine = GuessingEngine::new(catalog);
        let mut oracle = OracleRespondent::new("b".into());

        let record = play_session(&mut engine, &mut oracle);
        assert_eq!(record.outcome, Phase::Lost);
        assert_eq!(record.guessed.as_ref().map(|c| c.as_str()), Some("a"));
        assert_eq!(record.correct.as_ref().map(|c| c.as_str()), Some("b"));
        assert_eq!(record.questions_asked(), 0);
        assert!(!record.exhausted());
    }
}
