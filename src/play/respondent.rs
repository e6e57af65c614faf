//! Respondents: whoever answers the engine's questions.
//!
//! A human at a console is one respondent; simulated players are others.
//! The session driver only talks to this trait.

use crate::catalog::{Catalog, Character, CharacterId, Question};
use crate::core::SessionRng;

/// Reply to a guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    /// Whether the guess was right.
    pub correct: bool,
    /// The actual character, if the respondent reveals it.
    pub actual: Option<CharacterId>,
}

impl Confirmation {
    /// The guess was right.
    #[must_use]
    pub fn correct() -> Self {
        Self {
            correct: true,
            actual: None,
        }
    }

    /// The guess was wrong; optionally reveal the actual character.
    #[must_use]
    pub fn wrong(actual: Option<CharacterId>) -> Self {
        Self {
            correct: false,
            actual,
        }
    }
}

/// Something that answers questions and judges guesses.
pub trait Respondent {
    /// Answer a yes/no question.
    fn answer(&mut self, catalog: &Catalog, question: &Question) -> bool;

    /// Judge the engine's guess.
    fn confirm(&mut self, catalog: &Catalog, guess: &Character) -> Confirmation;
}

/// Truthful respondent thinking of a known character.
#[derive(Clone, Debug)]
pub struct OracleRespondent {
    secret: CharacterId,
}

impl OracleRespondent {
    /// Think of `secret`.
    #[must_use]
    pub fn new(secret: CharacterId) -> Self {
        Self { secret }
    }

    /// The character being thought of.
    #[must_use]
    pub fn secret(&self) -> &CharacterId {
        &self.secret
    }
}

impl Respondent for OracleRespondent {
    fn answer(&mut self, catalog: &Catalog, question: &Question) -> bool {
        catalog.evaluate_id(question, &self.secret)
    }

    fn confirm(&mut self, _catalog: &Catalog, guess: &Character) -> Confirmation {
        if guess.id == self.secret {
            Confirmation::correct()
        } else {
            Confirmation::wrong(Some(self.secret.clone()))
        }
    }
}

/// Respondent that sometimes answers wrongly.
///
/// Each answer is flipped with probability `noise`. Guess confirmation stays
/// truthful.
#[derive(Clone, Debug)]
pub struct NoisyRespondent {
    oracle: OracleRespondent,
    noise: f64,
    rng: SessionRng,
}

impl NoisyRespondent {
    /// Think of `secret`, lying with probability `noise`.
    #[must_use]
    pub fn new(secret: CharacterId, noise: f64, rng: SessionRng) -> Self {
        Self {
            oracle: OracleRespondent::new(secret),
            noise,
            rng,
        }
    }
}

impl Respondent for NoisyRespondent {
    fn answer(&mut self, catalog: &Catalog, question: &Question) -> bool {
        let truth = self.oracle.answer(catalog, question);
        if self.rng.gen_bool(self.noise) {
            !truth
        } else {
            truth
        }
    }

    fn confirm(&mut self, catalog: &Catalog, guess: &Character) -> Confirmation {
        self.oracle.confirm(catalog, guess)
    }
}
