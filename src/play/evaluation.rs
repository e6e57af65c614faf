//! Measuring how well the engine guesses.
//!
//! Plays simulated games against the catalog and aggregates the results.
//! Useful for checking that a catalog's questions can tell every character
//! apart within the question limit.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{Catalog, CharacterId};
use crate::core::{EngineConfig, SessionRng};
use crate::engine::GuessingEngine;

use super::respondent::{NoisyRespondent, OracleRespondent};
use super::session::{play_session, SessionRecord};

/// Configuration for random-secret evaluation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Number of games to play.
    pub games: usize,

    /// Seed for choosing secrets and lies.
    pub seed: u64,

    /// Probability that a respondent flips an answer (0 = always truthful).
    pub noise: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: 42,
            noise: 0.0,
        }
    }
}

impl EvaluationConfig {
    /// Create the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the answer noise.
    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }
}

/// Aggregated results over many games.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationStats {
    /// Games played.
    pub games: usize,

    /// Games where the guess was confirmed.
    pub wins: usize,

    /// Games lost (wrong guess or exhausted).
    pub losses: usize,

    /// Losses where no candidate was left to guess.
    pub exhausted: usize,

    /// Sum of questions asked over all games.
    pub total_questions: usize,

    /// Most questions asked in one game.
    pub max_questions: usize,

    /// Secrets the engine failed to guess, in play order.
    pub missed: Vec<CharacterId>,
}

impl EvaluationStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one game.
    pub fn record(&mut self, secret: &CharacterId, session: &SessionRecord) {
        self.games += 1;
        if session.won() {
            self.wins += 1;
        } else {
            self.losses += 1;
            self.missed.push(secret.clone());
        }
        if session.exhausted() {
            self.exhausted += 1;
        }
        self.total_questions += session.questions_asked();
        self.max_questions = self.max_questions.max(session.questions_asked());
    }

    /// Fraction of games won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Mean questions asked per game.
    #[must_use]
    pub fn mean_questions(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_questions as f64 / self.games as f64
        }
    }
}

/// Play one truthful game per catalog character.
pub fn evaluate_all(catalog: &Arc<Catalog>, config: &EngineConfig) -> EvaluationStats {
    let mut engine = GuessingEngine::with_config(Arc::clone(catalog), config.clone());
    let mut stats = EvaluationStats::new();

    for secret in catalog.character_ids() {
        let mut oracle = OracleRespondent::new(secret.clone());
        let session = play_session(&mut engine, &mut oracle);
        stats.record(secret, &session);
    }

    info!(
        games = stats.games,
        wins = stats.wins,
        mean_questions = stats.mean_questions(),
        "evaluated every character"
    );
    stats
}

/// Play games against randomly chosen secrets.
///
/// Each game gets its own forked RNG stream, so the same config always
/// produces the same report.
pub fn evaluate_random(
    catalog: &Arc<Catalog>,
    config: &EngineConfig,
    evaluation: &EvaluationConfig,
) -> EvaluationStats {
    let mut engine = GuessingEngine::with_config(Arc::clone(catalog), config.clone());
    let mut rng = SessionRng::new(evaluation.seed);
    let mut stats = EvaluationStats::new();

    for _ in 0..evaluation.games {
        let mut game_rng = rng.fork();
        let Some(secret) = game_rng.choose(catalog.all_characters()).map(|c| c.id.clone())
        else {
            break;
        };
        let mut respondent = NoisyRespondent::new(secret.clone(), evaluation.noise, game_rng);
        let session = play_session(&mut engine, &mut respondent);
        stats.record(&secret, &session);
    }

    info!(
        games = stats.games,
        wins = stats.wins,
        exhausted = stats.exhausted,
        noise = evaluation.noise,
        "evaluated random secrets"
    );
    stats
}
