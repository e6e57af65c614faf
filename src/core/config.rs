//! Engine configuration.
//!
//! The engine has a single tunable: how many questions it may ask before
//! committing to a guess. Front-ends can load it from TOML alongside a
//! catalog or set it through the builder methods.

use serde::{Deserialize, Serialize};

/// Questions asked before the engine forces a guess.
pub const DEFAULT_MAX_QUESTIONS: usize = 10;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum answered questions before a forced guess.
    ///
    /// Compared against the history length after each answer, so a game
    /// never asks more than this many questions.
    pub max_questions: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_questions: DEFAULT_MAX_QUESTIONS,
        }
    }
}

impl EngineConfig {
    /// Create the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the question limit.
    #[must_use]
    pub fn with_max_questions(mut self, max: usize) -> Self {
        self.max_questions = max;
        self
    }
}
