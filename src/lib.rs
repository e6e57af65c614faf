//! # stem-guess
//!
//! A deterministic 20-questions engine over a static catalog of STEM figures.
//!
//! ## Design Principles
//!
//! 1. **Static Dataset**: The `Catalog` is built once and shared read-only
//!    (`Arc<Catalog>`) by any number of game sessions.
//!
//! 2. **Deterministic Selection**: The next question is the one splitting
//!    the candidates most evenly, ties broken by dataset order. No
//!    randomness anywhere in the engine.
//!
//! 3. **Whole-State Transitions**: Each operation builds a new
//!    `EngineState` and swaps it in, so every transition is atomic and
//!    snapshots are cheap (`im` persistent structures).
//!
//! ## Modules
//!
//! - `catalog`: Characters, questions, classifiers, file loading
//! - `engine`: Question selection and the game state machine
//! - `play`: Respondents, session driver, accuracy evaluation
//! - `core`: Engine configuration, deterministic RNG
//! - `telemetry`: Logging setup for the binary

pub mod catalog;
pub mod core;
pub mod engine;
pub mod play;
pub mod telemetry;

// Re-export commonly used types
pub use crate::catalog::{
    AttributeKey, AttributeValue, Catalog, CatalogBuilder, CatalogError, Character, CharacterId,
    Classifier, Field, Predicate, Question, QuestionId,
};

pub use crate::core::{EngineConfig, SessionRng};

pub use crate::engine::{
    find_best_question, AnsweredQuestion, EngineState, GuessingEngine, Phase,
};

pub use crate::play::{
    evaluate_all, evaluate_random, play_session, Confirmation, EvaluationConfig, EvaluationStats,
    NoisyRespondent, OracleRespondent, Respondent, SessionRecord,
};
