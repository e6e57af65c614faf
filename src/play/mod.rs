//! Playing games against the engine.
//!
//! - `Respondent`: answers questions and judges guesses
//! - `play_session`: drives one game from start to finish
//! - `evaluate_all` / `evaluate_random`: aggregate accuracy over many games

pub mod evaluation;
pub mod respondent;
pub mod session;

pub use evaluation::{evaluate_all, evaluate_random, EvaluationConfig, EvaluationStats};
pub use respondent::{Confirmation, NoisyRespondent, OracleRespondent, Respondent};
pub use session::{play_session, SessionRecord};
