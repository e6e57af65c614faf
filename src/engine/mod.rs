//! The guessing engine.
//!
//! ## Key Types
//!
//! - `GuessingEngine`: state machine driven by the presentation layer
//! - `EngineState`: the single value replaced on every transition
//! - `Phase`: start, playing, guessing, won, lost
//!
//! Question selection lives in `selection` and is usable on its own.

pub mod game;
pub mod selection;
pub mod state;

pub use game::GuessingEngine;
pub use selection::{find_best_question, score, select, Selection, SelectionKind};
pub use state::{AnsweredQuestion, EngineState, Phase};
