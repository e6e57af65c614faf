//! Engine state: the single value replaced on every transition.
//!
//! Uses `im` persistent structures so snapshots handed to renderers (and
//! the previous state during a transition) share structure instead of
//! copying the candidate list.

use std::fmt;

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CharacterId, QuestionId};

/// Phase of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Waiting for `start_game`.
    #[default]
    Start,
    /// Asking questions.
    Playing,
    /// A guess is on the table, waiting for confirmation.
    Guessing,
    /// The guess was confirmed.
    Won,
    /// The guess was rejected or the candidates ran out.
    Lost,
}

impl Phase {
    /// Whether the game has finished.
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Start => "start",
            Phase::Playing => "playing",
            Phase::Guessing => "guessing",
            Phase::Won => "won",
            Phase::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// One asked question and the answer given.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub question: QuestionId,
    pub answer: bool,
}

/// Complete engine state.
///
/// ## Invariants
///
/// - `remaining` is a subset of the catalog, in dataset order
/// - every id in `used` appears exactly once in `history`
/// - `guessed` is set only in `Guessing`, `Won` and `Lost`
/// - `correct` is set only in `Won` and `Lost`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    /// Current phase.
    pub phase: Phase,

    /// Candidates still consistent with every answer.
    pub remaining: Vector<CharacterId>,

    /// Questions already asked this game.
    pub used: ImHashSet<QuestionId>,

    /// Questions asked, in order, with their answers.
    pub history: Vector<AnsweredQuestion>,

    /// The character the engine is guessing.
    pub guessed: Option<CharacterId>,

    /// The character confirmed at the end of the game.
    pub correct: Option<CharacterId>,
}

impl EngineState {
    /// Fresh state in `phase` with every catalog character as a candidate.
    #[must_use]
    pub fn initial(catalog: &Catalog, phase: Phase) -> Self {
        Self {
            phase,
            remaining: catalog.character_ids().cloned().collect(),
            used: ImHashSet::new(),
            history: Vector::new(),
            guessed: None,
            correct: None,
        }
    }

    /// Number of questions answered so far.
    #[must_use]
    pub fn questions_asked(&self) -> usize {
        self.history.len()
    }

    /// 1-based number of the question being asked, for display.
    #[must_use]
    pub fn question_index(&self) -> usize {
        self.history.len() + 1
    }
}
