//! The guessing engine: a state machine driven by the presentation layer.
//!
//! ```text
//! Start --start_game--> Playing --answer_question--> Playing | Guessing | Lost
//! Guessing --confirm_guess(true)--> Won
//! Guessing --confirm_guess(false)--> Lost
//! any --reset_game--> Start        any --start_game--> Playing
//! ```
//!
//! Every transition builds a new `EngineState` and swaps it in whole.
//! Misuse (answering with no current question, confirming outside
//! `Guessing`) is ignored and logged rather than reported as an error.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::catalog::{Catalog, Character, CharacterId, Question};
use crate::core::EngineConfig;

use super::selection::find_best_question;
use super::state::{AnsweredQuestion, EngineState, Phase};

/// A single game session over a shared catalog.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use stem_guess::catalog::Catalog;
/// use stem_guess::engine::{GuessingEngine, Phase};
///
/// let catalog = Arc::new(Catalog::builtin().unwrap());
/// let mut engine = GuessingEngine::new(catalog);
///
/// engine.start_game();
/// assert_eq!(engine.phase(), Phase::Playing);
/// assert!(engine.current_question().is_some());
///
/// engine.answer_question(true);
/// assert_eq!(engine.question_index(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct GuessingEngine {
    catalog: Arc<Catalog>,
    config: EngineConfig,
    state: EngineState,
}

impl GuessingEngine {
    /// Create an engine with the default config, in `Start`.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, EngineConfig::default())
    }

    /// Create an engine with a custom config, in `Start`.
    #[must_use]
    pub fn with_config(catalog: Arc<Catalog>, config: EngineConfig) -> Self {
        let state = EngineState::initial(&catalog, Phase::Start);
        Self {
            catalog,
            config,
            state,
        }
    }

    /// The shared catalog.
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// The engine config.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    // === Read Accessors ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// The question to ask next.
    ///
    /// Derived from the state on every call. `None` outside `Playing` or
    /// once every question has been used.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.state.phase != Phase::Playing {
            return None;
        }
        let used = &self.state.used;
        find_best_question(&self.catalog, self.state.remaining.iter(), |id| {
            used.contains(id)
        })
    }

    /// 1-based number of the current question, for display.
    #[must_use]
    pub fn question_index(&self) -> usize {
        self.state.question_index()
    }

    /// Candidates still in play, in dataset order.
    pub fn remaining_characters(&self) -> impl Iterator<Item = &Character> + '_ {
        self.state
            .remaining
            .iter()
            .filter_map(|id| self.catalog.character(id))
    }

    /// Number of candidates still in play.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.state.remaining.len()
    }

    /// Questions asked so far, with answers.
    pub fn answered_questions(&self) -> impl Iterator<Item = (&Question, bool)> + '_ {
        self.state
            .history
            .iter()
            .filter_map(|entry| {
                self.catalog
                    .question(&entry.question)
                    .map(|q| (q, entry.answer))
            })
    }

    /// The character being guessed.
    #[must_use]
    pub fn guessed_character(&self) -> Option<&Character> {
        self.state
            .guessed
            .as_ref()
            .and_then(|id| self.catalog.character(id))
    }

    /// The character confirmed at the end of the game.
    #[must_use]
    pub fn correct_character(&self) -> Option<&Character> {
        self.state
            .correct
            .as_ref()
            .and_then(|id| self.catalog.character(id))
    }

    /// Every character in the catalog.
    #[must_use]
    pub fn all_characters(&self) -> &[Character] {
        self.catalog.all_characters()
    }

    // === Transitions ===

    /// Start a new game. Acts as reset + start from any phase.
    pub fn start_game(&mut self) {
        self.state = EngineState::initial(&self.catalog, Phase::Playing);
        info!(
            candidates = self.state.remaining.len(),
            questions = self.catalog.question_count(),
            "game started"
        );
    }

    /// Answer the current question.
    ///
    /// Returns the phase after the transition, or `None` if there was no
    /// current question and the call was ignored.
    pub fn answer_question(&mut self, answer: bool) -> Option<Phase> {
        if self.state.phase != Phase::Playing {
            debug!(phase = %self.state.phase, answer, "not playing; answer ignored");
            return None;
        }

        let catalog = Arc::clone(&self.catalog);
        let used = &self.state.used;
        let Some(question) =
            find_best_question(&catalog, self.state.remaining.iter(), |id| used.contains(id))
        else {
            debug!(answer, "no current question; answer ignored");
            return None;
        };

        let partition = catalog.partition(question, self.state.remaining.iter());

        let mut next = self.state.clone();
        next.remaining = partition.side(answer).iter().cloned().collect();
        next.history.push_back(AnsweredQuestion {
            question: question.id.clone(),
            answer,
        });
        next.used.insert(question.id.clone());

        debug!(
            question = %question.id,
            answer,
            before = self.state.remaining.len(),
            after = next.remaining.len(),
            "answer applied"
        );

        match next.remaining.len() {
            1 => {
                next.guessed = next.remaining.front().cloned();
                next.phase = Phase::Guessing;
            }
            0 => {
                next.guessed = None;
                next.phase = Phase::Lost;
                info!(asked = next.history.len(), "no candidates left");
            }
            _ => {
                let limit_reached = next.history.len() >= self.config.max_questions;
                let next_used = &next.used;
                let out_of_questions =
                    find_best_question(&catalog, next.remaining.iter(), |id| {
                        next_used.contains(id)
                    })
                    .is_none();

                if limit_reached || out_of_questions {
                    // First remaining in dataset order, not the most likely one
                    next.guessed = next.remaining.front().cloned();
                    next.phase = Phase::Guessing;
                    debug!(
                        limit_reached,
                        out_of_questions,
                        candidates = next.remaining.len(),
                        "forcing a guess"
                    );
                }
            }
        }

        if let Some(guess) = &next.guessed {
            info!(guess = %guess, asked = next.history.len(), "guessing");
        }

        self.state = next;
        Some(self.state.phase)
    }

    /// Commit to a guess while still playing.
    ///
    /// For front-ends that find no current question, e.g. a catalog with
    /// no questions. Guesses the first remaining candidate. Returns the new
    /// phase, or `None` outside `Playing`.
    pub fn force_guess(&mut self) -> Option<Phase> {
        if self.state.phase != Phase::Playing {
            warn!(phase = %self.state.phase, "force_guess outside playing; ignored");
            return None;
        }

        let mut next = self.state.clone();
        next.guessed = next.remaining.front().cloned();
        next.phase = if next.guessed.is_some() {
            Phase::Guessing
        } else {
            Phase::Lost
        };
        info!(guess = ?next.guessed, asked = next.history.len(), "guess forced");

        self.state = next;
        Some(self.state.phase)
    }

    /// Confirm or reject the current guess.
    ///
    /// On rejection the caller may name the actual character; unknown ids
    /// are dropped. Returns the new phase, or `None` outside `Guessing`.
    pub fn confirm_guess(&mut self, is_correct: bool, actual: Option<CharacterId>) -> Option<Phase> {
        if self.state.phase != Phase::Guessing {
            warn!(phase = %self.state.phase, "confirm_guess outside guessing; ignored");
            return None;
        }

        let mut next = self.state.clone();
        if is_correct {
            next.correct = next.guessed.clone();
            next.phase = Phase::Won;
        } else {
            next.correct = actual.filter(|id| {
                let known = self.catalog.contains_character(id);
                if !known {
                    warn!(character = %id, "unknown actual character; dropped");
                }
                known
            });
            next.phase = Phase::Lost;
        }

        info!(
            outcome = %next.phase,
            guessed = ?next.guessed,
            correct = ?next.correct,
            asked = next.history.len(),
            "game over"
        );

        self.state = next;
        Some(self.state.phase)
    }

    /// Return to `Start`, identical to a freshly constructed engine.
    pub fn reset_game(&mut self) {
        self.state = EngineState::initial(&self.catalog, Phase::Start);
        debug!("game reset");
    }
}
