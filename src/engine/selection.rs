//! Question selection.
//!
//! Picks the question that splits the remaining candidates most evenly.
//! A question's score is `min(yes, no)`; only questions with both sides
//! non-empty are eligible. Ties keep the first question in dataset order.
//!
//! When nothing is eligible the selector falls back to the first available
//! question with a yes-count strictly between zero and the population size,
//! then to the first available question at all.

use tracing::trace;

use crate::catalog::{Catalog, CharacterId, Question, QuestionId};

/// Why a question was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionKind {
    /// Highest `min(yes, no)` among discriminating questions.
    Best { score: usize },
    /// No discriminating question; first with a partial yes-count.
    Partial,
    /// Nothing discriminates; first available question.
    LastResort,
}

/// A selected question.
#[derive(Clone, Copy, Debug)]
pub struct Selection<'c> {
    pub question: &'c Question,
    pub kind: SelectionKind,
}

/// Split score of a question over the candidates.
///
/// Returns `None` when the question doesn't discriminate (every candidate
/// answers alike).
#[must_use]
pub fn score(catalog: &Catalog, question: &Question, remaining: &[CharacterId]) -> Option<usize> {
    let yes = catalog.yes_count(question, remaining);
    let no = remaining.len() - yes;
    (yes > 0 && no > 0).then_some(yes.min(no))
}

/// Select the next question, with the reason it was chosen.
///
/// Returns `None` only when every question has been used.
pub fn select<'c, 'a>(
    catalog: &'c Catalog,
    remaining: impl IntoIterator<Item = &'a CharacterId>,
    is_used: impl Fn(&QuestionId) -> bool,
) -> Option<Selection<'c>> {
    let remaining: Vec<CharacterId> = remaining.into_iter().cloned().collect();
    let available: Vec<&Question> = catalog
        .all_questions()
        .iter()
        .filter(|q| !is_used(&q.id))
        .collect();

    let first = *available.first()?;

    let mut best: Option<(&Question, usize)> = None;
    for &question in &available {
        if let Some(s) = score(catalog, question, &remaining) {
            if best.map_or(true, |(_, best_score)| s > best_score) {
                best = Some((question, s));
            }
        }
    }

    let selection = match best {
        Some((question, score)) => Selection {
            question,
            kind: SelectionKind::Best { score },
        },
        None => {
            // Any partial split is already eligible above
            let partial = available.iter().copied().find(|q| {
                let yes = catalog.yes_count(q, &remaining);
                yes > 0 && yes < remaining.len()
            });
            match partial {
                Some(question) => Selection {
                    question,
                    kind: SelectionKind::Partial,
                },
                None => Selection {
                    question: first,
                    kind: SelectionKind::LastResort,
                },
            }
        }
    };

    trace!(
        question = %selection.question.id,
        kind = ?selection.kind,
        candidates = remaining.len(),
        available = available.len(),
        "selected question"
    );
    Some(selection)
}

/// Find the best next question.
///
/// Deterministic: the same candidates and used set always give the same
/// question.
pub fn find_best_question<'c, 'a>(
    catalog: &'c Catalog,
    remaining: impl IntoIterator<Item = &'a CharacterId>,
    is_used: impl Fn(&QuestionId) -> bool,
) -> Option<&'c Question> {
    select(catalog, remaining, is_used).map(|s| s.question)
}
