//! Questions and their classifiers.
//!
//! Every question carries a `Classifier` deciding whether a character
//! answers "yes". There are two kinds:
//!
//! - `Attribute`: a named attribute must equal an expected value
//! - `Predicate`: an arbitrary test over the character
//!
//! Both share one contract: `Classifier::evaluate(&Character) -> bool`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, AttributeValue};
use super::character::Character;
use super::predicate::Predicate;

/// Stable identifier for a question (a slug such as `"is-alive"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    /// Create a new question ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rule deciding a question's answer for a character.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classifier {
    /// The named attribute equals `expected`.
    ///
    /// A character without the attribute answers "no".
    Attribute {
        key: AttributeKey,
        expected: AttributeValue,
    },

    /// Arbitrary predicate over the character.
    Predicate(Predicate),
}

impl Classifier {
    /// Evaluate against a character.
    #[must_use]
    pub fn evaluate(&self, character: &Character) -> bool {
        match self {
            Classifier::Attribute { key, expected } => {
                character.attributes.get(key) == Some(expected)
            }
            Classifier::Predicate(predicate) => predicate.evaluate(character),
        }
    }
}

/// A yes/no question.
///
/// ## Example
///
/// ```
/// use stem_guess::catalog::{Character, Field, Question};
///
/// let q = Question::attribute("is-alive", "Is your character still alive?", "alive", true);
/// let c = Character::new("katherine-johnson", "Katherine Johnson", Field::Mathematics)
///     .with_attr("alive", false);
///
/// assert!(!q.evaluate(&c));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier.
    pub id: QuestionId,

    /// Display text.
    pub text: String,

    /// How the answer is decided.
    #[serde(flatten)]
    pub classifier: Classifier,
}

impl Question {
    /// Create a question with an explicit classifier.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, classifier: Classifier) -> Self {
        Self {
            id: QuestionId::new(id),
            text: text.into(),
            classifier,
        }
    }

    /// Create an attribute-equality question.
    #[must_use]
    pub fn attribute(
        id: impl Into<String>,
        text: impl Into<String>,
        key: impl Into<AttributeKey>,
        expected: impl Into<AttributeValue>,
    ) -> Self {
        Self::new(
            id,
            text,
            Classifier::Attribute {
                key: key.into(),
                expected: expected.into(),
            },
        )
    }

    /// Create a predicate question.
    #[must_use]
    pub fn predicate(id: impl Into<String>, text: impl Into<String>, predicate: Predicate) -> Self {
        Self::new(id, text, Classifier::Predicate(predicate))
    }

    /// Evaluate against a character.
    #[must_use]
    pub fn evaluate(&self, character: &Character) -> bool {
        self.classifier.evaluate(character)
    }
}
