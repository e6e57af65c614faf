//! Character predicates.
//!
//! A predicate is an arbitrary yes/no test over a `Character`. Catalogs
//! built in code can use native closures; catalogs loaded from files use
//! the declarative combinators, which cover the same ground for
//! attribute-based tests.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, AttributeValue};
use super::character::Character;

type PredicateFn = dyn Fn(&Character) -> bool + Send + Sync;

/// A named native predicate.
///
/// Wraps a closure so it can live in an immutable, shared catalog.
#[derive(Clone)]
pub struct NativePredicate {
    name: String,
    func: Arc<PredicateFn>,
}

impl NativePredicate {
    /// Wrap a closure under a diagnostic name.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Character) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Diagnostic name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the closure.
    #[must_use]
    pub fn call(&self, character: &Character) -> bool {
        (self.func)(character)
    }
}

impl fmt::Debug for NativePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativePredicate").field(&self.name).finish()
    }
}

impl PartialEq for NativePredicate {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Arc::ptr_eq(&self.func, &other.func)
    }
}

/// A yes/no test over a character.
///
/// ## Example
///
/// ```
/// use stem_guess::catalog::{Character, Field, Predicate};
///
/// let born_before_1900 = Predicate::native("born_before_1900", |c| {
///     c.get_int("birth_year").is_some_and(|y| y < 1900)
/// });
/// let modern_scientist = Predicate::equals("field", "science")
///     .and(born_before_1900.clone().negate());
///
/// let curie = Character::new("curie", "Marie Curie", Field::Science)
///     .with_attr("birth_year", 1867i32);
///
/// assert!(born_before_1900.evaluate(&curie));
/// assert!(!modern_scientist.evaluate(&curie));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    // === Attribute Tests ===

    /// Attribute equals the given value.
    Equals {
        key: AttributeKey,
        value: AttributeValue,
    },

    /// Attribute equals any of the given values.
    OneOf {
        key: AttributeKey,
        values: Vec<AttributeValue>,
    },

    /// Character has the attribute at all.
    Exists(AttributeKey),

    // === Combinators ===

    /// All predicates must hold.
    All(Vec<Predicate>),

    /// At least one predicate must hold.
    Any(Vec<Predicate>),

    /// Predicate must not hold.
    Not(Box<Predicate>),

    // === Native ===

    /// Closure supplied in code. Not representable in catalog files.
    #[serde(skip)]
    Native(NativePredicate),
}

impl Predicate {
    /// Create an attribute equality test.
    pub fn equals(key: impl Into<AttributeKey>, value: impl Into<AttributeValue>) -> Self {
        Self::Equals {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a native predicate from a closure.
    pub fn native<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Character) -> bool + Send + Sync + 'static,
    {
        Self::Native(NativePredicate::new(name, func))
    }

    /// Create an AND predicate.
    pub fn all(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        Self::All(predicates.into_iter().collect())
    }

    /// Create an OR predicate.
    pub fn any(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        Self::Any(predicates.into_iter().collect())
    }

    /// Negate this predicate.
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Add another predicate with AND.
    pub fn and(self, other: Predicate) -> Self {
        match self {
            Self::All(mut predicates) => {
                predicates.push(other);
                Self::All(predicates)
            }
            _ => Self::All(vec![self, other]),
        }
    }

    /// Add another predicate with OR.
    pub fn or(self, other: Predicate) -> Self {
        match self {
            Self::Any(mut predicates) => {
                predicates.push(other);
                Self::Any(predicates)
            }
            _ => Self::Any(vec![self, other]),
        }
    }

    /// Check the predicate against a character.
    #[must_use]
    pub fn evaluate(&self, character: &Character) -> bool {
        match self {
            Predicate::Equals { key, value } => character.attributes.get(key) == Some(value),

            Predicate::OneOf { key, values } => character
                .attributes
                .get(key)
                .is_some_and(|v| values.contains(v)),

            Predicate::Exists(key) => character.attributes.contains_key(key),

            Predicate::All(predicates) => predicates.iter().all(|p| p.evaluate(character)),

            Predicate::Any(predicates) => predicates.iter().any(|p| p.evaluate(character)),

            Predicate::Not(inner) => !inner.evaluate(character),

            Predicate::Native(native) => native.call(character),
        }
    }
}
