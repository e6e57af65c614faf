//! Characters - the entities the engine tries to guess.
//!
//! `Character` holds the immutable properties of a catalog entry.
//! The engine never copies or mutates characters; it tracks them by
//! `CharacterId` and looks them up in the `Catalog`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, AttributeValue, Attributes};

/// Attribute key under which every character exposes its `Field`.
pub const FIELD_ATTRIBUTE: &str = "field";

/// Stable identifier for a character (a slug such as `"marie-curie"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub String);

impl CharacterId {
    /// Create a new character ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CharacterId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Discipline a character is known for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Science,
    Technology,
    Engineering,
    Arts,
    Mathematics,
}

impl Field {
    /// All fields, in declaration order.
    pub const ALL: [Field; 5] = [
        Field::Science,
        Field::Technology,
        Field::Engineering,
        Field::Arts,
        Field::Mathematics,
    ];

    /// Lowercase name, as stored in the `field` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Science => "science",
            Field::Technology => "technology",
            Field::Engineering => "engineering",
            Field::Arts => "arts",
            Field::Mathematics => "mathematics",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown field name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field {:?}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// A guessable character.
///
/// ## Example
///
/// ```
/// use stem_guess::catalog::{Character, Field};
///
/// let ada = Character::new("ada-lovelace", "Ada Lovelace", Field::Mathematics)
///     .with_description("Wrote the first published algorithm")
///     .with_attr("alive", false);
///
/// assert_eq!(ada.get_bool("alive"), Some(false));
/// assert_eq!(ada.get_text("field"), Some("mathematics"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Stable identifier.
    pub id: CharacterId,

    /// Display name.
    pub name: String,

    /// Short description shown with a guess.
    #[serde(default)]
    pub description: String,

    /// Image reference (URL or asset path).
    #[serde(default)]
    pub image: String,

    /// Discipline.
    pub field: Field,

    /// Additional named attributes. Always contains `field`.
    #[serde(default)]
    pub attributes: Attributes,
}

impl Character {
    /// Create a new character with no extra attributes.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, field: Field) -> Self {
        let mut character = Self {
            id: CharacterId::new(id),
            name: name.into(),
            description: String::new(),
            image: String::new(),
            field,
            attributes: Attributes::default(),
        };
        character.sync_field_attribute();
        character
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image reference (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Add an attribute (builder pattern).
    ///
    /// The `field` attribute is owned by `Character::field` and can't be
    /// overridden here.
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        let key = key.into();
        if key.as_str() != FIELD_ATTRIBUTE {
            self.attributes.insert(key, value.into());
        }
        self
    }

    /// Mirror `field` into the attribute map.
    ///
    /// Called by the constructor and by the catalog after deserialization.
    pub(crate) fn sync_field_attribute(&mut self) {
        self.attributes.insert(
            AttributeKey::new(FIELD_ATTRIBUTE),
            AttributeValue::Text(self.field.as_str().to_string()),
        );
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(&AttributeKey::new(key))
    }

    /// Get a boolean attribute.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_attr(key).and_then(AttributeValue::as_bool)
    }

    /// Get an integer attribute.
    #[must_use]
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get_attr(key).and_then(AttributeValue::as_int)
    }

    /// Get a text attribute.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get_attr(key).and_then(AttributeValue::as_text)
    }
}
