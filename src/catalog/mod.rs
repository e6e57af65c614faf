//! Catalog system: characters, questions, and the static dataset.
//!
//! ## Key Types
//!
//! - `Character`: a guessable figure with a `Field` and named attributes
//! - `Question`: display text plus a `Classifier`
//! - `Classifier`: attribute equality or an arbitrary `Predicate`
//! - `Catalog`: ordered, immutable collection of both
//!
//! Catalogs come from `Catalog::builtin()`, a `CatalogBuilder`, or a
//! TOML/JSON file via `Catalog::load`.

pub mod attributes;
pub mod builtin;
pub mod character;
pub mod error;
pub mod loader;
pub mod predicate;
pub mod question;
pub mod registry;

pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use character::{Character, CharacterId, Field, UnknownField, FIELD_ATTRIBUTE};
pub use error::{CatalogError, CatalogResult};
pub use loader::CatalogDocument;
pub use predicate::{NativePredicate, Predicate};
pub use question::{Classifier, Question, QuestionId};
pub use registry::{Catalog, CatalogBuilder, Partition};
