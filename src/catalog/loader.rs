//! Loading catalogs from TOML or JSON files.
//!
//! Schema (TOML shown; JSON uses the same shape):
//!
//! ```toml
//! [[characters]]
//! id = "marie-curie"
//! name = "Marie Curie"
//! description = "Pioneer of radioactivity research"
//! image = "images/curie.jpg"
//! field = "science"
//! attributes = { alive = false, gender = "female", nobel_prize = true }
//!
//! [[questions]]
//! id = "is-alive"
//! text = "Is your character still alive?"
//! attribute = { key = "alive", expected = true }
//!
//! [[questions]]
//! id = "european"
//! text = "Was your character born in Europe?"
//! predicate = { one_of = { key = "continent", values = ["europe"] } }
//! ```
//!
//! Native predicates can't be expressed in files; use the declarative
//! combinators instead.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::character::Character;
use super::error::{CatalogError, CatalogResult};
use super::question::Question;
use super::registry::Catalog;

/// On-disk catalog representation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub characters: Vec<Character>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl CatalogDocument {
    /// Validate into a `Catalog`.
    pub fn into_catalog(self) -> CatalogResult<Catalog> {
        Catalog::from_parts(self.characters, self.questions)
    }
}

impl Catalog {
    /// Parse a TOML catalog.
    pub fn from_toml_str(s: &str) -> CatalogResult<Self> {
        toml::from_str::<CatalogDocument>(s)?.into_catalog()
    }

    /// Parse a JSON catalog.
    pub fn from_json_str(s: &str) -> CatalogResult<Self> {
        serde_json::from_str::<CatalogDocument>(s)?.into_catalog()
    }

    /// Load a catalog file, picking the format from the extension.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let parse: fn(&str) -> CatalogResult<Self> = match extension.as_str() {
            "toml" => Self::from_toml_str,
            "json" => Self::from_json_str,
            _ => return Err(CatalogError::UnsupportedFormat { extension }),
        };

        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = parse(&contents)?;
        info!(
            path = %path.display(),
            characters = catalog.len(),
            questions = catalog.question_count(),
            "loaded catalog"
        );
        Ok(catalog)
    }
}
