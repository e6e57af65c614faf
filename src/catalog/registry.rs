//! The catalog: the static dataset of characters and questions.
//!
//! A `Catalog` is built once (in code via `CatalogBuilder`, or from a file)
//! and never mutated afterwards. Both lists keep their dataset order, which
//! the engine relies on for deterministic tie-breaking.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::character::{Character, CharacterId};
use super::error::{CatalogError, CatalogResult};
use super::question::{Question, QuestionId};

/// Candidates split by a question's answer.
///
/// Both sides preserve the input order. SmallVec keeps typical catalog
/// sizes off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    /// Candidates answering "yes".
    pub yes: SmallVec<[CharacterId; 16]>,
    /// Candidates answering "no".
    pub no: SmallVec<[CharacterId; 16]>,
}

impl Partition {
    /// The side matching an answer.
    #[must_use]
    pub fn side(&self, answer: bool) -> &[CharacterId] {
        if answer {
            &self.yes
        } else {
            &self.no
        }
    }
}

/// Immutable collection of characters and questions.
///
/// ## Example
///
/// ```
/// use stem_guess::catalog::{Catalog, Character, Field, Question};
///
/// let catalog = Catalog::builder()
///     .character(Character::new("curie", "Marie Curie", Field::Science))
///     .character(Character::new("lovelace", "Ada Lovelace", Field::Mathematics))
///     .question(Question::attribute("science", "Is it a scientist?", "field", "science"))
///     .build()
///     .unwrap();
///
/// let q = &catalog.all_questions()[0];
/// let curie = catalog.character(&"curie".into()).unwrap();
/// assert!(catalog.evaluate(q, curie));
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    characters: Vec<Character>,
    questions: Vec<Question>,
    character_index: FxHashMap<CharacterId, usize>,
    question_index: FxHashMap<QuestionId, usize>,
}

impl Catalog {
    /// Start building a catalog.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Build a catalog from ordered lists, validating ids.
    pub fn from_parts(
        mut characters: Vec<Character>,
        questions: Vec<Question>,
    ) -> CatalogResult<Self> {
        if characters.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut character_index = FxHashMap::default();
        for (i, character) in characters.iter_mut().enumerate() {
            // Deserialized characters may not carry the mirrored field yet
            character.sync_field_attribute();
            if character_index.insert(character.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateCharacter(character.id.clone()));
            }
        }

        let mut question_index = FxHashMap::default();
        for (i, question) in questions.iter().enumerate() {
            if question_index.insert(question.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
        }

        Ok(Self {
            characters,
            questions,
            character_index,
            question_index,
        })
    }

    /// All characters, in dataset order.
    #[must_use]
    pub fn all_characters(&self) -> &[Character] {
        &self.characters
    }

    /// All questions, in dataset order.
    #[must_use]
    pub fn all_questions(&self) -> &[Question] {
        &self.questions
    }

    /// All character ids, in dataset order.
    pub fn character_ids(&self) -> impl Iterator<Item = &CharacterId> {
        self.characters.iter().map(|c| &c.id)
    }

    /// Look up a character.
    #[must_use]
    pub fn character(&self, id: &CharacterId) -> Option<&Character> {
        self.character_index.get(id).map(|&i| &self.characters[i])
    }

    /// Look up a question.
    #[must_use]
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.question_index.get(id).map(|&i| &self.questions[i])
    }

    /// Check if a character id is in the catalog.
    #[must_use]
    pub fn contains_character(&self, id: &CharacterId) -> bool {
        self.character_index.contains_key(id)
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Always false for a built catalog; kept for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Number of questions.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Evaluate a question against a character.
    #[must_use]
    pub fn evaluate(&self, question: &Question, character: &Character) -> bool {
        question.evaluate(character)
    }

    /// Evaluate a question against a character id.
    ///
    /// Ids unknown to the catalog answer "no".
    #[must_use]
    pub fn evaluate_id(&self, question: &Question, id: &CharacterId) -> bool {
        self.character(id)
            .is_some_and(|character| question.evaluate(character))
    }

    /// Count candidates answering "yes".
    pub fn yes_count<'a>(
        &self,
        question: &Question,
        candidates: impl IntoIterator<Item = &'a CharacterId>,
    ) -> usize {
        candidates
            .into_iter()
            .filter(|id| self.evaluate_id(question, id))
            .count()
    }

    /// Split candidates by their answer to a question.
    pub fn partition<'a>(
        &self,
        question: &Question,
        candidates: impl IntoIterator<Item = &'a CharacterId>,
    ) -> Partition {
        let mut partition = Partition::default();
        for id in candidates {
            if self.evaluate_id(question, id) {
                partition.yes.push(id.clone());
            } else {
                partition.no.push(id.clone());
            }
        }
        partition
    }
}

/// Builder for a `Catalog`.
///
/// Keeps insertion order. Validation happens in `build`.
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    characters: Vec<Character>,
    questions: Vec<Question>,
}

impl CatalogBuilder {
    /// Add a character.
    #[must_use]
    pub fn character(mut self, character: Character) -> Self {
        self.characters.push(character);
        self
    }

    /// Add several characters.
    #[must_use]
    pub fn characters(mut self, characters: impl IntoIterator<Item = Character>) -> Self {
        self.characters.extend(characters);
        self
    }

    /// Add a question.
    #[must_use]
    pub fn question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Add several questions.
    #[must_use]
    pub fn questions(mut self, questions: impl IntoIterator<Item = Question>) -> Self {
        self.questions.extend(questions);
        self
    }

    /// Validate and build.
    pub fn build(self) -> CatalogResult<Catalog> {
        Catalog::from_parts(self.characters, self.questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Field;

    fn small() -> Catalog {
        Catalog::builder()
            .character(Character::new("a", "A", Field::Science).with_attr("alive", true))
            .character(Character::new("b", "B", Field::Arts).with_attr("alive", false))
            .character(Character::new("c", "C", Field::Science).with_attr("alive", false))
            .question(Question::attribute("alive", "Alive?", "alive", true))
            .question(Question::attribute("science", "Science?", "field", "science"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_lookup() {
        let catalog = small();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.question_count(), 2);
        assert_eq!(catalog.character(&"b".into()).unwrap().name, "B");
        assert!(catalog.character(&"z".into()).is_none());
        assert!(catalog.question(&"alive".into()).is_some());
        assert!(catalog.contains_character(&"c".into()));
    }

    #[test]
    fn test_order_is_preserved() {
        let catalog = small();
        let ids: Vec<_> = catalog.character_ids().map(CharacterId::as_str).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_partition() {
        let catalog = small();
        let q = catalog.question(&"science".into()).unwrap().clone();
        let ids: Vec<_> = catalog.character_ids().cloned().collect();

        let partition = catalog.partition(&q, &ids);
        assert_eq!(partition.yes.as_slice(), &[CharacterId::new("a"), CharacterId::new("c")]);
        assert_eq!(partition.no.as_slice(), &[CharacterId::new("b")]);
        assert_eq!(partition.side(false), &[CharacterId::new("b")]);
        assert_eq!(catalog.yes_count(&q, &ids), 2);
    }

    #[test]
    fn test_unknown_id_answers_no() {
        let catalog = small();
        let q = catalog.question(&"science".into()).unwrap();
        assert!(!catalog.evaluate_id(q, &"ghost".into()));
    }

    #[test]
    fn test_duplicate_character_rejected() {
        let result = Catalog::builder()
            .character(Character::new("a", "A", Field::Science))
            .character(Character::new("a", "A again", Field::Arts))
            .build();
        assert!(matches!(result, Err(CatalogError::DuplicateCharacter(id)) if id.as_str() == "a"));
    }

    #[test]
    fn test_duplicate_question_rejected() {
        let result = Catalog::builder()
            .character(Character::new("a", "A", Field::Science))
            .question(Question::attribute("q", "?", "alive", true))
            .question(Question::attribute("q", "??", "alive", false))
            .build();
        assert!(matches!(result, Err(CatalogError::DuplicateQuestion(_))));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(Catalog::builder().build(), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_no_questions_allowed() {
        let catalog = Catalog::builder()
            .character(Character::new("a", "A", Field::Science))
            .build()
            .unwrap();
        assert_eq!(catalog.question_count(), 0);
    }
}
