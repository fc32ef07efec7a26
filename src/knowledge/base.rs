//! Knowledge base: the catalog of characters and questions.
//!
//! The `KnowledgeBase` stores characters and questions in registration
//! order. Order matters: the candidate set of a game keeps catalog order,
//! and the guess is the first surviving candidate.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use super::category::Category;
use super::character::{Character, CharacterId};
use super::question::{Question, QuestionId};
use super::seed;

lazy_static! {
    static ref BUILTIN: KnowledgeBase = seed::builtin_catalog();
}

/// Registry of characters and questions.
///
/// ## Example
///
/// ```
/// use character_guess::knowledge::{Character, CharacterId, KnowledgeBase, Question, QuestionId};
///
/// let mut kb = KnowledgeBase::new();
/// let batman = Character::new(CharacterId::new(1), "Batman").with_traits(&["isSuperhero"]);
/// kb.register_character(batman);
/// kb.register_question(Question::new(QuestionId::new(1), "A superhero?", "isSuperhero"));
///
/// assert_eq!(kb.list_entities().len(), 1);
/// assert_eq!(kb.get_character(CharacterId::new(1)).unwrap().name, "Batman");
/// ```
#[derive(Clone, Debug, Default)]
pub struct KnowledgeBase {
    characters: Vec<Character>,
    questions: Vec<Question>,
    character_index: FxHashMap<CharacterId, usize>,
    question_index: FxHashMap<QuestionId, usize>,
}

impl KnowledgeBase {
    /// Create a new empty knowledge base.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog, initialised once per process and never mutated.
    #[must_use]
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    /// Register a character.
    ///
    /// Panics if a character with the same ID already exists.
    pub fn register_character(&mut self, character: Character) {
        if self.character_index.contains_key(&character.id) {
            panic!("Character with ID {:?} already registered", character.id);
        }
        self.character_index.insert(character.id, self.characters.len());
        self.characters.push(character);
    }

    /// Register a question.
    ///
    /// Panics if a question with the same ID already exists.
    pub fn register_question(&mut self, question: Question) {
        if self.question_index.contains_key(&question.id) {
            panic!("Question with ID {:?} already registered", question.id);
        }
        self.question_index.insert(question.id, self.questions.len());
        self.questions.push(question);
    }

    /// All characters, in catalog order.
    #[must_use]
    pub fn list_entities(&self) -> &[Character] {
        &self.characters
    }

    /// All questions, in catalog order.
    #[must_use]
    pub fn list_questions(&self) -> &[Question] {
        &self.questions
    }

    /// Characters matching `category`, catalog order preserved.
    #[must_use]
    pub fn filter_by_category(&self, category: Category) -> Vec<Character> {
        self.characters
            .iter()
            .filter(|c| category.matches(c))
            .cloned()
            .collect()
    }

    /// Get a character by ID.
    #[must_use]
    pub fn get_character(&self, id: CharacterId) -> Option<&Character> {
        self.character_index.get(&id).map(|&i| &self.characters[i])
    }

    /// Get a question by ID.
    #[must_use]
    pub fn get_question(&self, id: QuestionId) -> Option<&Question> {
        self.question_index.get(&id).map(|&i| &self.questions[i])
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// True if there are no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> KnowledgeBase {
        let mut kb = KnowledgeBase::new();
        let movie = &["isFromMovie"];
        kb.register_character(Character::new(CharacterId::new(3), "C").with_traits(movie));
        kb.register_character(Character::new(CharacterId::new(1), "A"));
        kb.register_character(Character::new(CharacterId::new(2), "B").with_traits(movie));
        kb.register_question(Question::new(QuestionId::new(1), "Movie?", "isFromMovie"));
        kb
    }

    #[test]
    fn test_register_and_get() {
        let kb = sample();

        assert_eq!(kb.len(), 3);
        assert!(!kb.is_empty());
        assert_eq!(kb.get_character(CharacterId::new(1)).unwrap().name, "A");
        assert!(kb.get_character(CharacterId::new(99)).is_none());
        assert_eq!(kb.get_question(QuestionId::new(1)).unwrap().text, "Movie?");
        assert!(kb.get_question(QuestionId::new(2)).is_none());
    }

    #[test]
    fn test_registration_order_kept() {
        let kb = sample();
        let names: Vec<_> = kb.list_entities().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn test_filter_by_category_keeps_order() {
        let kb = sample();
        let movies = kb.filter_by_category(Category::Movies);
        let names: Vec<_> = movies.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["C", "B"]);

        assert_eq!(kb.filter_by_category(Category::All).len(), 3);
        assert!(kb.filter_by_category(Category::Sports).is_empty());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_character_panics() {
        let mut kb = sample();
        kb.register_character(Character::new(CharacterId::new(1), "Again"));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_question_panics() {
        let mut kb = sample();
        kb.register_question(Question::new(QuestionId::new(1), "Again?", "isFromMovie"));
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = KnowledgeBase::builtin();
        let b = KnowledgeBase::builtin();
        assert!(std::ptr::eq(a, b));
        assert!(!a.is_empty());
    }
}
