use wordcraft_types::{Definition, Flashcard};

use crate::error::StoreError;
use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// A card with the same word (ignoring case) is already saved, nothing changed
    AlreadyExists,
}

/// Case-insensitive check against saved cards
pub fn contains(store: &Store, word: &str) -> bool {
    let word = word.to_lowercase();
    store
        .flashcards()
        .iter()
        .any(|card| card.word.to_lowercase() == word)
}

/// Save `definition` as a flashcard for `word` unless one already exists
pub fn add_flashcard(
    store: &mut Store,
    word: &str,
    definition: &Definition,
    singular: &str,
    plural: &str,
) -> Result<AddOutcome, StoreError> {
    if contains(store, word) {
        tracing::info!("Flashcard for '{}' already exists", word);
        return Ok(AddOutcome::AlreadyExists);
    }

    let card = Flashcard::from_definition(word, definition, singular, plural);
    store.push_flashcard(card)?;
    tracing::info!("Added flashcard for '{}'", word);

    Ok(AddOutcome::Added)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition() -> Definition {
        Definition {
            pos_eng: "noun".to_string(),
            part_of_speech: "Kata Benda".to_string(),
            definition: "kucing".to_string(),
            example_en: "The cat sleeps".to_string(),
            example_id: "Kucing itu tidur".to_string(),
            synonyms: ["feline", "kitty", "puss", "tabby", "tomcat", "mouser"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    #[test]
    fn same_word_is_added_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::load(dir.path().join("data_store.json")).unwrap();

        let first = add_flashcard(&mut store, "Cat", &definition(), "cat", "cats").unwrap();
        let second = add_flashcard(&mut store, "cAT", &definition(), "cat", "cats").unwrap();

        assert_eq!(first, AddOutcome::Added);
        assert_eq!(second, AddOutcome::AlreadyExists);
        assert_eq!(store.flashcards().len(), 1);
        assert_eq!(store.flashcards()[0].word, "Cat");

        let reloaded = Store::load(store.path()).unwrap();
        assert_eq!(reloaded.flashcards().len(), 1);
    }

    #[test]
    fn retry_after_failed_write_adds_the_card() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        let mut store = Store::load(nested.join("data_store.json")).unwrap();

        assert!(add_flashcard(&mut store, "cat", &definition(), "cat", "cats").is_err());
        assert!(!contains(&store, "cat"));

        std::fs::create_dir(&nested).unwrap();
        let outcome = add_flashcard(&mut store, "cat", &definition(), "cat", "cats").unwrap();

        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(Store::load(store.path()).unwrap().flashcards().len(), 1);
    }

    #[test]
    fn saved_card_keeps_five_synonyms() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::load(dir.path().join("data_store.json")).unwrap();

        add_flashcard(&mut store, "cat", &definition(), "cat", "cats").unwrap();

        let card = &store.flashcards()[0];
        assert_eq!(card.synonyms.len(), 5);
        assert_eq!(card.part_of_speech, "Kata Benda");
        assert_eq!(card.singular, "cat");
        assert_eq!(card.plural, "cats");
        assert!(contains(&store, "CAT"));
        assert!(!contains(&store, "dog"));
    }
}
