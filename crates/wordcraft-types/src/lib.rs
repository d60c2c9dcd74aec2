pub mod types;

pub use types::{Definition, Flashcard, PartOfSpeech, MAX_SYNONYMS};
