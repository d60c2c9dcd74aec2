pub mod dictionary;
pub mod error;
pub mod flashcards;
pub mod preprocess;
pub mod resolver;
pub mod store;

pub use dictionary::{DictionaryError, DictionarySource, RawEntry, RawMeaning, RawSense};
pub use error::StoreError;
pub use flashcards::{AddOutcome, add_flashcard, contains};
pub use resolver::{DefinitionResolver, Lookup, MissReason};
pub use store::{Store, StoreData};
