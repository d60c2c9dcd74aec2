pub mod inflection;
pub mod translator;

pub use inflection::{EnglishInflector, WordForms};
pub use translator::GoogleTranslator;
