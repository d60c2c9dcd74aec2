pub trait Preprocessor {
    // Default English preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        text.to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Key under which a word's definitions are cached
pub fn cache_key(word: &str) -> String {
    DefaultPreprocessor.process(word)
}
