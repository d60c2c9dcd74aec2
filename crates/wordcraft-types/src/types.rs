use serde::{Deserialize, Serialize};

/// Maximum number of synonyms kept on a flashcard
pub const MAX_SYNONYMS: usize = 5;

/// Closed set of grammatical categories the app knows how to label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Adjective,
    Adverb,
    Verb,
    Noun,
    Pronoun,
    Preposition,
    Conjunction,
    Interjection,
    Unknown,
}

impl PartOfSpeech {
    /// Map a raw dictionary tag, unrecognized tags become `Unknown`
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "adjective" => PartOfSpeech::Adjective,
            "adverb" => PartOfSpeech::Adverb,
            "verb" => PartOfSpeech::Verb,
            "noun" => PartOfSpeech::Noun,
            "pronoun" => PartOfSpeech::Pronoun,
            "preposition" => PartOfSpeech::Preposition,
            "conjunction" => PartOfSpeech::Conjunction,
            "interjection" => PartOfSpeech::Interjection,
            _ => PartOfSpeech::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Unknown => "unknown",
        }
    }

    /// Indonesian display label
    pub fn label(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "Kata Benda",
            PartOfSpeech::Verb => "Kata Kerja",
            PartOfSpeech::Adjective => "Kata Sifat",
            PartOfSpeech::Adverb => "Kata Keterangan",
            PartOfSpeech::Pronoun => "Kata Ganti",
            PartOfSpeech::Preposition => "Kata Depan",
            PartOfSpeech::Conjunction => "Kata Hubung",
            PartOfSpeech::Interjection => "Kata Seru",
            PartOfSpeech::Unknown => "Tak Diketahui",
        }
    }

    /// Display priority (lower sorts first)
    pub fn priority(&self) -> u8 {
        match self {
            PartOfSpeech::Adjective => 0,
            PartOfSpeech::Adverb => 1,
            PartOfSpeech::Verb => 2,
            PartOfSpeech::Noun => 3,
            PartOfSpeech::Pronoun => 4,
            PartOfSpeech::Preposition => 5,
            PartOfSpeech::Conjunction => 6,
            PartOfSpeech::Interjection => 7,
            PartOfSpeech::Unknown => 8,
        }
    }
}

/// One translated sense of a word, as cached in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Raw lowercased tag from the dictionary, kept even when unrecognized
    pub pos_eng: String,
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,
    pub definition: String,
    #[serde(default)]
    pub example_en: String,
    #[serde(default)]
    pub example_id: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl Definition {
    pub fn pos(&self) -> PartOfSpeech {
        PartOfSpeech::from_tag(&self.pos_eng)
    }

    pub fn has_example(&self) -> bool {
        !self.example_en.is_empty()
    }
}

/// A saved snapshot of a word for later review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub word: String,
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,
    pub definition: String,
    #[serde(default)]
    pub example_en: String,
    #[serde(default)]
    pub example_id: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    pub singular: String,
    pub plural: String,
}

impl Flashcard {
    /// Build a card from a definition, synonyms are capped at `MAX_SYNONYMS`
    pub fn from_definition(word: &str, definition: &Definition, singular: &str, plural: &str) -> Self {
        Self {
            word: word.to_string(),
            part_of_speech: definition.part_of_speech.clone(),
            definition: definition.definition.clone(),
            example_en: definition.example_en.clone(),
            example_id: definition.example_id.clone(),
            synonyms: definition.synonyms.iter().take(MAX_SYNONYMS).cloned().collect(),
            singular: singular.to_string(),
            plural: plural.to_string(),
        }
    }

    pub fn has_example(&self) -> bool {
        !self.example_en.is_empty()
    }
}
