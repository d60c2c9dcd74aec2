use std::sync::Arc;

use wordcraft_translator::Translator;
use wordcraft_types::{Definition, PartOfSpeech};

use crate::dictionary::{DictionaryError, DictionarySource, RawEntry};
use crate::error::StoreError;
use crate::preprocess::cache_key;
use crate::store::Store;

/// Result of resolving a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Served from the store, no network involved
    Cached(Vec<Definition>),
    /// Fetched, translated and written through to the store
    Fetched(Vec<Definition>),
    /// No definition available
    Missing(MissReason),
}

/// Why a lookup produced nothing. Both cases are shown to the user as "not found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissReason {
    NotFound,
    Unavailable(String),
}

impl Lookup {
    pub fn definitions(&self) -> Option<&[Definition]> {
        match self {
            Lookup::Cached(defs) | Lookup::Fetched(defs) => Some(defs),
            Lookup::Missing(_) => None,
        }
    }

    /// Highest-priority definition, used as the canonical display entry
    pub fn primary(&self) -> Option<&Definition> {
        self.definitions().and_then(|defs| defs.first())
    }

    /// True only when this call hit the network and populated the cache
    pub fn is_fresh(&self) -> bool {
        matches!(self, Lookup::Fetched(_))
    }
}

/// Cache lookup -> dictionary fetch -> translation -> priority sort -> write-through
pub struct DefinitionResolver {
    dictionary: Arc<dyn DictionarySource>,
    translator: Arc<dyn Translator>,
    from_lang: String,
    to_lang: String,
}

impl DefinitionResolver {
    pub fn new(dictionary: Arc<dyn DictionarySource>, translator: Arc<dyn Translator>) -> Self {
        Self {
            dictionary,
            translator,
            from_lang: "en".to_string(),
            to_lang: "id".to_string(),
        }
    }

    pub fn with_languages(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from_lang = from.into();
        self.to_lang = to.into();
        self
    }

    pub async fn resolve(&self, word: &str, store: &mut Store) -> Result<Lookup, StoreError> {
        let key = cache_key(word);

        if let Some(cached) = store.cached(&key) {
            tracing::debug!("Cache hit for '{}'", key);
            return Ok(Lookup::Cached(cached.to_vec()));
        }

        let entries = match self.dictionary.fetch(&key).await {
            Ok(entries) => entries,
            Err(DictionaryError::NotFound(_)) => {
                tracing::info!("'{}' not found in {}", key, self.dictionary.name());
                return Ok(Lookup::Missing(MissReason::NotFound));
            }
            Err(e) => {
                tracing::warn!("{} lookup for '{}' failed: {}", self.dictionary.name(), key, e);
                return Ok(Lookup::Missing(MissReason::Unavailable(e.to_string())));
            }
        };

        // Only the first headword is used
        let Some(entry) = entries.first() else {
            return Ok(Lookup::Missing(MissReason::NotFound));
        };

        let mut definitions = self.translate_entry(entry).await;
        sort_by_priority(&mut definitions);

        tracing::info!("Caching {} definitions for '{}'", definitions.len(), key);
        store.cache_definitions(&key, definitions.clone())?;

        Ok(Lookup::Fetched(definitions))
    }

    async fn translate_entry(&self, entry: &RawEntry) -> Vec<Definition> {
        let mut definitions = Vec::new();

        for meaning in &entry.meanings {
            let pos_eng = meaning.tag();
            let label = PartOfSpeech::from_tag(&pos_eng).label();

            for sense in &meaning.definitions {
                let en_def = sense.definition.clone().unwrap_or_default();
                let en_ex = sense.example.clone().unwrap_or_default();

                let id_def = self
                    .translator
                    .translate_or_original(&en_def, &self.from_lang, &self.to_lang)
                    .await;
                let id_ex = if en_ex.is_empty() {
                    String::new()
                } else {
                    self.translator
                        .translate_or_original(&en_ex, &self.from_lang, &self.to_lang)
                        .await
                };

                definitions.push(Definition {
                    pos_eng: pos_eng.clone(),
                    part_of_speech: label.to_string(),
                    definition: id_def,
                    example_en: en_ex,
                    example_id: id_ex,
                    synonyms: sense.synonyms.clone(),
                });
            }
        }

        definitions
    }
}

/// Stable sort, equal priorities keep dictionary order
pub fn sort_by_priority(definitions: &mut [Definition]) {
    definitions.sort_by_key(|d| d.pos().priority());
}
