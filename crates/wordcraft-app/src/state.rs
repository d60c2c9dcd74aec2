use std::sync::Arc;

use anyhow::Context;
use wordcraft_config::Config;
use wordcraft_core::{DefinitionResolver, Store};
use wordcraft_dictionary::ApiDictionary;
use wordcraft_lang_english::{EnglishInflector, GoogleTranslator};
use wordcraft_translator::{IdentityTranslator, Translator};

/// Everything a command needs, owned in one place and passed down by reference
pub struct AppState {
    pub store: Store,
    pub resolver: DefinitionResolver,
    pub inflector: EnglishInflector,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::load(&config.store.path).context("Failed to load store")?;

        let dictionary = ApiDictionary::new(
            config.dictionary.entries_url(),
            config.dictionary.api_key.clone(),
            config.timeout(),
        )
        .context("Failed to build dictionary client")?;

        let translator: Arc<dyn Translator> = if config.translator.enabled {
            Arc::new(
                GoogleTranslator::new(config.translator.endpoint_url(), config.timeout())
                    .context("Failed to build translator")?,
            )
        } else {
            tracing::warn!("Translation disabled, definitions stay in English");
            Arc::new(IdentityTranslator)
        };

        let resolver = DefinitionResolver::new(Arc::new(dictionary), translator)
            .with_languages(&config.translator.from_lang, &config.translator.to_lang);

        Ok(Self::with_parts(store, resolver))
    }

    pub fn with_parts(store: Store, resolver: DefinitionResolver) -> Self {
        Self {
            store,
            resolver,
            inflector: EnglishInflector::new(),
        }
    }
}
