use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::store::StoreConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod store;
pub mod translator;

fn default_timeout_seconds() -> u64 {
    5
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub translator: TranslatorConfig,
    pub store: StoreConfig,

    /// Per-request timeout for both HTTP services
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let timeout_seconds = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Config {
            dictionary: DictionaryConfig::new(),
            translator: TranslatorConfig::new(),
            store: StoreConfig::new(),

            timeout_seconds,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            translator: TranslatorConfig::default(),
            store: StoreConfig::default(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "dictionary": { "api_key": "secret" } }"#).unwrap();

        assert_eq!(config.dictionary.api_key, "secret");
        assert_eq!(config.dictionary.api_url, "https://api.example.com");
        assert_eq!(config.translator.to_lang, "id");
        assert!(config.translator.enabled);
        assert_eq!(config.store.path.to_str(), Some("data_store.json"));
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn endpoint_urls_ignore_trailing_slash() {
        let mut config = Config::default();
        config.dictionary.api_url = "http://localhost:9000/".to_string();
        config.translator.api_url = "http://localhost:9001".to_string();

        assert_eq!(config.dictionary.entries_url(), "http://localhost:9000/v1/entries");
        assert_eq!(
            config.translator.endpoint_url(),
            "http://localhost:9001/translate_a/single"
        );
    }
}
