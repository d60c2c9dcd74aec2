use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.example.com".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Base URL of the keyed lookup service, `/v1/entries` is appended
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: String,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let api_url = env::var("DICTIONARY_API_URL").unwrap_or_else(|_| default_api_url());
        let api_key = env::var("DICTIONARY_API_KEY").unwrap_or_default();

        Self { api_url, api_key }
    }

    pub fn entries_url(&self) -> String {
        format!("{}/v1/entries", self.api_url.trim_end_matches('/'))
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
        }
    }
}
