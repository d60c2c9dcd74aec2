use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_from_lang() -> String {
    "en".to_string()
}

fn default_to_lang() -> String {
    "id".to_string()
}

fn default_api_url() -> String {
    "https://translate.googleapis.com".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let api_url = env::var("TRANSLATE_API_URL").unwrap_or_else(|_| default_api_url());

        Self {
            api_url,
            ..Self::default()
        }
    }

    pub fn endpoint_url(&self) -> String {
        format!("{}/translate_a/single", self.api_url.trim_end_matches('/'))
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            api_url: default_api_url(),
        }
    }
}
