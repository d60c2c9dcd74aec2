use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("data_store.json")
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON document holding the definition cache and flashcards
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new() -> Self {
        let path = env::var("WORDCRAFT_STORE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_path());

        Self { path }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
