use std::time::Duration;

use reqwest::StatusCode;
use wordcraft_core::dictionary::{DictionaryError, DictionarySource, RawEntry};

/// Keyed lookup service: `GET <entries_url>?key=<api_key>&query=<word>`
#[derive(Clone)]
pub struct ApiDictionary {
    entries_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl ApiDictionary {
    pub fn new(
        entries_url: String,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, DictionaryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DictionaryError::Network(e.to_string()))?;

        if api_key.is_empty() {
            tracing::warn!("Dictionary API key is empty, lookups will likely fail");
        }

        Ok(Self {
            entries_url,
            api_key,
            client,
        })
    }
}

#[async_trait::async_trait]
impl DictionarySource for ApiDictionary {
    async fn fetch(&self, word: &str) -> Result<Vec<RawEntry>, DictionaryError> {
        let response = self
            .client
            .get(&self.entries_url)
            .query(&[("key", self.api_key.as_str()), ("query", word)])
            .send()
            .await
            .map_err(|e| DictionaryError::Network(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Err(DictionaryError::NotFound(word.to_string())),
            status => return Err(DictionaryError::Status(status.as_u16())),
        }

        let body = response
            .text()
            .await
            .map_err(|e| DictionaryError::Network(e.to_string()))?;

        let entries: Vec<RawEntry> =
            serde_json::from_str(&body).map_err(|e| DictionaryError::Parse(e.to_string()))?;

        if entries.is_empty() {
            return Err(DictionaryError::NotFound(word.to_string()));
        }

        tracing::debug!("Fetched {} entries for '{}'", entries.len(), word);
        Ok(entries)
    }

    fn name(&self) -> &str {
        "dictionary API"
    }
}
