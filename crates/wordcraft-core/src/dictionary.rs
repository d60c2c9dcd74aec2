use serde::Deserialize;

/// Remote dictionary lookup
#[async_trait::async_trait]
pub trait DictionarySource: Send + Sync {
    /// Fetch raw entries for a word, an empty result is reported as `NotFound`
    async fn fetch(&self, word: &str) -> Result<Vec<RawEntry>, DictionaryError>;

    /// Source name for logs
    fn name(&self) -> &str;
}

/// One headword as returned by the lookup service
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub meanings: Vec<RawMeaning>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMeaning {
    #[serde(rename = "partOfSpeech", default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Vec<RawSense>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSense {
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub synonyms: Vec<String>,
}

impl RawMeaning {
    /// Trimmed, lowercased tag, `"unknown"` when the service omits it
    pub fn tag(&self) -> String {
        self.part_of_speech
            .as_deref()
            .map(|tag| tag.trim().to_lowercase())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Word not found: {0}")]
    NotFound(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
