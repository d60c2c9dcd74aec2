use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use wordcraft_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

/// Unauthenticated Google `gtx` endpoint
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleTranslator {
    /// `api_url` is the full `.../translate_a/single` endpoint
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, api_url })
    }
}

/// First translated segment of a `dt=t` response, `[0][0][0]`
pub fn first_segment(json: &serde_json::Value) -> Option<&str> {
    json.get(0)?.get(0)?.get(0)?.as_str()
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let params = [
            ("client", "gtx"),
            ("sl", from.as_str()),
            ("tl", to.as_str()),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self.client.get(&self.api_url).query(&params).send().await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslateError::RateLimitExceeded);
        }

        if response.status() != StatusCode::OK {
            return Err(TranslateError::Status(response.status().as_u16()));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        let translated_text = first_segment(&json)
            .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;

        Ok(Translation {
            text: translated_text.to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Translate".to_string(),
        }
    }
}
