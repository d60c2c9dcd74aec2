pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;

    /// Best-effort translation: empty input short-circuits, any failure yields `text` unchanged
    async fn translate_or_original(&self, text: &str, from: &str, to: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        match self.translate(text, from.to_string(), to.to_string()).await {
            Ok(translation) => translation.text,
            Err(e) => {
                tracing::warn!(
                    "{} translation failed, keeping source text: {}",
                    self.metadata().name,
                    e
                );
                text.to_string()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Returns the input untouched, used when translation is turned off
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

#[async_trait::async_trait]
impl Translator for IdentityTranslator {
    async fn translate(
        &self,
        text: &str,
        _from: LanguageCode,
        _to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        Ok(Translation {
            text: text.to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "identity".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct FailingTranslator {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Translator for FailingTranslator {
        async fn translate(
            &self,
            _text: &str,
            _from: LanguageCode,
            _to: LanguageCode,
        ) -> Result<Translation, TranslateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(TranslateError::Status(503))
        }

        fn metadata(&self) -> ProviderMetadata {
            ProviderMetadata {
                name: "failing".to_string(),
            }
        }
    }

    #[tokio::test]
    async fn failure_returns_source_text() {
        let translator = FailingTranslator {
            calls: AtomicUsize::new(0),
        };

        let text = translator
            .translate_or_original("good looking", "en", "id")
            .await;

        assert_eq!(text, "good looking");
        assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_input_skips_provider() {
        let translator = FailingTranslator {
            calls: AtomicUsize::new(0),
        };

        let text = translator.translate_or_original("", "en", "id").await;

        assert_eq!(text, "");
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn identity_passes_through() {
        let text = IdentityTranslator
            .translate_or_original("a definition", "en", "id")
            .await;
        assert_eq!(text, "a definition");
    }
}
