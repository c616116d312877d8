//! Deterministic mock provider for testing.
//!
//! Returns pre-configured payloads without making any network calls.

use super::{ChatMessage, CompletionConfig, CompletionResponse, LlmProvider, ProviderError, TokenUsage};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;

/// Deterministic LLM provider for tests.
///
/// # Examples
///
/// ```
/// use veridict_runtime::providers::MockProvider;
///
/// // Same payload for every call
/// let provider = MockProvider::new(r#"{"answer": 42}"#);
///
/// // A different outcome per call, in order
/// let provider = MockProvider::scripted(vec![
///     Ok(r#"{"answer": 42}"#.to_string()),
///     Err(veridict_runtime::providers::ProviderError::AuthError("bad key".into())),
/// ]);
/// ```
pub struct MockProvider {
    fixed: Result<String, ProviderError>,
    script: Mutex<VecDeque<Result<String, ProviderError>>>,
    call_count: Mutex<usize>,
}

impl MockProvider {
    /// Provider returning the same content for every call.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            fixed: Ok(content.into()),
            script: Mutex::new(VecDeque::new()),
            call_count: Mutex::new(0),
        }
    }

    /// Provider failing every call with the given error.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            fixed: Err(error),
            script: Mutex::new(VecDeque::new()),
            call_count: Mutex::new(0),
        }
    }

    /// Provider that plays back the given outcomes, one per call.
    ///
    /// Calls past the end of the script fail with an `HttpError`.
    pub fn scripted(outcomes: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            fixed: Err(ProviderError::HttpError("mock script exhausted".to_string())),
            script: Mutex::new(outcomes.into()),
            call_count: Mutex::new(0),
        }
    }

    /// Number of `complete` calls made so far.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn complete(
        &self,
        _messages: Vec<ChatMessage>,
        config: &CompletionConfig,
    ) -> Result<CompletionResponse, ProviderError> {
        *self.call_count.lock() += 1;

        let outcome = self
            .script
            .lock()
            .pop_front()
            .unwrap_or_else(|| self.fixed.clone());

        outcome.map(|content| CompletionResponse {
            content,
            usage: TokenUsage::default(),
            model: config.model.clone(),
            stop_reason: Some("stop".to_string()),
        })
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_response() {
        let provider = MockProvider::new("payload");
        let config = CompletionConfig::default();

        let first = provider.complete(vec![], &config).await.unwrap();
        let second = provider.complete(vec![], &config).await.unwrap();

        assert_eq!(first.content, "payload");
        assert_eq!(second.content, "payload");
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_failing() {
        let provider = MockProvider::failing(ProviderError::AuthError("bad key".to_string()));
        let result = provider.complete(vec![], &CompletionConfig::default()).await;

        assert!(matches!(result, Err(ProviderError::AuthError(_))));
    }

    #[tokio::test]
    async fn test_scripted_outcomes_in_order() {
        let provider = MockProvider::scripted(vec![
            Ok("first".to_string()),
            Err(ProviderError::RateLimited { retry_after: None }),
            Ok("third".to_string()),
        ]);
        let config = CompletionConfig::default();

        assert_eq!(provider.complete(vec![], &config).await.unwrap().content, "first");
        assert!(matches!(
            provider.complete(vec![], &config).await,
            Err(ProviderError::RateLimited { .. })
        ));
        assert_eq!(provider.complete(vec![], &config).await.unwrap().content, "third");

        // Past the end of the script
        assert!(matches!(
            provider.complete(vec![], &config).await,
            Err(ProviderError::HttpError(_))
        ));
    }
}
