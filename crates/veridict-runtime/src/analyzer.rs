//! The evidence relevance analyzer.
//!
//! One analyzer holds one long-lived provider handle and is otherwise
//! stateless per call. Every failure past construction is absorbed into
//! the degraded fallback result; `analyze` never returns an error.

use std::sync::Arc;
use tracing::warn;

use veridict_core::{parse_verdict, AnalysisRequest, AnalysisResult};

use crate::prompts;
use crate::providers::{ChatMessage, CompletionConfig, LlmProvider, ProviderError};

#[cfg(feature = "openai")]
use crate::providers::OpenAiProvider;

/// Maps (evidence, statement, claimed side) to a structured verdict by
/// delegating the judgment to an LLM and validating what comes back.
pub struct EvidenceAnalyzer {
    provider: Arc<dyn LlmProvider>,
    config: CompletionConfig,
}

impl EvidenceAnalyzer {
    /// Create an analyzer over any provider.
    ///
    /// This is the constructor tests use with
    /// [`MockProvider`](crate::providers::MockProvider).
    pub fn with_provider(provider: Arc<dyn LlmProvider>, config: CompletionConfig) -> Self {
        Self { provider, config }
    }

    /// Create an analyzer over the OpenAI provider with an explicit key.
    #[cfg(feature = "openai")]
    pub fn from_api_key(api_key: impl Into<String>) -> Self {
        Self::with_provider(
            Arc::new(OpenAiProvider::new(api_key)),
            CompletionConfig::default(),
        )
    }

    /// Create an analyzer resolving the key from `OPENAI_API_KEY`.
    ///
    /// A missing credential fails here, at construction, with
    /// [`ProviderError::NotConfigured`] — never at call time.
    #[cfg(feature = "openai")]
    pub fn from_env() -> Result<Self, ProviderError> {
        Ok(Self::with_provider(
            Arc::new(OpenAiProvider::from_env()?),
            CompletionConfig::default(),
        ))
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Whether the underlying provider reports healthy.
    pub async fn health_check(&self) -> bool {
        self.provider.health_check().await
    }

    /// Analyze one piece of evidence against a statement.
    ///
    /// Always returns a populated result. Transport, authentication,
    /// rate-limit and malformed-response failures all collapse into the
    /// fallback shape (NOT_EVIDENCE, confidence 0, no quality score, a
    /// cause-specific reasoning string) with the inputs echoed back.
    pub async fn analyze(
        &self,
        evidence: &str,
        statement: &str,
        claimed_side: bool,
    ) -> AnalysisResult {
        self.analyze_request(&AnalysisRequest::new(evidence, statement, claimed_side))
            .await
    }

    /// [`analyze`](Self::analyze) over an owned request record.
    pub async fn analyze_request(&self, request: &AnalysisRequest) -> AnalysisResult {
        let messages = vec![
            ChatMessage::system(prompts::SYSTEM_PROMPT),
            ChatMessage::user(prompts::relevance_prompt(
                &request.statement,
                &request.evidence,
                request.claimed_side,
            )),
        ];

        let response = match self.provider.complete(messages, &self.config).await {
            Ok(response) => response,
            Err(error) => {
                warn!(provider = self.provider.name(), %error, "completion failed");
                return AnalysisResult::fallback(request, failure_reason(&error));
            }
        };

        match parse_verdict(response.content.trim()) {
            Ok(verdict) => AnalysisResult::from_verdict(verdict, request),
            Err(error) => {
                warn!(%error, raw = %response.content, "rejected model verdict");
                AnalysisResult::fallback(request, error.to_string())
            }
        }
    }

    /// Analyze a batch of requests, strictly one at a time.
    ///
    /// Results are positional: `result[i]` corresponds to `requests[i]`.
    /// One item hitting a failure path never aborts the rest.
    pub async fn batch_analyze(&self, requests: &[AnalysisRequest]) -> Vec<AnalysisResult> {
        let mut results = Vec::with_capacity(requests.len());
        for request in requests {
            results.push(self.analyze_request(request).await);
        }
        results
    }
}

/// One-shot convenience: build an analyzer and analyze a single item.
///
/// With `api_key = None` the key is resolved from `OPENAI_API_KEY`.
#[cfg(feature = "openai")]
pub async fn analyze_evidence(
    evidence: &str,
    statement: &str,
    claimed_side: bool,
    api_key: Option<&str>,
) -> Result<AnalysisResult, ProviderError> {
    let analyzer = match api_key {
        Some(key) => EvidenceAnalyzer::from_api_key(key),
        None => EvidenceAnalyzer::from_env()?,
    };
    Ok(analyzer.analyze(evidence, statement, claimed_side).await)
}

/// Cause-specific reasoning for provider failures.
fn failure_reason(error: &ProviderError) -> String {
    match error {
        ProviderError::AuthError(message) => format!("Authentication error: {message}"),
        ProviderError::RateLimited {
            retry_after: Some(after),
        } => format!("Rate limit exceeded, retry after {after:?}"),
        ProviderError::RateLimited { retry_after: None } => "Rate limit exceeded".to_string(),
        ProviderError::ApiError { status, message } => format!("API error ({status}): {message}"),
        ProviderError::Timeout(timeout) => format!("Request timed out after {timeout:?}"),
        ProviderError::HttpError(message) => format!("Transport error: {message}"),
        ProviderError::ParseError(message) => format!("Malformed completion: {message}"),
        ProviderError::NotConfigured(message) => format!("Provider not configured: {message}"),
    }
}
