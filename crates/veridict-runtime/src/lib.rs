//! # veridict-runtime
//!
//! LLM-assisted evidence relevance analysis for Veridict.
//!
//! This crate owns everything that touches a model: the provider
//! abstraction, the OpenAI implementation, the rubric prompt, and the
//! [`EvidenceAnalyzer`] that ties them together. The deterministic half
//! — record types and verdict validation — lives in `veridict-core`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use veridict_runtime::EvidenceAnalyzer;
//!
//! // Resolves the key from OPENAI_API_KEY; fails fast when absent.
//! let analyzer = EvidenceAnalyzer::from_env()?;
//!
//! let result = analyzer
//!     .analyze(
//!         "Study X (peer-reviewed, 2023) found vaccine efficacy of 94%",
//!         "Vaccines are effective",
//!         true,
//!     )
//!     .await;
//!
//! // Never an Err: failures surface as the fallback result shape.
//! println!("{} ({})", result.predicted_relationship, result.confidence);
//! ```

pub mod analyzer;
pub mod prompts;
pub mod providers;

// Re-export main types at crate root
pub use analyzer::EvidenceAnalyzer;
pub use providers::{
    ChatMessage, CompletionConfig, CompletionResponse, LlmProvider, MockProvider, ProviderError,
    TokenUsage,
};
pub use veridict_core::{AnalysisRequest, AnalysisResult, Relationship};

#[cfg(feature = "openai")]
pub use analyzer::analyze_evidence;
#[cfg(feature = "openai")]
pub use providers::{OpenAiProvider, OPENAI_API_KEY_ENV};
