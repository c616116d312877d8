//! # veridict-core
//!
//! Domain types and verdict validation for Veridict evidence analysis.
//!
//! This crate answers one question deterministically: given a raw model
//! payload, is it a well-formed verdict about a piece of evidence?
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output
//! 2. **No LLM calls**: Validation is pure; the network lives in
//!    `veridict-runtime`
//! 3. **No best-effort repair**: An invalid payload is rejected wholesale,
//!    the only sanctioned mutation is the quality-score normalization
//!
//! ## Example
//!
//! ```rust
//! use veridict_core::{parse_verdict, Relationship};
//!
//! let raw = r#"{
//!     "predicted_relationship": "SUPPORT",
//!     "confidence": 0.9,
//!     "quality_score": 0.85,
//!     "reasoning": "Peer-reviewed study directly confirms the statement."
//! }"#;
//!
//! let verdict = parse_verdict(raw).unwrap();
//! assert_eq!(verdict.relationship, Relationship::Support);
//! assert_eq!(verdict.quality_score, Some(0.85));
//! ```

pub mod types;
pub mod verdict;

// Re-export main types at crate root
pub use types::{AnalysisRequest, AnalysisResult, Relationship, UnknownRelationship};
pub use verdict::{parse_verdict, Verdict, VerdictError};
