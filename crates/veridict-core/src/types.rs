//! Record types exchanged between callers and the analyzer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::verdict::Verdict;

/// The analyzer's determined relationship between evidence and statement.
///
/// This is the analyzer's own conclusion, not the submitter's claimed side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Relationship {
    /// Evidence provides facts or data that confirm the statement.
    Support,
    /// Evidence provides facts or data that contradict the statement.
    Oppose,
    /// Evidence is about a completely different topic with no connection
    /// to the statement.
    Unrelated,
    /// Personal opinion or unsupported claim that does not qualify as
    /// evidence at all.
    NotEvidence,
}

impl Relationship {
    /// All variants, in wire order.
    pub const ALL: [Relationship; 4] = [
        Relationship::Support,
        Relationship::Oppose,
        Relationship::Unrelated,
        Relationship::NotEvidence,
    ];

    /// Wire spelling of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Support => "SUPPORT",
            Relationship::Oppose => "OPPOSE",
            Relationship::Unrelated => "UNRELATED",
            Relationship::NotEvidence => "NOT_EVIDENCE",
        }
    }

    /// Whether this relationship admits a quality score.
    ///
    /// Quality is defined only for evidence that actually takes a side.
    pub fn scores_quality(&self) -> bool {
        matches!(self, Relationship::Support | Relationship::Oppose)
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not spell a known relationship.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown relationship: {0}")]
pub struct UnknownRelationship(pub String);

impl FromStr for Relationship {
    type Err = UnknownRelationship;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUPPORT" => Ok(Relationship::Support),
            "OPPOSE" => Ok(Relationship::Oppose),
            "UNRELATED" => Ok(Relationship::Unrelated),
            "NOT_EVIDENCE" => Ok(Relationship::NotEvidence),
            other => Err(UnknownRelationship(other.to_string())),
        }
    }
}

/// One piece of evidence submitted for analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Free-text evidence, possibly containing URLs.
    pub evidence: String,

    /// The statement being fact-checked.
    pub statement: String,

    /// True when the submitter claims the evidence supports the statement,
    /// false when it claims to oppose it.
    pub claimed_side: bool,
}

impl AnalysisRequest {
    /// Create a new request.
    pub fn new(
        evidence: impl Into<String>,
        statement: impl Into<String>,
        claimed_side: bool,
    ) -> Self {
        Self {
            evidence: evidence.into(),
            statement: statement.into(),
            claimed_side,
        }
    }

    /// Human-readable label of the submitter's claimed position.
    pub fn side_label(&self) -> &'static str {
        if self.claimed_side {
            "SUPPORT"
        } else {
            "OPPOSE"
        }
    }
}

/// The outcome of analyzing one piece of evidence.
///
/// Immutable once produced. The three input fields are echoed verbatim so
/// downstream consumers can correlate results without holding the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The analyzer's determined relationship.
    pub predicted_relationship: Relationship,

    /// Confidence in the determination, in [0, 1].
    pub confidence: f64,

    /// Evidentiary quality in [0, 1]; `None` unless the relationship is
    /// SUPPORT or OPPOSE.
    pub quality_score: Option<f64>,

    /// Free-text explanation of the determination.
    pub reasoning: String,

    /// Echoed from the request.
    pub evidence: String,

    /// Echoed from the request.
    pub statement: String,

    /// Echoed from the request.
    pub claimed_side: bool,
}

impl AnalysisResult {
    /// Assemble a result from a validated verdict plus the originating request.
    pub fn from_verdict(verdict: Verdict, request: &AnalysisRequest) -> Self {
        Self {
            predicted_relationship: verdict.relationship,
            confidence: verdict.confidence,
            quality_score: verdict.quality_score,
            reasoning: verdict.reasoning,
            evidence: request.evidence.clone(),
            statement: request.statement.clone(),
            claimed_side: request.claimed_side,
        }
    }

    /// Degraded result returned when analysis fails for any reason.
    ///
    /// Distinguishable from a genuine NOT_EVIDENCE verdict by a confidence
    /// of exactly zero plus a cause-specific reasoning string.
    pub fn fallback(request: &AnalysisRequest, reasoning: impl Into<String>) -> Self {
        Self {
            predicted_relationship: Relationship::NotEvidence,
            confidence: 0.0,
            quality_score: None,
            reasoning: reasoning.into(),
            evidence: request.evidence.clone(),
            statement: request.statement.clone(),
            claimed_side: request.claimed_side,
        }
    }

    /// Whether this result is the degraded fallback shape.
    pub fn is_fallback(&self) -> bool {
        self.predicted_relationship == Relationship::NotEvidence && self.confidence == 0.0
    }
}
