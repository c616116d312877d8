//! Parsing and validation of raw model verdict payloads.
//!
//! The model produces a verdict; this module decides whether to trust it.
//! If the payload is invalid, callers fall back — we never "best-effort
//! parse".

use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

use crate::types::Relationship;

/// Keys every verdict payload must carry.
const REQUIRED_KEYS: [&str; 4] = [
    "predicted_relationship",
    "confidence",
    "reasoning",
    "quality_score",
];

/// Errors from verdict validation.
///
/// Every variant carries the offending value so the cause survives into
/// the fallback result's reasoning.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VerdictError {
    #[error("failed to parse model response as JSON: {0}")]
    Json(String),

    #[error("missing required keys in response: {}", .0.join(", "))]
    MissingKeys(Vec<String>),

    #[error("invalid predicted_relationship: {0} (expected SUPPORT, OPPOSE, UNRELATED or NOT_EVIDENCE)")]
    InvalidRelationship(String),

    #[error("invalid confidence value: {0} (expected a number between 0 and 1)")]
    InvalidConfidence(String),

    #[error("invalid quality_score value: {0} (expected a number between 0 and 1, or null)")]
    InvalidQualityScore(String),
}

/// A validated verdict, before input metadata is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// The model's determined relationship.
    pub relationship: Relationship,

    /// Confidence in [0, 1].
    pub confidence: f64,

    /// Quality in [0, 1]; `None` for UNRELATED / NOT_EVIDENCE.
    pub quality_score: Option<f64>,

    /// The model's explanation.
    pub reasoning: String,
}

/// Parse and validate a raw model response against the verdict schema.
///
/// # Validation Steps
/// 1. The payload parses as a JSON object
/// 2. All four required keys are present
/// 3. `predicted_relationship` spells a known variant
/// 4. `confidence` and a non-null `quality_score` are numbers in [0, 1]
/// 5. Cross-field rule: a quality score on an UNRELATED / NOT_EVIDENCE
///    verdict is dropped with a warning; a missing one on SUPPORT /
///    OPPOSE is warned about but kept as-is
///
/// # On Failure
/// Callers MUST fall back to the degraded result shape.
pub fn parse_verdict(raw: &str) -> Result<Verdict, VerdictError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| VerdictError::Json(e.to_string()))?;
    let object = value
        .as_object()
        .ok_or_else(|| VerdictError::Json("expected a JSON object".to_string()))?;

    let missing: Vec<String> = REQUIRED_KEYS
        .iter()
        .filter(|key| !object.contains_key(**key))
        .map(|key| key.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(VerdictError::MissingKeys(missing));
    }

    let relationship = match &object["predicted_relationship"] {
        Value::String(s) => Relationship::from_str(s)
            .map_err(|_| VerdictError::InvalidRelationship(s.clone()))?,
        other => return Err(VerdictError::InvalidRelationship(other.to_string())),
    };

    let confidence = unit_interval(&object["confidence"])
        .ok_or_else(|| VerdictError::InvalidConfidence(object["confidence"].to_string()))?;

    let mut quality_score = match &object["quality_score"] {
        Value::Null => None,
        other => Some(
            unit_interval(other)
                .ok_or_else(|| VerdictError::InvalidQualityScore(other.to_string()))?,
        ),
    };

    // Quality is defined only for relationships that take a side.
    if relationship.scores_quality() {
        if quality_score.is_none() {
            tracing::warn!(%relationship, "quality_score missing for a scored relationship");
        }
    } else if quality_score.is_some() {
        tracing::warn!(%relationship, "quality_score present for an unscored relationship, dropping");
        quality_score = None;
    }

    let reasoning = match &object["reasoning"] {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    Ok(Verdict {
        relationship,
        confidence,
        quality_score,
        reasoning,
    })
}

/// Coerce a JSON value into an f64 within [0, 1].
///
/// Numeric strings are accepted; upstream models occasionally quote numbers.
fn unit_interval(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (0.0..=1.0).contains(&number).then_some(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn payload(relationship: &str, confidence: &str, quality: &str) -> String {
        format!(
            r#"{{
                "predicted_relationship": "{relationship}",
                "confidence": {confidence},
                "quality_score": {quality},
                "reasoning": "because"
            }}"#
        )
    }

    #[test]
    fn test_valid_support_verdict() {
        let verdict = parse_verdict(&payload("SUPPORT", "0.9", "0.85")).unwrap();

        assert_eq!(verdict.relationship, Relationship::Support);
        assert_eq!(verdict.confidence, 0.9);
        assert_eq!(verdict.quality_score, Some(0.85));
        assert_eq!(verdict.reasoning, "because");
    }

    #[test]
    fn test_valid_unrelated_verdict_with_null_quality() {
        let verdict = parse_verdict(&payload("UNRELATED", "0.7", "null")).unwrap();

        assert_eq!(verdict.relationship, Relationship::Unrelated);
        assert_eq!(verdict.quality_score, None);
    }

    #[test]
    fn test_quality_dropped_for_not_evidence() {
        // The model scored an opinion anyway; the score must not survive.
        let verdict = parse_verdict(&payload("NOT_EVIDENCE", "0.8", "0.3")).unwrap();

        assert_eq!(verdict.relationship, Relationship::NotEvidence);
        assert_eq!(verdict.confidence, 0.8);
        assert_eq!(verdict.quality_score, None);
    }

    #[test]
    fn test_missing_quality_kept_for_support() {
        let verdict = parse_verdict(&payload("SUPPORT", "0.9", "null")).unwrap();

        assert_eq!(verdict.relationship, Relationship::Support);
        assert_eq!(verdict.quality_score, None);
    }

    #[test]
    fn test_not_json() {
        let err = parse_verdict("I think it supports the claim").unwrap_err();
        assert!(matches!(err, VerdictError::Json(_)));
    }

    #[test]
    fn test_json_but_not_an_object() {
        let err = parse_verdict("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, VerdictError::Json(_)));
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[test]
    fn test_missing_keys_are_named() {
        let err = parse_verdict(r#"{"predicted_relationship": "SUPPORT", "confidence": 0.5}"#)
            .unwrap_err();

        match err {
            VerdictError::MissingKeys(keys) => {
                assert!(keys.contains(&"reasoning".to_string()));
                assert!(keys.contains(&"quality_score".to_string()));
                assert_eq!(keys.len(), 2);
            }
            other => panic!("expected MissingKeys, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_relationship_value() {
        let err = parse_verdict(&payload("MAYBE", "0.5", "null")).unwrap_err();
        assert_eq!(err, VerdictError::InvalidRelationship("MAYBE".to_string()));
    }

    #[test]
    fn test_non_string_relationship() {
        let raw = r#"{
            "predicted_relationship": 3,
            "confidence": 0.5,
            "quality_score": null,
            "reasoning": "r"
        }"#;
        let err = parse_verdict(raw).unwrap_err();
        assert!(matches!(err, VerdictError::InvalidRelationship(_)));
    }

    #[test]
    fn test_confidence_out_of_range() {
        let high = parse_verdict(&payload("SUPPORT", "1.5", "0.5")).unwrap_err();
        assert!(matches!(high, VerdictError::InvalidConfidence(_)));

        let low = parse_verdict(&payload("SUPPORT", "-0.2", "0.5")).unwrap_err();
        assert!(matches!(low, VerdictError::InvalidConfidence(_)));
    }

    #[test]
    fn test_confidence_not_numeric() {
        let err = parse_verdict(&payload("SUPPORT", "\"high\"", "0.5")).unwrap_err();
        assert!(matches!(err, VerdictError::InvalidConfidence(_)));
    }

    #[test]
    fn test_quality_out_of_range() {
        let err = parse_verdict(&payload("OPPOSE", "0.5", "1.2")).unwrap_err();
        assert!(matches!(err, VerdictError::InvalidQualityScore(_)));
    }

    #[test]
    fn test_numeric_strings_coerced() {
        // Quoted numbers coerce before range-checking.
        let verdict = parse_verdict(&payload("OPPOSE", "\"0.75\"", "\"0.4\"")).unwrap();

        assert_eq!(verdict.confidence, 0.75);
        assert_eq!(verdict.quality_score, Some(0.4));
    }

    #[test]
    fn test_boundary_values_accepted() {
        let zero = parse_verdict(&payload("UNRELATED", "0", "null")).unwrap();
        assert_eq!(zero.confidence, 0.0);

        let one = parse_verdict(&payload("SUPPORT", "1", "1")).unwrap();
        assert_eq!(one.confidence, 1.0);
        assert_eq!(one.quality_score, Some(1.0));
    }

    #[test]
    fn test_non_string_reasoning_rendered_as_json() {
        let raw = r#"{
            "predicted_relationship": "SUPPORT",
            "confidence": 0.5,
            "quality_score": 0.5,
            "reasoning": {"summary": "ok"}
        }"#;
        let verdict = parse_verdict(raw).unwrap();
        assert_eq!(verdict.reasoning, r#"{"summary":"ok"}"#);
    }

    proptest! {
        #[test]
        fn prop_in_range_confidence_accepted(confidence in 0.0f64..=1.0) {
            let raw = format!(
                r#"{{"predicted_relationship": "UNRELATED", "confidence": {confidence},
                    "quality_score": null, "reasoning": "r"}}"#
            );
            let verdict = parse_verdict(&raw).unwrap();
            prop_assert!((0.0..=1.0).contains(&verdict.confidence));
        }

        #[test]
        fn prop_out_of_range_confidence_rejected(
            confidence in prop_oneof![1.000001f64..1e6, -1e6f64..-0.000001]
        ) {
            let raw = format!(
                r#"{{"predicted_relationship": "UNRELATED", "confidence": {confidence},
                    "quality_score": null, "reasoning": "r"}}"#
            );
            prop_assert!(matches!(
                parse_verdict(&raw),
                Err(VerdictError::InvalidConfidence(_))
            ));
        }
    }
}
