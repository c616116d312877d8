//! HTTP request handlers for the analyzer service.
//!
//! Implements the analyze, batch-analyze and health endpoints using axum.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use veridict_core::{AnalysisRequest, AnalysisResult};
use veridict_runtime::EvidenceAnalyzer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The long-lived analyzer, reused across requests
    pub analyzer: Arc<EvidenceAnalyzer>,
}

/// Body of `POST /api/batch-analyze`.
#[derive(Debug, Deserialize)]
pub struct BatchAnalyzeRequest {
    /// Items to analyze, in submission order
    pub evidence_list: Vec<AnalysisRequest>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: String,
    /// Name of the configured LLM provider
    pub provider: String,
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze))
        .route("/api/batch-analyze", post(batch_analyze))
        .route("/health", get(health))
        .with_state(state)
}

/// POST /api/analyze - Analyze a single piece of evidence.
///
/// Analysis never fails: degraded upstream conditions surface inside the
/// result record, so this handler always answers 200 to a well-formed
/// body.
async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Json<AnalysisResult> {
    tracing::info!(statement = %request.statement, "analyze request");
    Json(state.analyzer.analyze_request(&request).await)
}

/// POST /api/batch-analyze - Analyze evidence items in submission order.
async fn batch_analyze(
    State(state): State<AppState>,
    Json(request): Json<BatchAnalyzeRequest>,
) -> Json<Vec<AnalysisResult>> {
    tracing::info!(items = request.evidence_list.len(), "batch analyze request");
    Json(state.analyzer.batch_analyze(&request.evidence_list).await)
}

/// GET /health - Service and provider health.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let healthy = state.analyzer.health_check().await;
    Json(HealthResponse {
        status: if healthy { "ok" } else { "degraded" }.to_string(),
        provider: state.analyzer.provider_name().to_string(),
    })
}
