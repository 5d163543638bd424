//! HTTP route handlers

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use tracing::info;

use crate::application::{calculate_score, group_findings, Analyzer};
use crate::config::Config;
use crate::domain::{Document, Finding};
use crate::infrastructure::{decode, validate, SpecFetcher};
use crate::presentation::errors::ApiError;
use crate::presentation::models::{
    AnalysisReport, FileAnalysisReport, GroupedAnalysisReport, HealthResponse, UrlAnalysisRequest,
};

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub fetcher: SpecFetcher,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            analyzer: Arc::new(Analyzer::new()),
            fetcher: SpecFetcher::new(Duration::from_secs(config.fetcher.timeout_seconds)),
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/analyze", post(analyze_text))
        .route("/analyze/file", post(analyze_file))
        .route("/analyze/url", post(analyze_url))
        .with_state(state)
}

/// GET / - Liveness probe
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::running())
}

/// POST /analyze - Analyze a raw specification body (JSON or YAML)
async fn analyze_text(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<AnalysisReport>, ApiError> {
    let (findings, score) = run_analysis(&state, &body)?;
    info!(total_issues = findings.len(), security_score = score, "analysis complete");
    Ok(Json(AnalysisReport::new(findings, score)))
}

/// POST /analyze/file - Analyze an uploaded specification file
async fn analyze_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<FileAnalysisReport>, ApiError> {
    let mut upload: Option<(String, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .unwrap_or("uploaded-spec")
                .to_string();
            let content = field
                .text()
                .await
                .map_err(|e| ApiError::BadRequest(format!("failed to read upload: {e}")))?;
            upload = Some((filename, content));
            break;
        }
    }

    let (filename, content) =
        upload.ok_or_else(|| ApiError::BadRequest("missing 'file' field".to_string()))?;

    let (findings, score) = run_analysis(&state, &content)?;
    info!(
        filename = %filename,
        total_issues = findings.len(),
        security_score = score,
        "file analysis complete"
    );
    Ok(Json(FileAnalysisReport::new(filename, findings, score)))
}

/// POST /analyze/url - Fetch a remote specification and return a grouped report
async fn analyze_url(
    State(state): State<AppState>,
    Json(request): Json<UrlAnalysisRequest>,
) -> Result<Json<GroupedAnalysisReport>, ApiError> {
    if request.url.trim().is_empty() {
        return Err(ApiError::BadRequest("url must not be empty".to_string()));
    }

    let body = state.fetcher.fetch(&request.url).await?;
    let (findings, score) = run_analysis(&state, &body)?;
    let grouped = group_findings(&findings);
    info!(
        url = %request.url,
        total_issues = findings.len(),
        grouped_issues = grouped.len(),
        security_score = score,
        "url analysis complete"
    );
    Ok(Json(GroupedAnalysisReport::new(findings, grouped, score)))
}

/// Decode, validate, and analyze one specification body.
fn run_analysis(state: &AppState, body: &str) -> Result<(Vec<Finding>, u8), ApiError> {
    let document = decode_and_validate(state, body)?;
    let findings = state.analyzer.analyze(&document);
    let score = calculate_score(&findings);
    Ok((findings, score))
}

fn decode_and_validate(state: &AppState, body: &str) -> Result<Document, ApiError> {
    let document = decode(body, state.config.analysis.max_document_depth)?;
    validate(&document)?;
    Ok(document)
}
