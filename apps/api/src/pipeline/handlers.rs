//! Axum route handlers for the evaluation API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::grading::models::{FeedbackLine, GradeReport};
use crate::pipeline::{Evaluation, Structuring};
use crate::resume::models::StructuredResume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GradeRequest {
    pub structured_resume: StructuredResume,
    #[serde(default)]
    pub field_of_interest: String,
}

#[derive(Debug, Serialize)]
pub struct GradeResponse {
    pub grade_report: GradeReport,
    pub breakdown: Vec<FeedbackLine>,
}

/// The multipart form the upload endpoints accept.
struct Upload {
    document: Bytes,
    field_of_interest: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/evaluate
///
/// Multipart: `file` (PDF) and optional `field_of_interest`.
/// Runs extract → structure → grade and returns both JSON artifacts.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Evaluation>, AppError> {
    let upload = read_upload(multipart).await?;
    let evaluation = state
        .pipeline
        .evaluate(upload.document, &upload.field_of_interest)
        .await?;
    Ok(Json(evaluation))
}

/// POST /api/v1/resumes/structure
///
/// Multipart: `file` (PDF). Returns the structured résumé without grading it.
pub async fn handle_structure(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Structuring>, AppError> {
    let upload = read_upload(multipart).await?;
    let structuring = state.pipeline.structure(upload.document).await?;
    Ok(Json(structuring))
}

/// POST /api/v1/resumes/grade
///
/// Grades an already structured résumé against a field of interest.
pub async fn handle_grade(
    State(state): State<AppState>,
    Json(request): Json<GradeRequest>,
) -> Result<Json<GradeResponse>, AppError> {
    let grade_report = state
        .pipeline
        .grader()
        .grade(&request.structured_resume, &request.field_of_interest)
        .await?;
    Ok(Json(GradeResponse {
        breakdown: grade_report.breakdown(),
        grade_report,
    }))
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload, AppError> {
    let mut document = None;
    let mut field_of_interest = String::new();

    while let Some(part) = multipart.next_field().await? {
        let name = part.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => document = Some(part.bytes().await?),
            Some("field_of_interest") => field_of_interest = part.text().await?,
            _ => {}
        }
    }

    let document =
        document.ok_or_else(|| AppError::Validation("multipart field 'file' is required".to_string()))?;
    if document.is_empty() {
        return Err(AppError::Validation("uploaded file is empty".to_string()));
    }

    Ok(Upload {
        document,
        field_of_interest,
    })
}
