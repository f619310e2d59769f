//! Evaluation pipeline — extract → structure → grade, strictly in sequence.
//!
//! Each submission is an isolated run: no state survives between calls, and
//! a failing stage stops the run before the next stage starts.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::extraction::{extract_text, DocumentReadError, ExtractedText};
use crate::grading::grader::ResumeGrader;
use crate::grading::models::{FeedbackLine, GradeReport};
use crate::llm_client::prompts::TemplateError;
use crate::llm_client::{Completion, LlmError};
use crate::resume::grounding::unverified_fields;
use crate::resume::models::StructuredResume;
use crate::resume::structurer::ResumeStructurer;

pub mod handlers;
pub mod invoke;

/// Which LLM stage produced a malformed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Structure,
    Grade,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Structure => f.write_str("structure"),
            Stage::Grade => f.write_str("grade"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    DocumentRead(#[from] DocumentReadError),

    #[error("malformed {stage} response: {reason}")]
    MalformedResponse { stage: Stage, reason: String },

    #[error("upstream completion failed: {0}")]
    Upstream(#[from] LlmError),

    #[error("prompt rendering failed: {0}")]
    Template(#[from] TemplateError),
}

impl PipelineError {
    pub fn malformed(stage: Stage, reason: impl Into<String>) -> Self {
        PipelineError::MalformedResponse {
            stage,
            reason: reason.into(),
        }
    }
}

/// Everything one submission produces.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub submission_id: Uuid,
    pub structured_resume: StructuredResume,
    /// Contact fields the model filled in that the source text does not contain.
    pub unverified_fields: Vec<String>,
    pub grade_report: GradeReport,
    pub breakdown: Vec<FeedbackLine>,
    pub timings: StageTimings,
    pub completed_at: DateTime<Utc>,
}

/// Result of extract + structure only.
#[derive(Debug, Clone, Serialize)]
pub struct Structuring {
    pub submission_id: Uuid,
    pub structured_resume: StructuredResume,
    pub unverified_fields: Vec<String>,
    pub timings: StageTimings,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct StageTimings {
    pub extract_ms: u64,
    pub structure_ms: u64,
    pub grade_ms: u64,
    pub total_ms: u64,
}

/// Owns both LLM stages. Cheap to share behind an `Arc`; holds no per-run state.
pub struct EvaluationPipeline {
    structurer: ResumeStructurer,
    grader: ResumeGrader,
}

impl EvaluationPipeline {
    pub fn new(llm: Arc<dyn Completion>) -> Self {
        Self {
            structurer: ResumeStructurer::new(llm.clone()),
            grader: ResumeGrader::new(llm),
        }
    }

    pub fn grader(&self) -> &ResumeGrader {
        &self.grader
    }

    /// Full run: PDF bytes and a field of interest in, evaluation out.
    pub async fn evaluate(
        &self,
        document: Bytes,
        field_of_interest: &str,
    ) -> Result<Evaluation, PipelineError> {
        let submission_id = Uuid::new_v4();
        self.run_evaluation(submission_id, document, field_of_interest)
            .instrument(info_span!("evaluate", %submission_id))
            .await
    }

    /// Extract + structure, without grading.
    pub async fn structure(&self, document: Bytes) -> Result<Structuring, PipelineError> {
        let submission_id = Uuid::new_v4();
        self.run_structuring(submission_id, document)
            .instrument(info_span!("structure", %submission_id))
            .await
    }

    async fn run_evaluation(
        &self,
        submission_id: Uuid,
        document: Bytes,
        field_of_interest: &str,
    ) -> Result<Evaluation, PipelineError> {
        let started = Instant::now();
        let mut timings = StageTimings::default();

        let text = extract_off_runtime(document, &mut timings).await?;
        let structuring = self.structure_text(submission_id, &text, &mut timings).await?;

        let stage_start = Instant::now();
        let grade_report = self
            .grader
            .grade(&structuring.structured_resume, field_of_interest)
            .await?;
        timings.grade_ms = elapsed_ms(stage_start);
        timings.total_ms = elapsed_ms(started);

        info!(
            "Evaluation complete: score={} improved_score={} in {}ms",
            grade_report.score, grade_report.improved_score, timings.total_ms
        );

        Ok(Evaluation {
            submission_id,
            breakdown: grade_report.breakdown(),
            structured_resume: structuring.structured_resume,
            unverified_fields: structuring.unverified_fields,
            grade_report,
            timings,
            completed_at: Utc::now(),
        })
    }

    async fn run_structuring(
        &self,
        submission_id: Uuid,
        document: Bytes,
    ) -> Result<Structuring, PipelineError> {
        let started = Instant::now();
        let mut timings = StageTimings::default();
        let text = extract_off_runtime(document, &mut timings).await?;
        let mut structuring = self.structure_text(submission_id, &text, &mut timings).await?;
        structuring.timings.total_ms = elapsed_ms(started);
        Ok(structuring)
    }

    async fn structure_text(
        &self,
        submission_id: Uuid,
        text: &ExtractedText,
        timings: &mut StageTimings,
    ) -> Result<Structuring, PipelineError> {
        info!(
            "Extracted {} page(s) in {}ms",
            text.page_count(),
            timings.extract_ms
        );
        if text.is_empty() {
            warn!("Document has no extractable text; structuring an empty resume body");
        }

        let stage_start = Instant::now();
        let structured_resume = self.structurer.structure(text).await?;
        timings.structure_ms = elapsed_ms(stage_start);

        let unverified = unverified_fields(&structured_resume, text.as_str());
        if !unverified.is_empty() {
            warn!("Fields not found in source text: {}", unverified.join(", "));
        }

        Ok(Structuring {
            submission_id,
            structured_resume,
            unverified_fields: unverified,
            timings: *timings,
        })
    }
}

/// PDF decoding is CPU-bound, so it runs on the blocking pool. A decoder
/// panic surfaces as an unreadable document.
async fn extract_off_runtime(
    document: Bytes,
    timings: &mut StageTimings,
) -> Result<ExtractedText, PipelineError> {
    let start = Instant::now();
    let text = tokio::task::spawn_blocking(move || extract_text(&document))
        .await
        .map_err(|e| DocumentReadError::new(format!("PDF decoder aborted: {e}")))??;
    timings.extract_ms = elapsed_ms(start);
    Ok(text)
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis().try_into().unwrap_or(u64::MAX)
}
