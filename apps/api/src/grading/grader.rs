//! Resume Grader — structured résumé + field of interest in, `GradeReport` out.
//!
//! The model's score is trusted as-is: no client-side re-scoring, clamping
//! or reordering. Only the schema is enforced.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::grading::models::{GradeReport, FEEDBACK_CATEGORIES, MAX_SCORE, REQUIRED_REPORT_KEYS};
use crate::grading::prompts::RESUME_GRADE_TEMPLATE;
use crate::llm_client::Completion;
use crate::pipeline::invoke::{request_json_object, require_keys};
use crate::pipeline::{PipelineError, Stage};
use crate::resume::models::StructuredResume;

pub struct ResumeGrader {
    llm: Arc<dyn Completion>,
}

impl ResumeGrader {
    pub fn new(llm: Arc<dyn Completion>) -> Self {
        Self { llm }
    }

    pub async fn grade(
        &self,
        resume: &StructuredResume,
        field_of_interest: &str,
    ) -> Result<GradeReport, PipelineError> {
        let resume_json = serde_json::to_string_pretty(resume).map_err(|e| {
            PipelineError::malformed(Stage::Grade, format!("resume could not be serialized: {e}"))
        })?;
        let prompt = RESUME_GRADE_TEMPLATE.render(&[
            ("resume_json", resume_json.as_str()),
            ("field", field_of_interest.trim()),
        ])?;

        let object = request_json_object(
            self.llm.as_ref(),
            &prompt,
            &REQUIRED_REPORT_KEYS,
            Stage::Grade,
        )
        .await?;
        let report = parse_grade_report(object)?;

        if report.improvement() < 0 {
            warn!(
                "Model projected a lower improved score ({} < {}); passing through unchanged",
                report.improved_score, report.score
            );
        }
        info!(
            "Graded resume for field '{}': score={} improved_score={} ({:+})",
            field_of_interest.trim(),
            report.score,
            report.improved_score,
            report.improvement()
        );
        Ok(report)
    }
}

fn parse_grade_report(object: Map<String, Value>) -> Result<GradeReport, PipelineError> {
    let feedback = object
        .get("feedback")
        .and_then(Value::as_object)
        .ok_or_else(|| PipelineError::malformed(Stage::Grade, "feedback must be an object"))?;
    let categories: Vec<&str> = FEEDBACK_CATEGORIES.iter().map(|c| c.key()).collect();
    require_keys(feedback, &categories, Stage::Grade)?;

    let report: GradeReport = serde_json::from_value(Value::Object(object)).map_err(|e| {
        PipelineError::malformed(
            Stage::Grade,
            format!("response does not match the grade report schema: {e}"),
        )
    })?;

    for (name, value) in [("score", report.score), ("improved_score", report.improved_score)] {
        if value > MAX_SCORE {
            return Err(PipelineError::malformed(
                Stage::Grade,
                format!("{name} must be between 0 and {MAX_SCORE}, got {value}"),
            ));
        }
    }

    Ok(report)
}
