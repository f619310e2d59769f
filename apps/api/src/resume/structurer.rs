//! Resume Structurer — extracted text in, `StructuredResume` out.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::extraction::ExtractedText;
use crate::llm_client::Completion;
use crate::pipeline::invoke::request_json_object;
use crate::pipeline::{PipelineError, Stage};
use crate::resume::models::{StructuredResume, REQUIRED_TOP_LEVEL_KEYS};
use crate::resume::prompts::RESUME_PARSE_TEMPLATE;

pub struct ResumeStructurer {
    llm: Arc<dyn Completion>,
}

impl ResumeStructurer {
    pub fn new(llm: Arc<dyn Completion>) -> Self {
        Self { llm }
    }

    /// One completion call, no retry. A reply that is not JSON, or lacks a
    /// top-level schema key, is a `MalformedResponse`. A top-level key set to
    /// `null` is present and comes back empty.
    pub async fn structure(&self, text: &ExtractedText) -> Result<StructuredResume, PipelineError> {
        let prompt = RESUME_PARSE_TEMPLATE.render(&[("content", text.as_str())])?;
        let object = request_json_object(
            self.llm.as_ref(),
            &prompt,
            &REQUIRED_TOP_LEVEL_KEYS,
            Stage::Structure,
        )
        .await?;
        let resume = parse_structured_resume(object)?;
        info!(
            "Structured resume: {} experience, {} education, {} project entries",
            resume.experience.len(),
            resume.education.len(),
            resume.projects.len()
        );
        Ok(resume)
    }
}

fn parse_structured_resume(
    object: serde_json::Map<String, Value>,
) -> Result<StructuredResume, PipelineError> {
    serde_json::from_value(Value::Object(object)).map_err(|e| {
        PipelineError::malformed(
            Stage::Structure,
            format!("response does not match the resume schema: {e}"),
        )
    })
}
