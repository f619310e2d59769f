//! Shared completion helper: one call, one strictly parsed JSON object back.

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::llm_client::{strip_json_fences, Completion, LlmError};
use crate::pipeline::{PipelineError, Stage};

/// Sends `prompt`, then parses the reply as a JSON object carrying every
/// key in `required`.
///
/// Markdown code fences around the JSON are tolerated; any other prose is a
/// malformed response, and so is an empty completion. A required key set to
/// `null` counts as present. Once the keys are checked, `null` values are
/// dropped so schema defaults apply.
pub async fn request_json_object(
    llm: &dyn Completion,
    prompt: &str,
    required: &[&str],
    stage: Stage,
) -> Result<Map<String, Value>, PipelineError> {
    debug!("{stage}: sending prompt ({} chars)", prompt.len());
    let reply = match llm.complete(prompt).await {
        Err(LlmError::EmptyContent) => {
            return Err(PipelineError::malformed(stage, "response was empty"))
        }
        reply => reply?,
    };
    info!("{stage}: completion received ({} chars)", reply.len());

    let mut object = parse_json_object(&reply, stage)?;
    require_keys(&object, required, stage)?;
    strip_nulls(&mut object);
    Ok(object)
}

pub fn parse_json_object(reply: &str, stage: Stage) -> Result<Map<String, Value>, PipelineError> {
    let body = strip_json_fences(reply);
    let value: Value = serde_json::from_str(body).map_err(|e| {
        PipelineError::malformed(stage, format!("response is not valid JSON: {e}"))
    })?;

    match value {
        Value::Object(object) => Ok(object),
        other => Err(PipelineError::malformed(
            stage,
            format!("expected a JSON object, got {}", json_kind(&other)),
        )),
    }
}

/// Errors unless every key in `required` is present on `object`.
pub fn require_keys(
    object: &Map<String, Value>,
    required: &[&str],
    stage: Stage,
) -> Result<(), PipelineError> {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|key| !object.contains_key(*key))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(PipelineError::malformed(
            stage,
            format!("missing required keys: {}", missing.join(", ")),
        ))
    }
}

fn strip_nulls(object: &mut Map<String, Value>) {
    object.retain(|_, v| !v.is_null());
    for value in object.values_mut() {
        strip_nulls_in(value);
    }
}

fn strip_nulls_in(value: &mut Value) {
    match value {
        Value::Object(object) => strip_nulls(object),
        Value::Array(items) => {
            items.retain(|v| !v.is_null());
            items.iter_mut().for_each(strip_nulls_in);
        }
        _ => {}
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
