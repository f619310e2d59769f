// Shared prompt constants and the template type every prompt is built from.
// Each stage that needs LLM calls defines its own prompts.rs alongside it.

use thiserror::Error;

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("template '{template}' is missing a value for slot '{slot}'")]
    MissingSlot {
        template: &'static str,
        slot: &'static str,
    },
}

/// A prompt as pure data: the text plus the `{slot}` names it expects.
///
/// Rendering is a single left-to-right pass, so braces inside substituted
/// content (resume text, JSON) are never re-expanded. Braces that do not
/// spell a declared slot, such as the JSON schema examples, are copied as-is.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub text: &'static str,
    pub slots: &'static [&'static str],
}

impl PromptTemplate {
    pub fn render(&self, values: &[(&str, &str)]) -> Result<String, TemplateError> {
        for slot in self.slots {
            if !values.iter().any(|(k, _)| k == slot) {
                return Err(TemplateError::MissingSlot {
                    template: self.name,
                    slot: *slot,
                });
            }
        }

        let extra: usize = values.iter().map(|(_, v)| v.len()).sum();
        let mut out = String::with_capacity(self.text.len() + extra);
        let mut rest = self.text;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let hit = self.slots.iter().find_map(|slot| {
                after
                    .strip_prefix(slot)
                    .and_then(|tail| tail.strip_prefix('}'))
                    .map(|tail| (*slot, tail))
            });
            match hit {
                Some((slot, tail)) => {
                    let value = values
                        .iter()
                        .find(|(k, _)| *k == slot)
                        .map(|(_, v)| *v)
                        .unwrap_or_default();
                    out.push_str(value);
                    rest = tail;
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        Ok(out)
    }
}
