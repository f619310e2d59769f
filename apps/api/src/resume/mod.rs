// Resume structuring: extracted text → normalized `StructuredResume` JSON.
// All LLM calls go through the `Completion` trait, never a concrete client.

pub mod grounding;
pub mod models;
pub mod prompts;
pub mod structurer;
