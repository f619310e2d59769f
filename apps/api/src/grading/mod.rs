// Resume grading: structured résumé + field of interest → scored `GradeReport`.
// All LLM calls go through the `Completion` trait, never a concrete client.

pub mod grader;
pub mod models;
pub mod prompts;
