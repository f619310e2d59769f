use std::sync::Arc;

use crate::pipeline::EvaluationPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only: submissions never share anything mutable.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<EvaluationPipeline>,
    /// Model identifier, reported by the health endpoint.
    pub model: String,
}
