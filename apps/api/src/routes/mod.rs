pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::pipeline::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/evaluate", post(handlers::handle_evaluate))
        .route("/api/v1/resumes/structure", post(handlers::handle_structure))
        .route("/api/v1/resumes/grade", post(handlers::handle_grade))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::extraction::testing::build_pdf;
    use crate::llm_client::testing::ScriptedCompletion;
    use crate::pipeline::EvaluationPipeline;
    use crate::resume::models::StructuredResume;

    const BOUNDARY: &str = "resume-grader-boundary";

    const GRADE_REPLY: &str = r#"{
        "score": 44,
        "feedback": {
            "experience": "One relevant analyst role.",
            "education": "Relevant degree.",
            "skills": "Good SQL; add a modelling library.",
            "projects": "Please add two or three data projects.",
            "publications": "Please add any publications or blog posts.",
            "achievements_and_awards": "Please add any awards.",
            "additional_activities": "None listed.",
            "overall_comments": "Early-career profile with a clear direction."
        },
        "improved_score": 61
    }"#;

    fn app(replies: &[&str]) -> (Arc<ScriptedCompletion>, Router) {
        let llm = Arc::new(ScriptedCompletion::replying(replies));
        let state = AppState {
            pipeline: Arc::new(EvaluationPipeline::new(llm.clone())),
            model: "llama3-8b-8192".to_string(),
        };
        (llm, build_router(state, 1024 * 1024))
    }

    fn multipart_body(parts: &[(&str, Option<&str>, &[u8])]) -> Body {
        let mut body = Vec::new();
        for (name, filename, content) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match filename {
                Some(filename) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/pdf\r\n\r\n"
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                ),
            }
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        Body::from(body)
    }

    fn multipart_request(uri: &str, body: Body) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(body)
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_model() {
        let (_, app) = app(&[]);
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model"], "llama3-8b-8192");
    }

    #[tokio::test]
    async fn test_grade_endpoint_returns_report_and_breakdown() {
        let (llm, app) = app(&[GRADE_REPLY]);
        let request = Request::post("/api/v1/resumes/grade")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "structured_resume": StructuredResume::default(),
                    "field_of_interest": "Data Science"
                })
                .to_string(),
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["grade_report"]["score"], 44);
        assert_eq!(body["grade_report"]["improved_score"], 61);
        assert_eq!(body["breakdown"][5]["label"], "Achievements And Awards");
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_malformed_model_reply_maps_to_bad_gateway() {
        let (_, app) = app(&["Score: 44/100"]);
        let request = Request::post("/api/v1/resumes/grade")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "structured_resume": StructuredResume::default() }).to_string(),
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "MALFORMED_MODEL_RESPONSE");
    }

    #[tokio::test]
    async fn test_evaluate_upload_returns_resume_and_grade() {
        let resume_reply = serde_json::to_string(&StructuredResume::default()).unwrap();
        let (llm, app) = app(&[resume_reply.as_str(), GRADE_REPLY]);
        let pdf = build_pdf(&[Some("Jane Doe"), Some("Data Analyst at Initech")]);
        let body = multipart_body(&[
            ("file", Some("resume.pdf"), pdf.as_slice()),
            ("field_of_interest", None, "Data Science".as_bytes()),
        ]);

        let response = app
            .oneshot(multipart_request("/api/v1/resumes/evaluate", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["grade_report"]["score"], 44);
        assert_eq!(body["structured_resume"]["skills"]["languages"], json!([]));
        assert_eq!(body["breakdown"].as_array().unwrap().len(), 8);
        assert!(body["submission_id"].is_string());
        assert_eq!(llm.call_count(), 2);
        assert!(llm.prompts()[1].contains("Data Science"));
    }

    #[tokio::test]
    async fn test_unreadable_upload_never_calls_the_model() {
        let (llm, app) = app(&[GRADE_REPLY]);
        let body = multipart_body(&[
            ("field_of_interest", None, "Data Science".as_bytes()),
            ("file", Some("resume.pdf"), "this is not a pdf".as_bytes()),
        ]);

        let response = app
            .oneshot(multipart_request("/api/v1/resumes/evaluate", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "DOCUMENT_UNREADABLE");
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_file_part_is_a_validation_error() {
        let (_, app) = app(&[]);
        let body = multipart_body(&[("field_of_interest", None, "Management".as_bytes())]);

        let response = app
            .oneshot(multipart_request("/api/v1/resumes/structure", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_empty_file_is_a_validation_error() {
        let (_, app) = app(&[]);
        let body = multipart_body(&[("file", Some("resume.pdf"), "".as_bytes())]);

        let response = app
            .oneshot(multipart_request("/api/v1/resumes/evaluate", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
