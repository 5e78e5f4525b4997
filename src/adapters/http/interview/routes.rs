//! Route configuration for interview endpoints.
//!
//! Configures Axum router with interview-related routes.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{next_question, start_interview, submit_answer, InterviewAppState};

/// Creates the interview router with all endpoints.
///
/// Routes:
/// - `POST /api/interviews` - Start (or resume) an interview for a case
/// - `GET /api/interviews/:id/next-question` - Fetch the current position
/// - `POST /api/interviews/:id/answers` - Submit one answer
pub fn interview_router() -> Router<InterviewAppState> {
    Router::new()
        .route("/api/interviews", post(start_interview))
        .route("/api/interviews/:id/next-question", get(next_question))
        .route("/api/interviews/:id/answers", post(submit_answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemorySessionStore, StaticCaseDirectory};
    use crate::application::handlers::interview::ExistingSessionPolicy;
    use crate::domain::catalog::builtin_catalog;
    use crate::domain::foundation::CaseId;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_with_case(case_id: CaseId) -> Router {
        let cases = StaticCaseDirectory::new();
        cases.add(case_id);
        let state = InterviewAppState::new(
            Arc::new(InMemorySessionStore::new()),
            Arc::new(cases),
            Arc::new(builtin_catalog().clone()),
            ExistingSessionPolicy::Resume,
        );
        interview_router().with_state(state)
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn start_endpoint_creates_session() {
        let case_id = CaseId::new();
        let app = app_with_case(case_id);

        let response = app
            .oneshot(post_json(
                "/api/interviews",
                format!(r#"{{"case_id": "{}"}}"#, case_id),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["resumed"], false);
        assert!(body["session_id"].is_string());
    }

    #[tokio::test]
    async fn start_endpoint_rejects_unknown_case() {
        let app = app_with_case(CaseId::new());

        let response = app
            .oneshot(post_json(
                "/api/interviews",
                format!(r#"{{"case_id": "{}"}}"#, CaseId::new()),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "CASE_NOT_FOUND");
    }

    #[tokio::test]
    async fn full_round_trip_over_http() {
        let case_id = CaseId::new();
        let app = app_with_case(case_id);

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/interviews",
                format!(r#"{{"case_id": "{}"}}"#, case_id),
            ))
            .await
            .unwrap();
        let session_id = body_json(response).await["session_id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/interviews/{}/next-question", session_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["is_complete"], false);
        assert_eq!(body["question"]["key"], "purpose");

        let response = app
            .oneshot(post_json(
                &format!("/api/interviews/{}/answers", session_id),
                r#"{"step_number": 1, "key": "purpose", "value": "tourism"}"#.to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["is_complete"], true);
        assert_eq!(body["recommendation"]["visa_code"], "B-2");
    }

    #[tokio::test]
    async fn stale_step_returns_conflict() {
        let case_id = CaseId::new();
        let app = app_with_case(case_id);

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/interviews",
                format!(r#"{{"case_id": "{}"}}"#, case_id),
            ))
            .await
            .unwrap();
        let session_id = body_json(response).await["session_id"]
            .as_str()
            .unwrap()
            .to_string();

        let answers_uri = format!("/api/interviews/{}/answers", session_id);
        let body = r#"{"step_number": 1, "key": "purpose", "value": "diplomatic"}"#;

        let response = app
            .clone()
            .oneshot(post_json(&answers_uri, body.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Replay of the same step number must conflict.
        let response = app
            .oneshot(post_json(&answers_uri, body.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(response).await["code"], "STALE_STEP");
    }

    #[tokio::test]
    async fn malformed_session_id_is_bad_request() {
        let app = app_with_case(CaseId::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/interviews/not-a-uuid/next-question")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
