//! HTTP handlers for interview endpoints.
//!
//! These handlers connect Axum routes to application layer command/query
//! handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::interview::{
    ExistingSessionPolicy, NextQuestionHandler, NextQuestionQuery, StartInterviewCommand,
    StartInterviewHandler, SubmitAnswerCommand, SubmitAnswerHandler,
};
use crate::domain::catalog::{AnswerKey, AnswerValue, Catalog};
use crate::domain::foundation::{CaseId, ErrorCode, SessionId, StepNumber};
use crate::domain::interview::InterviewError;
use crate::ports::{CaseDirectory, SessionStore};

use super::dto::{
    ErrorResponse, NextQuestionResponse, StartInterviewRequest, StartInterviewResponse,
    SubmitAnswerRequest, SubmitAnswerResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct InterviewAppState {
    pub session_store: Arc<dyn SessionStore>,
    pub case_directory: Arc<dyn CaseDirectory>,
    pub catalog: Arc<Catalog>,
    pub existing_session_policy: ExistingSessionPolicy,
}

impl InterviewAppState {
    pub fn new(
        session_store: Arc<dyn SessionStore>,
        case_directory: Arc<dyn CaseDirectory>,
        catalog: Arc<Catalog>,
        existing_session_policy: ExistingSessionPolicy,
    ) -> Self {
        Self {
            session_store,
            case_directory,
            catalog,
            existing_session_policy,
        }
    }

    pub fn start_interview_handler(&self) -> StartInterviewHandler {
        StartInterviewHandler::new(
            self.session_store.clone(),
            self.case_directory.clone(),
            self.existing_session_policy,
        )
    }

    pub fn next_question_handler(&self) -> NextQuestionHandler {
        NextQuestionHandler::new(self.session_store.clone(), self.catalog.clone())
    }

    pub fn submit_answer_handler(&self) -> SubmitAnswerHandler {
        SubmitAnswerHandler::new(self.session_store.clone(), self.catalog.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/interviews - Start (or resume) an interview for a case
pub async fn start_interview(
    State(state): State<InterviewAppState>,
    Json(request): Json<StartInterviewRequest>,
) -> Result<impl IntoResponse, InterviewApiError> {
    let case_id: CaseId = request
        .case_id
        .parse()
        .map_err(|_| InterviewApiError::bad_request("Invalid case ID format"))?;

    let handler = state.start_interview_handler();
    let result = handler.handle(StartInterviewCommand { case_id }).await?;

    let status = if result.resumed {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    let response = StartInterviewResponse {
        session_id: result.session_id.to_string(),
        resumed: result.resumed,
    };

    Ok((status, Json(response)))
}

/// GET /api/interviews/:id/next-question - Fetch the current interview position
pub async fn next_question(
    State(state): State<InterviewAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, InterviewApiError> {
    let session_id: SessionId = session_id
        .parse()
        .map_err(|_| InterviewApiError::bad_request("Invalid session ID format"))?;

    let handler = state.next_question_handler();
    let result = handler.handle(NextQuestionQuery { session_id }).await?;

    Ok((StatusCode::OK, Json(NextQuestionResponse::from(result))))
}

/// POST /api/interviews/:id/answers - Submit one answer
pub async fn submit_answer(
    State(state): State<InterviewAppState>,
    Path(session_id): Path<String>,
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<impl IntoResponse, InterviewApiError> {
    let session_id: SessionId = session_id
        .parse()
        .map_err(|_| InterviewApiError::bad_request("Invalid session ID format"))?;
    let step_number = StepNumber::new(request.step_number)
        .ok_or_else(|| InterviewApiError::bad_request("step_number must be at least 1"))?;
    let key = AnswerKey::new(&request.key)
        .map_err(|e| InterviewApiError::bad_request(e.to_string()))?;
    let value = AnswerValue::new(&request.value)
        .map_err(|e| InterviewApiError::bad_request(e.to_string()))?;

    let handler = state.submit_answer_handler();
    let result = handler
        .handle(SubmitAnswerCommand {
            session_id,
            step_number,
            key,
            value,
        })
        .await?;

    let response = SubmitAnswerResponse {
        session_id: result.session_id.to_string(),
        next_step: result.next_step.as_u32(),
        is_complete: result.is_complete,
        recommendation: result.recommendation.map(Into::into),
    };

    Ok((StatusCode::OK, Json(response)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts interview errors to HTTP responses.
#[derive(Debug)]
pub struct InterviewApiError {
    status: StatusCode,
    code: ErrorCode,
    message: String,
}

impl InterviewApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: ErrorCode::ValidationFailed,
            message: message.into(),
        }
    }
}

impl From<InterviewError> for InterviewApiError {
    fn from(err: InterviewError) -> Self {
        let code = err.code();
        let status = match code {
            ErrorCode::SessionNotFound | ErrorCode::CaseNotFound => StatusCode::NOT_FOUND,
            ErrorCode::StaleStep
            | ErrorCode::SessionAlreadyActive
            | ErrorCode::SessionComplete => StatusCode::CONFLICT,
            ErrorCode::InvalidAnswer => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                StatusCode::BAD_REQUEST
            }
            ErrorCode::NoEligibleCategory
            | ErrorCode::InvalidStateTransition
            | ErrorCode::DatabaseError
            | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(code = %code, error = %err, "interview request failed");
        }

        Self {
            status,
            code,
            message: err.message(),
        }
    }
}

impl IntoResponse for InterviewApiError {
    fn into_response(self) -> axum::response::Response {
        let body = ErrorResponse::new(self.code.to_string(), self.message);
        (self.status, Json(body)).into_response()
    }
}
