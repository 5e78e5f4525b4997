//! Interview-specific error types.

use crate::domain::foundation::{CaseId, DomainError, ErrorCode, SessionId, StepNumber};

/// Interview-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterviewError {
    /// Session was not found.
    SessionNotFound(SessionId),
    /// Case was not found in the case directory.
    CaseNotFound(CaseId),
    /// An in-progress session already exists for the case.
    SessionAlreadyActive { case_id: CaseId, session_id: SessionId },
    /// Answer submitted with a stale or future step number.
    StaleStep {
        expected: StepNumber,
        submitted: StepNumber,
    },
    /// Another writer advanced the session between load and persist.
    ConcurrentUpdate(String),
    /// Answer key or value does not match the currently selected question.
    InvalidAnswer { message: String },
    /// Session is already complete and read-only.
    SessionComplete(SessionId),
    /// Every visa type has been excluded - a catalog coverage defect.
    NoEligibleCategory,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl InterviewError {
    pub fn session_not_found(id: SessionId) -> Self {
        InterviewError::SessionNotFound(id)
    }
    pub fn case_not_found(id: CaseId) -> Self {
        InterviewError::CaseNotFound(id)
    }
    pub fn stale_step(expected: StepNumber, submitted: StepNumber) -> Self {
        InterviewError::StaleStep {
            expected,
            submitted,
        }
    }
    pub fn invalid_answer(message: impl Into<String>) -> Self {
        InterviewError::InvalidAnswer {
            message: message.into(),
        }
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        InterviewError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        InterviewError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            InterviewError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            InterviewError::CaseNotFound(_) => ErrorCode::CaseNotFound,
            InterviewError::SessionAlreadyActive { .. } => ErrorCode::SessionAlreadyActive,
            InterviewError::StaleStep { .. } => ErrorCode::StaleStep,
            InterviewError::ConcurrentUpdate(_) => ErrorCode::StaleStep,
            InterviewError::InvalidAnswer { .. } => ErrorCode::InvalidAnswer,
            InterviewError::SessionComplete(_) => ErrorCode::SessionComplete,
            InterviewError::NoEligibleCategory => ErrorCode::NoEligibleCategory,
            InterviewError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            InterviewError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            InterviewError::SessionNotFound(id) => format!("Session not found: {}", id),
            InterviewError::CaseNotFound(id) => format!("Case not found: {}", id),
            InterviewError::SessionAlreadyActive { case_id, .. } => {
                format!("An interview is already in progress for case {}", case_id)
            }
            InterviewError::StaleStep {
                expected,
                submitted,
            } => format!(
                "Expected step {}, got {}; re-fetch the current question and retry",
                expected, submitted
            ),
            InterviewError::ConcurrentUpdate(msg) => format!(
                "Session was modified concurrently; re-fetch and retry: {}",
                msg
            ),
            InterviewError::InvalidAnswer { message } => format!("Invalid answer: {}", message),
            InterviewError::SessionComplete(id) => {
                format!("Session {} is complete and no longer accepts answers", id)
            }
            InterviewError::NoEligibleCategory => {
                "All visa categories were excluded by the given answers".to_string()
            }
            InterviewError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            InterviewError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for InterviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for InterviewError {}

impl From<DomainError> for InterviewError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::StaleStep => InterviewError::ConcurrentUpdate(err.message),
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                InterviewError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            _ => InterviewError::Infrastructure(err.to_string()),
        }
    }
}
