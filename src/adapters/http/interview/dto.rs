//! HTTP DTOs (Data Transfer Objects) for interview endpoints.
//!
//! These types define the JSON request/response structure for the interview
//! API. They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::application::handlers::interview::{NextQuestionResult, QuestionView};
use crate::domain::interview::{Recommendation, RecommendationBasis};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to start an interview for a case.
#[derive(Debug, Clone, Deserialize)]
pub struct StartInterviewRequest {
    /// The case to interview.
    pub case_id: String,
}

/// Request to submit one answer.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerRequest {
    /// The step number the client believes the session is at.
    pub step_number: u32,
    /// The question key being answered.
    pub key: String,
    /// The chosen answer value.
    pub value: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a started (or resumed) interview.
#[derive(Debug, Clone, Serialize)]
pub struct StartInterviewResponse {
    /// The session ID.
    pub session_id: String,
    /// True when an existing in-progress session was resumed.
    pub resumed: bool,
}

/// A question as presented over the wire.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    /// The answer key this question fills.
    pub key: String,
    /// Prompt text to display.
    pub prompt: String,
    /// The allowed answer values, in presentation order.
    pub options: Vec<String>,
}

impl From<QuestionView> for QuestionDto {
    fn from(view: QuestionView) -> Self {
        Self {
            key: view.key,
            prompt: view.prompt,
            options: view.options,
        }
    }
}

/// The final recommendation for a session.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationDto {
    /// The recommended visa code.
    pub visa_code: String,
    /// Human-readable visa name.
    pub visa_name: String,
    /// Why this visa matches the recorded answers.
    pub rationale: String,
    /// How the recommendation was reached.
    pub basis: RecommendationBasis,
}

impl From<Recommendation> for RecommendationDto {
    fn from(rec: Recommendation) -> Self {
        Self {
            visa_code: rec.visa_code().to_string(),
            visa_name: rec.visa_name().to_string(),
            rationale: rec.rationale().to_string(),
            basis: rec.basis().clone(),
        }
    }
}

/// Response for the next-question query.
#[derive(Debug, Clone, Serialize)]
pub struct NextQuestionResponse {
    /// Whether the interview has concluded.
    pub is_complete: bool,
    /// The next question, when the interview is still open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionDto>,
    /// How many visa types remain eligible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_candidate_count: Option<usize>,
    /// The recommendation, once complete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<RecommendationDto>,
}

impl From<NextQuestionResult> for NextQuestionResponse {
    fn from(result: NextQuestionResult) -> Self {
        match result {
            NextQuestionResult::Question {
                question,
                remaining_candidates,
            } => Self {
                is_complete: false,
                question: Some(question.into()),
                remaining_candidate_count: Some(remaining_candidates),
                recommendation: None,
            },
            NextQuestionResult::Complete { recommendation } => Self {
                is_complete: true,
                question: None,
                remaining_candidate_count: None,
                recommendation: Some(recommendation.into()),
            },
        }
    }
}

/// Response for an accepted answer.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitAnswerResponse {
    /// The session ID.
    pub session_id: String,
    /// The step the session now expects.
    pub next_step: u32,
    /// Whether the interview concluded with this answer.
    pub is_complete: bool,
    /// The recommendation, once complete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<RecommendationDto>,
}

/// Error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_request_deserializes() {
        let json = r#"{"case_id": "0191c6a2-0000-7000-8000-000000000000"}"#;
        let req: StartInterviewRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.case_id, "0191c6a2-0000-7000-8000-000000000000");
    }

    #[test]
    fn submit_request_deserializes() {
        let json = r#"{"step_number": 3, "key": "purpose", "value": "work"}"#;
        let req: SubmitAnswerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.step_number, 3);
        assert_eq!(req.key, "purpose");
        assert_eq!(req.value, "work");
    }

    #[test]
    fn next_question_response_omits_absent_fields() {
        let response = NextQuestionResponse::from(NextQuestionResult::Question {
            question: QuestionView {
                key: "purpose".to_string(),
                prompt: "What is the primary purpose of travel?".to_string(),
                options: vec!["tourism".to_string(), "work".to_string()],
            },
            remaining_candidates: 14,
        });

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"is_complete\":false"));
        assert!(json.contains("\"remaining_candidate_count\":14"));
        assert!(!json.contains("recommendation"));
    }

    #[test]
    fn error_response_serializes_code_and_message() {
        let err = ErrorResponse::new("STALE_STEP", "Session has moved on");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":\"STALE_STEP\""));
        assert!(!json.contains("details"));
    }
}
