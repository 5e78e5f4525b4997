//! NextQuestionHandler - Query handler for the current interview position.
//!
//! Read-only, so repeated calls without an intervening answer return the
//! same result.

use std::sync::Arc;

use crate::domain::catalog::Catalog;
use crate::domain::foundation::SessionId;
use crate::domain::interview::{evaluate, InterviewError, Outcome, Recommendation};
use crate::ports::SessionStore;

/// Query for the next question of a session.
#[derive(Debug, Clone)]
pub struct NextQuestionQuery {
    pub session_id: SessionId,
}

/// A question as presented to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub key: String,
    pub prompt: String,
    pub options: Vec<String>,
}

/// Either the next question or the final recommendation.
#[derive(Debug, Clone, PartialEq)]
pub enum NextQuestionResult {
    Question {
        question: QuestionView,
        remaining_candidates: usize,
    },
    Complete {
        recommendation: Recommendation,
    },
}

/// Handler for fetching the current interview position.
pub struct NextQuestionHandler {
    store: Arc<dyn SessionStore>,
    catalog: Arc<Catalog>,
}

impl NextQuestionHandler {
    pub fn new(store: Arc<dyn SessionStore>, catalog: Arc<Catalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(
        &self,
        query: NextQuestionQuery,
    ) -> Result<NextQuestionResult, InterviewError> {
        let session = self
            .store
            .load(&query.session_id)
            .await?
            .ok_or(InterviewError::SessionNotFound(query.session_id))?;

        // Completed sessions answer from their stored recommendation; the
        // engine is only consulted while the session is open.
        if let Some(recommendation) = session.recommendation() {
            return Ok(NextQuestionResult::Complete {
                recommendation: recommendation.clone(),
            });
        }

        match evaluate(&self.catalog, session.answers())? {
            Outcome::NextQuestion {
                question,
                remaining_candidates,
            } => Ok(NextQuestionResult::Question {
                question: QuestionView {
                    key: question.key().to_string(),
                    prompt: question.prompt().to_string(),
                    options: question.options().iter().map(|o| o.to_string()).collect(),
                },
                remaining_candidates,
            }),
            Outcome::Complete(recommendation) => {
                // The session would complete on its next answer submission;
                // an open session can still reach here only when created
                // against data that already pins a single candidate.
                Ok(NextQuestionResult::Complete { recommendation })
            }
        }
    }
}
