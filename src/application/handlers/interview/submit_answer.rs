//! SubmitAnswerHandler - Command handler for answer submission.
//!
//! The one write path of the engine: every state transition funnels
//! through here and through the store's optimistic step check.

use std::sync::Arc;

use crate::domain::catalog::{AnswerKey, AnswerValue, Catalog};
use crate::domain::foundation::{SessionId, StepNumber};
use crate::domain::interview::{evaluate, InterviewError, Outcome, Recommendation};
use crate::ports::SessionStore;

/// Command to submit one answer.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub session_id: SessionId,
    pub step_number: StepNumber,
    pub key: AnswerKey,
    pub value: AnswerValue,
}

/// Result of an accepted answer.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitAnswerResult {
    pub session_id: SessionId,
    /// The step the session now expects.
    pub next_step: StepNumber,
    pub is_complete: bool,
    pub recommendation: Option<Recommendation>,
}

/// Handler for answer submission.
pub struct SubmitAnswerHandler {
    store: Arc<dyn SessionStore>,
    catalog: Arc<Catalog>,
}

impl SubmitAnswerHandler {
    pub fn new(store: Arc<dyn SessionStore>, catalog: Arc<Catalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAnswerCommand,
    ) -> Result<SubmitAnswerResult, InterviewError> {
        let mut session = self
            .store
            .load(&cmd.session_id)
            .await?
            .ok_or(InterviewError::SessionNotFound(cmd.session_id))?;

        if !session.status().is_open() {
            return Err(InterviewError::SessionComplete(cmd.session_id));
        }
        if cmd.step_number != session.step_number() {
            return Err(InterviewError::stale_step(
                session.step_number(),
                cmd.step_number,
            ));
        }

        // The answer must target the question the selector currently picks;
        // anything else is a client racing ahead or matching on label text.
        let current = match evaluate(&self.catalog, session.answers())? {
            Outcome::NextQuestion { question, .. } => question,
            Outcome::Complete(_) => {
                return Err(InterviewError::SessionComplete(cmd.session_id));
            }
        };
        if current.key() != &cmd.key {
            return Err(InterviewError::invalid_answer(format!(
                "expected answer for '{}', got '{}'",
                current.key(),
                cmd.key
            )));
        }
        if !current.allows(&cmd.value) {
            return Err(InterviewError::invalid_answer(format!(
                "\"{}\" is not an allowed answer for '{}'",
                cmd.value,
                cmd.key
            )));
        }

        let expected_step = session.step_number();
        session.record_answer(cmd.step_number, cmd.key, cmd.value)?;

        let recommendation = match evaluate(&self.catalog, session.answers())? {
            Outcome::Complete(recommendation) => {
                session.complete(recommendation.clone())?;
                Some(recommendation)
            }
            Outcome::NextQuestion { .. } => None,
        };

        self.store.update(&session, expected_step).await?;

        if let Some(rec) = &recommendation {
            tracing::info!(
                session_id = %session.id(),
                visa = %rec.visa_code(),
                ambiguous = rec.is_ambiguous(),
                "interview complete"
            );
        }

        Ok(SubmitAnswerResult {
            session_id: *session.id(),
            next_step: session.step_number(),
            is_complete: recommendation.is_some(),
            recommendation,
        })
    }
}
