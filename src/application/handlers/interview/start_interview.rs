//! StartInterviewHandler - Command handler for creating interview sessions.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::foundation::{CaseId, SessionId};
use crate::domain::interview::{InterviewError, InterviewSession};
use crate::ports::{CaseDirectory, SessionStore};

/// What `start` does when the case already has an in-progress session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExistingSessionPolicy {
    /// Return the existing session's ID.
    #[default]
    Resume,
    /// Reject with a conflict.
    Reject,
}

/// Command to start an interview for a case.
#[derive(Debug, Clone)]
pub struct StartInterviewCommand {
    pub case_id: CaseId,
}

/// Result of a successful start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartInterviewResult {
    pub session_id: SessionId,
    /// True when an existing in-progress session was resumed.
    pub resumed: bool,
}

/// Handler for starting interviews.
pub struct StartInterviewHandler {
    store: Arc<dyn SessionStore>,
    cases: Arc<dyn CaseDirectory>,
    policy: ExistingSessionPolicy,
}

impl StartInterviewHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        cases: Arc<dyn CaseDirectory>,
        policy: ExistingSessionPolicy,
    ) -> Self {
        Self {
            store,
            cases,
            policy,
        }
    }

    pub async fn handle(
        &self,
        cmd: StartInterviewCommand,
    ) -> Result<StartInterviewResult, InterviewError> {
        if !self.cases.exists(&cmd.case_id).await? {
            return Err(InterviewError::case_not_found(cmd.case_id));
        }

        if let Some(existing) = self.store.find_in_progress_by_case(&cmd.case_id).await? {
            return match self.policy {
                ExistingSessionPolicy::Resume => {
                    tracing::info!(
                        session_id = %existing.id(),
                        case_id = %cmd.case_id,
                        "resuming in-progress interview"
                    );
                    Ok(StartInterviewResult {
                        session_id: *existing.id(),
                        resumed: true,
                    })
                }
                ExistingSessionPolicy::Reject => Err(InterviewError::SessionAlreadyActive {
                    case_id: cmd.case_id,
                    session_id: *existing.id(),
                }),
            };
        }

        let session = InterviewSession::new(SessionId::new(), cmd.case_id);
        self.store.create(&session).await?;

        tracing::info!(
            session_id = %session.id(),
            case_id = %cmd.case_id,
            "interview started"
        );

        Ok(StartInterviewResult {
            session_id: *session.id(),
            resumed: false,
        })
    }
}
