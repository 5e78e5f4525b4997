//! In-memory implementation of SessionStore.
//!
//! The single map mutex serializes all writes, which trivially satisfies
//! the per-session single-writer requirement; the step check still runs so
//! tests exercise the same conflict path as the PostgreSQL adapter.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{CaseId, DomainError, ErrorCode, SessionId, StepNumber};
use crate::domain::interview::InterviewSession;
use crate::ports::SessionStore;

/// In-memory SessionStore.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<SessionId, InterviewSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, session: &InterviewSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.lock().expect("session store poisoned");
        if sessions.contains_key(session.id()) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Session already exists: {}", session.id()),
            ));
        }
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn load(&self, id: &SessionId) -> Result<Option<InterviewSession>, DomainError> {
        let sessions = self.sessions.lock().expect("session store poisoned");
        Ok(sessions.get(id).cloned())
    }

    async fn find_in_progress_by_case(
        &self,
        case_id: &CaseId,
    ) -> Result<Option<InterviewSession>, DomainError> {
        let sessions = self.sessions.lock().expect("session store poisoned");
        Ok(sessions
            .values()
            .find(|s| s.case_id() == case_id && s.status().is_open())
            .cloned())
    }

    async fn update(
        &self,
        session: &InterviewSession,
        expected_step: StepNumber,
    ) -> Result<(), DomainError> {
        let mut sessions = self.sessions.lock().expect("session store poisoned");
        let stored = sessions.get_mut(session.id()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", session.id()),
            )
        })?;
        if stored.step_number() != expected_step {
            return Err(DomainError::new(
                ErrorCode::StaleStep,
                format!(
                    "Session {} is at step {}, expected {}",
                    session.id(),
                    stored.step_number(),
                    expected_step
                ),
            ));
        }
        *stored = session.clone();
        Ok(())
    }
}
