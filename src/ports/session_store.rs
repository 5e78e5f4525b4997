//! Session store port.
//!
//! Defines the contract for persisting and retrieving InterviewSession
//! aggregates. Sessions are independent, so no cross-session coordination
//! is required, but writes within one session must be serialized.
//!
//! # Design
//!
//! - **Single-writer per session**: `update` carries the step number the
//!   caller loaded at; implementations must reject the write when the
//!   stored session has moved past it (optimistic concurrency).
//! - **Durable before return**: a successful `create`/`update` means the
//!   state survives a restart.

use crate::domain::foundation::{CaseId, DomainError, SessionId, StepNumber};
use crate::domain::interview::InterviewSession;
use async_trait::async_trait;

/// Store port for InterviewSession persistence.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a new session.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create(&self, session: &InterviewSession) -> Result<(), DomainError>;

    /// Load a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn load(&self, id: &SessionId) -> Result<Option<InterviewSession>, DomainError>;

    /// Find the in-progress session for a case, if any.
    async fn find_in_progress_by_case(
        &self,
        case_id: &CaseId,
    ) -> Result<Option<InterviewSession>, DomainError>;

    /// Persist a mutated session.
    ///
    /// `expected_step` is the session's step number at load time; the write
    /// succeeds only if the stored session still carries it.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    /// - `StaleStep` if another writer advanced the session
    /// - `DatabaseError` on persistence failure
    async fn update(
        &self,
        session: &InterviewSession,
        expected_step: StepNumber,
    ) -> Result<(), DomainError>;
}
