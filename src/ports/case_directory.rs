//! Case directory port.
//!
//! Legal cases are owned by the surrounding case-management product; the
//! interview engine only needs to know whether a case exists before binding
//! a session to it.

use crate::domain::foundation::{CaseId, DomainError};
use async_trait::async_trait;

/// Read port for case existence checks.
#[async_trait]
pub trait CaseDirectory: Send + Sync {
    /// Returns true if the case exists.
    async fn exists(&self, case_id: &CaseId) -> Result<bool, DomainError>;
}
