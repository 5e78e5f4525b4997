//! In-memory implementation of CaseDirectory.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{CaseId, DomainError};
use crate::ports::CaseDirectory;

/// Case directory backed by an explicit set of known cases.
#[derive(Default)]
pub struct StaticCaseDirectory {
    known: Mutex<HashSet<CaseId>>,
}

impl StaticCaseDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a case as existing.
    pub fn add(&self, case_id: CaseId) {
        self.known
            .lock()
            .expect("case directory poisoned")
            .insert(case_id);
    }
}

#[async_trait]
impl CaseDirectory for StaticCaseDirectory {
    async fn exists(&self, case_id: &CaseId) -> Result<bool, DomainError> {
        Ok(self
            .known
            .lock()
            .expect("case directory poisoned")
            .contains(case_id))
    }
}
