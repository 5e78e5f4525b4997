//! PostgreSQL implementation of CaseDirectory.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{CaseId, DomainError, ErrorCode};
use crate::ports::CaseDirectory;

/// Case directory backed by the cases table.
#[derive(Clone)]
pub struct PostgresCaseDirectory {
    pool: PgPool,
}

impl PostgresCaseDirectory {
    /// Creates a new PostgresCaseDirectory.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CaseDirectory for PostgresCaseDirectory {
    async fn exists(&self, case_id: &CaseId) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cases WHERE id = $1")
            .bind(case_id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to check case existence: {}", e),
                )
            })?;

        Ok(result.0 > 0)
    }
}
