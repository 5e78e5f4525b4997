//! PostgreSQL implementation of SessionStore.
//!
//! Persists InterviewSession aggregates. Answers and recommendation are
//! stored as JSONB; the step check on UPDATE is the optimistic concurrency
//! control for the whole engine.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::catalog::AnswerSet;
use crate::domain::foundation::{
    CaseId, DomainError, ErrorCode, InterviewStatus, SessionId, StepNumber, Timestamp,
};
use crate::domain::interview::{InterviewSession, Recommendation};
use crate::ports::SessionStore;

/// PostgreSQL implementation of SessionStore.
#[derive(Clone)]
pub struct PostgresSessionStore {
    pool: PgPool,
}

impl PostgresSessionStore {
    /// Creates a new PostgresSessionStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PostgresSessionStore {
    async fn create(&self, session: &InterviewSession) -> Result<(), DomainError> {
        let answers = serde_json::to_value(session.answers()).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize answers: {}", e),
            )
        })?;
        let recommendation = session
            .recommendation()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to serialize recommendation: {}", e),
                )
            })?;

        sqlx::query(
            r#"
            INSERT INTO interview_sessions (
                id, case_id, answers, step_number, status, recommendation,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(session.case_id().as_uuid())
        .bind(answers)
        .bind(session.step_number().as_u32() as i32)
        .bind(status_to_str(session.status()))
        .bind(recommendation)
        .bind(session.created_at().as_datetime())
        .bind(session.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert session: {}", e),
            )
        })?;

        Ok(())
    }

    async fn load(&self, id: &SessionId) -> Result<Option<InterviewSession>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, case_id, answers, step_number, status, recommendation,
                   created_at, updated_at
            FROM interview_sessions
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch session: {}", e),
            )
        })?;

        match row {
            Some(row) => {
                let session = row_to_session(row)?;
                Ok(Some(session))
            }
            None => Ok(None),
        }
    }

    async fn find_in_progress_by_case(
        &self,
        case_id: &CaseId,
    ) -> Result<Option<InterviewSession>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, case_id, answers, step_number, status, recommendation,
                   created_at, updated_at
            FROM interview_sessions
            WHERE case_id = $1 AND status = 'in_progress'
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(case_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch session by case: {}", e),
            )
        })?;

        match row {
            Some(row) => {
                let session = row_to_session(row)?;
                Ok(Some(session))
            }
            None => Ok(None),
        }
    }

    async fn update(
        &self,
        session: &InterviewSession,
        expected_step: StepNumber,
    ) -> Result<(), DomainError> {
        let answers = serde_json::to_value(session.answers()).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize answers: {}", e),
            )
        })?;
        let recommendation = session
            .recommendation()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to serialize recommendation: {}", e),
                )
            })?;

        let result = sqlx::query(
            r#"
            UPDATE interview_sessions SET
                answers = $3,
                step_number = $4,
                status = $5,
                recommendation = $6,
                updated_at = $7
            WHERE id = $1 AND step_number = $2
            "#,
        )
        .bind(session.id().as_uuid())
        .bind(expected_step.as_u32() as i32)
        .bind(answers)
        .bind(session.step_number().as_u32() as i32)
        .bind(status_to_str(session.status()))
        .bind(recommendation)
        .bind(session.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update session: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            // Distinguish a vanished row from a lost race on the step guard.
            let exists: (i64,) =
                sqlx::query_as("SELECT COUNT(*) FROM interview_sessions WHERE id = $1")
                    .bind(session.id().as_uuid())
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| {
                        DomainError::new(
                            ErrorCode::DatabaseError,
                            format!("Failed to check session existence: {}", e),
                        )
                    })?;

            if exists.0 == 0 {
                return Err(DomainError::new(
                    ErrorCode::SessionNotFound,
                    format!("Session not found: {}", session.id()),
                ));
            }
            return Err(DomainError::new(
                ErrorCode::StaleStep,
                format!(
                    "Session {} was not at step {}",
                    session.id(),
                    expected_step
                ),
            ));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn status_to_str(status: InterviewStatus) -> &'static str {
    match status {
        InterviewStatus::InProgress => "in_progress",
        InterviewStatus::Complete => "complete",
    }
}

fn str_to_status(s: &str) -> Result<InterviewStatus, DomainError> {
    match s {
        "in_progress" => Ok(InterviewStatus::InProgress),
        "complete" => Ok(InterviewStatus::Complete),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid interview status: {}", s),
        )),
    }
}

fn row_to_session(row: sqlx::postgres::PgRow) -> Result<InterviewSession, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Failed to get id: {}", e))
    })?;

    let case_id: uuid::Uuid = row.try_get("case_id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get case_id: {}", e),
        )
    })?;

    let answers_json: serde_json::Value = row.try_get("answers").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get answers: {}", e),
        )
    })?;
    let answers: AnswerSet = serde_json::from_value(answers_json).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid answers payload: {}", e),
        )
    })?;

    let step_number: i32 = row.try_get("step_number").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get step_number: {}", e),
        )
    })?;
    let step_number = u32::try_from(step_number)
        .ok()
        .and_then(StepNumber::new)
        .ok_or_else(|| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid step_number: {}", step_number),
            )
        })?;

    let status_str: String = row.try_get("status").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get status: {}", e),
        )
    })?;
    let status = str_to_status(&status_str)?;

    let recommendation_json: Option<serde_json::Value> =
        row.try_get("recommendation").map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to get recommendation: {}", e),
            )
        })?;
    let recommendation: Option<Recommendation> = recommendation_json
        .map(serde_json::from_value)
        .transpose()
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid recommendation payload: {}", e),
            )
        })?;

    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get created_at: {}", e),
        )
    })?;

    let updated_at: chrono::DateTime<chrono::Utc> = row.try_get("updated_at").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get updated_at: {}", e),
        )
    })?;

    Ok(InterviewSession::reconstitute(
        SessionId::from_uuid(id),
        CaseId::from_uuid(case_id),
        answers,
        step_number,
        status,
        recommendation,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
