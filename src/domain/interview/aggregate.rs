//! InterviewSession aggregate entity.
//!
//! One session per eligibility interview, bound to a legal case. Mutated
//! only by answer submission, never after completion.

use serde::{Deserialize, Serialize};

use super::errors::InterviewError;
use super::recommendation::Recommendation;
use crate::domain::catalog::{AnswerKey, AnswerSet, AnswerValue};
use crate::domain::foundation::{
    CaseId, InterviewStatus, SessionId, StateMachine, StepNumber, Timestamp,
};

/// Interview session aggregate.
///
/// # Invariants
///
/// - `answers` keys are unique; insertion order is asking order
/// - `step_number` equals `answers.len() + 1`
/// - `status` becomes `Complete` exactly once; `recommendation` is set
///   if and only if the session is complete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSession {
    id: SessionId,
    case_id: CaseId,
    answers: AnswerSet,
    step_number: StepNumber,
    status: InterviewStatus,
    recommendation: Option<Recommendation>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl InterviewSession {
    /// Creates a new in-progress session for a case.
    pub fn new(id: SessionId, case_id: CaseId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            case_id,
            answers: AnswerSet::new(),
            step_number: StepNumber::first(),
            status: InterviewStatus::InProgress,
            recommendation: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitutes a session from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SessionId,
        case_id: CaseId,
        answers: AnswerSet,
        step_number: StepNumber,
        status: InterviewStatus,
        recommendation: Option<Recommendation>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            case_id,
            answers,
            step_number,
            status,
            recommendation,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn case_id(&self) -> &CaseId {
        &self.case_id
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// The step expected for the next answer submission.
    pub fn step_number(&self) -> StepNumber {
        self.step_number
    }

    pub fn status(&self) -> InterviewStatus {
        self.status
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Records an answer at the given step.
    ///
    /// Key/value validation against the currently selected question is the
    /// caller's responsibility; the aggregate enforces ordering, uniqueness,
    /// and the completed-session guard.
    ///
    /// # Errors
    ///
    /// - `SessionComplete` if the session no longer accepts answers
    /// - `StaleStep` if `step` is not the expected step
    /// - `InvalidAnswer` if the key is already answered
    pub fn record_answer(
        &mut self,
        step: StepNumber,
        key: AnswerKey,
        value: AnswerValue,
    ) -> Result<(), InterviewError> {
        if !self.status.is_open() {
            return Err(InterviewError::SessionComplete(self.id));
        }
        if step != self.step_number {
            return Err(InterviewError::stale_step(self.step_number, step));
        }
        self.answers
            .insert(key, value)
            .map_err(|e| InterviewError::invalid_answer(e.to_string()))?;
        self.step_number = self.step_number.next();
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Transitions the session to Complete with its recommendation.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the session is already complete
    pub fn complete(&mut self, recommendation: Recommendation) -> Result<(), InterviewError> {
        self.status = self
            .status
            .transition_to(InterviewStatus::Complete)
            .map_err(|e| InterviewError::validation("status", e.to_string()))?;
        self.recommendation = Some(recommendation);
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Predicate, VisaCode, VisaType};
    use crate::domain::interview::RecommendationBasis;

    fn key(s: &str) -> AnswerKey {
        AnswerKey::new(s).unwrap()
    }

    fn value(s: &str) -> AnswerValue {
        AnswerValue::new(s).unwrap()
    }

    fn test_session() -> InterviewSession {
        InterviewSession::new(SessionId::new(), CaseId::new())
    }

    fn test_recommendation() -> Recommendation {
        let visa = VisaType::new(
            VisaCode::new("B-2").unwrap(),
            "Visitor for pleasure",
            Predicate::is(key("purpose"), value("tourism")),
            61,
        );
        Recommendation::new(&visa, RecommendationBasis::UniqueCandidate)
    }

    #[test]
    fn new_session_starts_at_step_one() {
        let session = test_session();
        assert_eq!(session.step_number(), StepNumber::first());
        assert_eq!(session.status(), InterviewStatus::InProgress);
        assert!(session.answers().is_empty());
        assert!(session.recommendation().is_none());
    }

    #[test]
    fn record_answer_advances_step() {
        let mut session = test_session();
        session
            .record_answer(StepNumber::first(), key("purpose"), value("tourism"))
            .unwrap();
        assert_eq!(session.step_number().as_u32(), 2);
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn stale_step_is_rejected_and_state_unchanged() {
        let mut session = test_session();
        session
            .record_answer(StepNumber::first(), key("purpose"), value("diplomatic"))
            .unwrap();

        // Resubmission with the already-consumed step number.
        let result = session.record_answer(StepNumber::first(), key("diplomat"), value("yes"));
        assert!(matches!(result, Err(InterviewError::StaleStep { .. })));
        assert_eq!(session.answers().len(), 1);
        assert_eq!(session.step_number().as_u32(), 2);
    }

    #[test]
    fn future_step_is_rejected() {
        let mut session = test_session();
        let result = session.record_answer(
            StepNumber::new(5).unwrap(),
            key("purpose"),
            value("tourism"),
        );
        assert!(matches!(result, Err(InterviewError::StaleStep { .. })));
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let mut session = test_session();
        session
            .record_answer(StepNumber::first(), key("purpose"), value("tourism"))
            .unwrap();
        let result = session.record_answer(
            session.step_number(),
            key("purpose"),
            value("business"),
        );
        assert!(matches!(result, Err(InterviewError::InvalidAnswer { .. })));
    }

    #[test]
    fn complete_sets_recommendation() {
        let mut session = test_session();
        session.complete(test_recommendation()).unwrap();
        assert_eq!(session.status(), InterviewStatus::Complete);
        assert!(session.recommendation().is_some());
    }

    #[test]
    fn complete_twice_fails() {
        let mut session = test_session();
        session.complete(test_recommendation()).unwrap();
        assert!(session.complete(test_recommendation()).is_err());
    }

    #[test]
    fn completed_session_rejects_answers() {
        let mut session = test_session();
        session.complete(test_recommendation()).unwrap();
        let result =
            session.record_answer(session.step_number(), key("purpose"), value("tourism"));
        assert!(matches!(result, Err(InterviewError::SessionComplete(_))));
    }

    #[test]
    fn session_roundtrips_through_json() {
        let mut session = test_session();
        session
            .record_answer(StepNumber::first(), key("purpose"), value("tourism"))
            .unwrap();
        session.complete(test_recommendation()).unwrap();

        let json = serde_json::to_string(&session).unwrap();
        let restored: InterviewSession = serde_json::from_str(&json).unwrap();
        assert_eq!(session, restored);
    }
}
