//! Interview session lifecycle status.

use serde::{Deserialize, Serialize};

use super::StateMachine;

/// Lifecycle status of an interview session.
///
/// `Complete` is terminal: a session transitions into it exactly once and
/// is read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    InProgress,
    Complete,
}

impl InterviewStatus {
    /// Returns true if the session can still accept answers.
    pub fn is_open(&self) -> bool {
        matches!(self, InterviewStatus::InProgress)
    }
}

impl StateMachine for InterviewStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!(
            (self, target),
            (InterviewStatus::InProgress, InterviewStatus::Complete)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            InterviewStatus::InProgress => vec![InterviewStatus::Complete],
            InterviewStatus::Complete => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_progress_can_complete() {
        assert!(InterviewStatus::InProgress.can_transition_to(&InterviewStatus::Complete));
    }

    #[test]
    fn complete_is_terminal() {
        assert!(InterviewStatus::Complete.is_terminal());
        assert!(!InterviewStatus::Complete.can_transition_to(&InterviewStatus::InProgress));
    }

    #[test]
    fn only_in_progress_is_open() {
        assert!(InterviewStatus::InProgress.is_open());
        assert!(!InterviewStatus::Complete.is_open());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&InterviewStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
