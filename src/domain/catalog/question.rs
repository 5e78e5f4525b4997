//! Question Bank entries.

use serde::{Deserialize, Serialize};

use super::answer::{AnswerKey, AnswerSet, AnswerValue};
use super::predicate::{Predicate, Truth};

/// One interview question.
///
/// `priority` is the authoring total order of the bank: when several
/// questions are askable, the lowest priority wins (e.g. `purpose` before
/// any purpose-specific branch question).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    key: AnswerKey,
    prompt: String,
    options: Vec<AnswerValue>,
    relevance_guard: Predicate,
    depends_on: Vec<AnswerKey>,
    priority: u16,
}

impl Question {
    pub fn new(
        key: AnswerKey,
        prompt: impl Into<String>,
        options: Vec<AnswerValue>,
        relevance_guard: Predicate,
        depends_on: Vec<AnswerKey>,
        priority: u16,
    ) -> Self {
        Self {
            key,
            prompt: prompt.into(),
            options,
            relevance_guard,
            depends_on,
            priority,
        }
    }

    pub fn key(&self) -> &AnswerKey {
        &self.key
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[AnswerValue] {
        &self.options
    }

    pub fn relevance_guard(&self) -> &Predicate {
        &self.relevance_guard
    }

    pub fn depends_on(&self) -> &[AnswerKey] {
        &self.depends_on
    }

    pub fn priority(&self) -> u16 {
        self.priority
    }

    /// Returns true if `value` is in this question's answer domain.
    pub fn allows(&self, value: &AnswerValue) -> bool {
        self.options.contains(value)
    }

    /// Returns true if the question may be asked against the given answers:
    /// unanswered, guard definitely true, all dependencies answered.
    pub fn is_askable(&self, answers: &AnswerSet) -> bool {
        !answers.contains_key(&self.key)
            && self.relevance_guard.eval(answers) == Truth::True
            && self.depends_on.iter().all(|k| answers.contains_key(k))
    }
}
