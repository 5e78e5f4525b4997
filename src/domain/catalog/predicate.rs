//! Eligibility predicates evaluated in three-valued logic.
//!
//! A term over an unanswered key evaluates to `Unknown` rather than false,
//! so a visa type stays a candidate until an answer explicitly contradicts
//! one of its required terms. Because answers are never retracted, a
//! predicate that has evaluated to `False` can never recover - this is the
//! mechanism behind the monotonic-narrowing invariant.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::answer::{AnswerKey, AnswerSet, AnswerValue};

/// Three-valued truth: a term over a missing answer is not yet falsified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truth {
    True,
    False,
    Unknown,
}

impl Truth {
    /// Kleene conjunction.
    pub fn and(self, other: Truth) -> Truth {
        match (self, other) {
            (Truth::False, _) | (_, Truth::False) => Truth::False,
            (Truth::Unknown, _) | (_, Truth::Unknown) => Truth::Unknown,
            _ => Truth::True,
        }
    }

    /// Kleene disjunction.
    pub fn or(self, other: Truth) -> Truth {
        match (self, other) {
            (Truth::True, _) | (_, Truth::True) => Truth::True,
            (Truth::Unknown, _) | (_, Truth::Unknown) => Truth::Unknown,
            _ => Truth::False,
        }
    }
}

/// Boolean condition over answer key/value pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// The answer for `key` equals `value`.
    Is { key: AnswerKey, value: AnswerValue },
    /// Every sub-predicate holds. Empty conjunction is vacuously true.
    All(Vec<Predicate>),
    /// At least one sub-predicate holds. Empty disjunction is false.
    Any(Vec<Predicate>),
}

impl Predicate {
    /// A predicate that always evaluates to `True`.
    ///
    /// Used as the relevance guard of unconditionally askable questions.
    pub fn always() -> Self {
        Predicate::All(Vec::new())
    }

    /// Convenience constructor for a single term.
    pub fn is(key: AnswerKey, value: AnswerValue) -> Self {
        Predicate::Is { key, value }
    }

    /// Evaluates the predicate against a partial answer set.
    pub fn eval(&self, answers: &AnswerSet) -> Truth {
        match self {
            Predicate::Is { key, value } => match answers.get(key) {
                Some(actual) if actual == value => Truth::True,
                Some(_) => Truth::False,
                None => Truth::Unknown,
            },
            Predicate::All(parts) => parts
                .iter()
                .fold(Truth::True, |acc, p| acc.and(p.eval(answers))),
            Predicate::Any(parts) => parts
                .iter()
                .fold(Truth::False, |acc, p| acc.or(p.eval(answers))),
        }
    }

    /// Collects every answer key the predicate references.
    pub fn referenced_keys(&self) -> BTreeSet<AnswerKey> {
        let mut keys = BTreeSet::new();
        self.collect_keys(&mut keys);
        keys
    }

    fn collect_keys(&self, keys: &mut BTreeSet<AnswerKey>) {
        match self {
            Predicate::Is { key, .. } => {
                keys.insert(key.clone());
            }
            Predicate::All(parts) | Predicate::Any(parts) => {
                for p in parts {
                    p.collect_keys(keys);
                }
            }
        }
    }

    /// Renders a human-readable description, used as recommendation rationale.
    pub fn describe(&self) -> String {
        match self {
            Predicate::Is { key, value } => format!("{} is \"{}\"", key, value),
            Predicate::All(parts) if parts.is_empty() => "always".to_string(),
            Predicate::All(parts) => {
                let rendered: Vec<String> = parts.iter().map(Self::describe_nested).collect();
                rendered.join(" and ")
            }
            Predicate::Any(parts) if parts.is_empty() => "never".to_string(),
            Predicate::Any(parts) => {
                let rendered: Vec<String> = parts.iter().map(Self::describe_nested).collect();
                rendered.join(" or ")
            }
        }
    }

    fn describe_nested(p: &Predicate) -> String {
        match p {
            Predicate::Is { .. } => p.describe(),
            _ => format!("({})", p.describe()),
        }
    }
}
