//! Catalog container and construction-time validation.
//!
//! A defective catalog (dangling keys, out-of-domain values, dependency
//! cycles) is the only way the engine can reach a contradiction at runtime,
//! so all of that is rejected when the catalog is built.

use std::collections::{BTreeSet, HashMap, HashSet};
use thiserror::Error;

use super::answer::{AnswerKey, AnswerValue};
use super::predicate::Predicate;
use super::question::Question;
use super::visa_type::{VisaCode, VisaType};

/// Catalog construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Catalog has no visa types")]
    NoVisaTypes,

    #[error("Catalog has no questions")]
    NoQuestions,

    #[error("Duplicate visa code: {0}")]
    DuplicateVisaCode(VisaCode),

    #[error("Duplicate question key: {0}")]
    DuplicateQuestionKey(AnswerKey),

    #[error("Duplicate question priority {priority} (keys '{first}' and '{second}')")]
    DuplicatePriority {
        priority: u16,
        first: AnswerKey,
        second: AnswerKey,
    },

    #[error("Visa {code} references unknown key '{key}'")]
    UnknownPredicateKey { code: VisaCode, key: AnswerKey },

    #[error("Question '{question}' guard references unknown key '{key}'")]
    UnknownGuardKey { question: AnswerKey, key: AnswerKey },

    #[error("Question '{question}' depends on unknown key '{key}'")]
    UnknownDependency { question: AnswerKey, key: AnswerKey },

    #[error("Question dependency cycle involving '{0}'")]
    DependencyCycle(AnswerKey),

    #[error("Visa {code} expects value \"{value}\" outside the domain of question '{key}'")]
    ValueOutsideDomain {
        code: VisaCode,
        key: AnswerKey,
        value: AnswerValue,
    },
}

/// Immutable rule catalog plus question bank.
///
/// Questions are held in priority order; both collections are read-only
/// after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    visas: Vec<VisaType>,
    questions: Vec<Question>,
}

impl Catalog {
    /// Builds and validates a catalog.
    ///
    /// # Errors
    ///
    /// Any `CatalogError`; see the variants for the individual authoring
    /// defects this rejects.
    pub fn new(visas: Vec<VisaType>, questions: Vec<Question>) -> Result<Self, CatalogError> {
        if visas.is_empty() {
            return Err(CatalogError::NoVisaTypes);
        }
        if questions.is_empty() {
            return Err(CatalogError::NoQuestions);
        }

        let mut codes = HashSet::new();
        for visa in &visas {
            if !codes.insert(visa.code().clone()) {
                return Err(CatalogError::DuplicateVisaCode(visa.code().clone()));
            }
        }

        let mut by_key: HashMap<AnswerKey, &Question> = HashMap::new();
        let mut by_priority: HashMap<u16, &Question> = HashMap::new();
        for question in &questions {
            if by_key.insert(question.key().clone(), question).is_some() {
                return Err(CatalogError::DuplicateQuestionKey(question.key().clone()));
            }
            if let Some(existing) = by_priority.insert(question.priority(), question) {
                return Err(CatalogError::DuplicatePriority {
                    priority: question.priority(),
                    first: existing.key().clone(),
                    second: question.key().clone(),
                });
            }
        }

        for visa in &visas {
            Self::check_terms(visa.predicate(), &by_key, |key, value| match value {
                Some(value) => CatalogError::ValueOutsideDomain {
                    code: visa.code().clone(),
                    key,
                    value,
                },
                None => CatalogError::UnknownPredicateKey {
                    code: visa.code().clone(),
                    key,
                },
            })?;
        }

        for question in &questions {
            Self::check_terms(question.relevance_guard(), &by_key, |key, _| {
                CatalogError::UnknownGuardKey {
                    question: question.key().clone(),
                    key,
                }
            })?;
            for dep in question.depends_on() {
                if !by_key.contains_key(dep) {
                    return Err(CatalogError::UnknownDependency {
                        question: question.key().clone(),
                        key: dep.clone(),
                    });
                }
            }
        }

        Self::check_dependency_cycles(&questions, &by_key)?;

        let mut questions = questions;
        questions.sort_by_key(Question::priority);

        Ok(Self { visas, questions })
    }

    /// All visa types.
    pub fn visas(&self) -> &[VisaType] {
        &self.visas
    }

    /// All questions, in priority order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Looks up a question by its key.
    pub fn question_by_key(&self, key: &AnswerKey) -> Option<&Question> {
        self.questions.iter().find(|q| q.key() == key)
    }

    /// Looks up a visa type by code.
    pub fn visa_by_code(&self, code: &VisaCode) -> Option<&VisaType> {
        self.visas.iter().find(|v| v.code() == code)
    }

    // Walks every `Is` term of a predicate and verifies the key resolves to
    // a bank question whose option domain contains the expected value.
    // `on_error` receives `Some(value)` for a domain violation and `None`
    // for an unknown key.
    fn check_terms(
        predicate: &Predicate,
        by_key: &HashMap<AnswerKey, &Question>,
        on_error: impl Fn(AnswerKey, Option<AnswerValue>) -> CatalogError + Copy,
    ) -> Result<(), CatalogError> {
        match predicate {
            Predicate::Is { key, value } => match by_key.get(key) {
                None => Err(on_error(key.clone(), None)),
                Some(question) if !question.allows(value) => {
                    Err(on_error(key.clone(), Some(value.clone())))
                }
                Some(_) => Ok(()),
            },
            Predicate::All(parts) | Predicate::Any(parts) => {
                for part in parts {
                    Self::check_terms(part, by_key, on_error)?;
                }
                Ok(())
            }
        }
    }

    fn check_dependency_cycles(
        questions: &[Question],
        by_key: &HashMap<AnswerKey, &Question>,
    ) -> Result<(), CatalogError> {
        for question in questions {
            let mut visited = BTreeSet::new();
            let mut stack = vec![question.key().clone()];
            while let Some(key) = stack.pop() {
                if !visited.insert(key.clone()) {
                    continue;
                }
                if let Some(q) = by_key.get(&key) {
                    for dep in q.depends_on() {
                        if dep == question.key() {
                            return Err(CatalogError::DependencyCycle(question.key().clone()));
                        }
                        stack.push(dep.clone());
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> AnswerKey {
        AnswerKey::new(s).unwrap()
    }

    fn value(s: &str) -> AnswerValue {
        AnswerValue::new(s).unwrap()
    }

    fn purpose_question() -> Question {
        Question::new(
            key("purpose"),
            "What is the purpose of your travel?",
            vec![value("tourism"), value("business")],
            Predicate::always(),
            vec![],
            10,
        )
    }

    fn tourist_visa() -> VisaType {
        VisaType::new(
            VisaCode::new("B-2").unwrap(),
            "Visitor for pleasure",
            Predicate::is(key("purpose"), value("tourism")),
            60,
        )
    }

    #[test]
    fn valid_catalog_builds() {
        let catalog = Catalog::new(vec![tourist_visa()], vec![purpose_question()]);
        assert!(catalog.is_ok());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(
            Catalog::new(vec![], vec![purpose_question()]).unwrap_err(),
            CatalogError::NoVisaTypes
        );
        assert_eq!(
            Catalog::new(vec![tourist_visa()], vec![]).unwrap_err(),
            CatalogError::NoQuestions
        );
    }

    #[test]
    fn duplicate_visa_code_is_rejected() {
        let result = Catalog::new(vec![tourist_visa(), tourist_visa()], vec![purpose_question()]);
        assert!(matches!(result, Err(CatalogError::DuplicateVisaCode(_))));
    }

    #[test]
    fn duplicate_priority_is_rejected() {
        let clash = Question::new(
            key("other"),
            "Other?",
            vec![value("yes"), value("no")],
            Predicate::always(),
            vec![],
            10,
        );
        let result = Catalog::new(vec![tourist_visa()], vec![purpose_question(), clash]);
        assert!(matches!(result, Err(CatalogError::DuplicatePriority { .. })));
    }

    #[test]
    fn predicate_over_unknown_key_is_rejected() {
        let visa = VisaType::new(
            VisaCode::new("X-1").unwrap(),
            "Dangling",
            Predicate::is(key("missing"), value("yes")),
            50,
        );
        let result = Catalog::new(vec![visa], vec![purpose_question()]);
        assert!(matches!(result, Err(CatalogError::UnknownPredicateKey { .. })));
    }

    #[test]
    fn predicate_value_outside_domain_is_rejected() {
        let visa = VisaType::new(
            VisaCode::new("X-1").unwrap(),
            "Out of domain",
            Predicate::is(key("purpose"), value("vacation")),
            50,
        );
        let result = Catalog::new(vec![visa], vec![purpose_question()]);
        assert!(matches!(result, Err(CatalogError::ValueOutsideDomain { .. })));
    }

    #[test]
    fn unknown_dependency_is_rejected() {
        let question = Question::new(
            key("branch"),
            "Branch?",
            vec![value("yes"), value("no")],
            Predicate::always(),
            vec![key("missing")],
            20,
        );
        let result = Catalog::new(vec![tourist_visa()], vec![purpose_question(), question]);
        assert!(matches!(result, Err(CatalogError::UnknownDependency { .. })));
    }

    #[test]
    fn dependency_cycle_is_rejected() {
        let a = Question::new(
            key("a"),
            "A?",
            vec![value("yes"), value("no")],
            Predicate::always(),
            vec![key("b")],
            20,
        );
        let b = Question::new(
            key("b"),
            "B?",
            vec![value("yes"), value("no")],
            Predicate::always(),
            vec![key("a")],
            30,
        );
        let result = Catalog::new(vec![tourist_visa()], vec![purpose_question(), a, b]);
        assert!(matches!(result, Err(CatalogError::DependencyCycle(_))));
    }

    #[test]
    fn questions_are_sorted_by_priority() {
        let late = Question::new(
            key("late"),
            "Late?",
            vec![value("yes"), value("no")],
            Predicate::always(),
            vec![],
            5,
        );
        let catalog = Catalog::new(vec![tourist_visa()], vec![purpose_question(), late]).unwrap();
        assert_eq!(catalog.questions()[0].key().as_str(), "late");
        assert_eq!(catalog.questions()[1].key().as_str(), "purpose");
    }
}
