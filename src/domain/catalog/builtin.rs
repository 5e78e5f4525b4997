//! Built-in US visa decision table.
//!
//! Authored from the visa categories themselves rather than recovered from
//! earlier ad hoc test scripts. Every `purpose` branch narrows to at least
//! one category, so an empty candidate set is unreachable with this data.

use once_cell::sync::Lazy;

use super::answer::{AnswerKey, AnswerValue};
use super::catalog::Catalog;
use super::predicate::Predicate;
use super::question::Question;
use super::visa_type::{VisaCode, VisaType};

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new(visa_types(), questions()).expect("built-in catalog must be valid")
});

/// Returns the built-in catalog.
pub fn builtin_catalog() -> &'static Catalog {
    &BUILTIN
}

fn key(s: &str) -> AnswerKey {
    AnswerKey::new(s).expect("built-in key")
}

fn value(s: &str) -> AnswerValue {
    AnswerValue::new(s).expect("built-in value")
}

fn term(k: &str, v: &str) -> Predicate {
    Predicate::is(key(k), value(v))
}

fn all(parts: Vec<Predicate>) -> Predicate {
    Predicate::All(parts)
}

fn yes_no() -> Vec<AnswerValue> {
    vec![value("yes"), value("no")]
}

fn questions() -> Vec<Question> {
    vec![
        Question::new(
            key("purpose"),
            "What is the primary purpose of your travel to the United States?",
            vec![
                value("tourism"),
                value("business"),
                value("diplomatic"),
                value("study"),
                value("work"),
                value("transit"),
                value("journalism"),
                value("exchange"),
            ],
            Predicate::always(),
            vec![],
            10,
        ),
        Question::new(
            key("diplomat"),
            "Are you traveling on behalf of a foreign government or diplomatic mission?",
            yes_no(),
            term("purpose", "diplomatic"),
            vec![key("purpose")],
            20,
        ),
        Question::new(
            key("governmentOfficial"),
            "Will you serve as an ambassador, minister, or accredited government official?",
            yes_no(),
            term("purpose", "diplomatic"),
            vec![key("diplomat")],
            30,
        ),
        // Only relevant on the personal-employee branch, i.e. after an
        // explicit "no" to governmentOfficial.
        Question::new(
            key("workingForDiplomat"),
            "Are you a personal employee or attendant of a diplomat or official?",
            yes_no(),
            all(vec![
                term("purpose", "diplomatic"),
                term("governmentOfficial", "no"),
            ]),
            vec![key("governmentOfficial")],
            40,
        ),
        Question::new(
            key("internationalOrg"),
            "Are you a designated representative to an international organization?",
            yes_no(),
            term("purpose", "diplomatic"),
            vec![key("diplomat")],
            50,
        ),
        Question::new(
            key("studyType"),
            "Will you attend an academic institution or a vocational program?",
            vec![value("academic"), value("vocational")],
            term("purpose", "study"),
            vec![key("purpose")],
            60,
        ),
        Question::new(
            key("workCategory"),
            "Which employment category best describes your position?",
            vec![value("specialty"), value("transfer"), value("extraordinary")],
            term("purpose", "work"),
            vec![key("purpose")],
            70,
        ),
    ]
}

fn visa(code: &str, name: &str, predicate: Predicate, rank: u16) -> VisaType {
    VisaType::new(VisaCode::new(code).expect("built-in code"), name, predicate, rank)
}

fn visa_types() -> Vec<VisaType> {
    vec![
        visa(
            "A-1",
            "Ambassador, public minister, or career diplomat",
            all(vec![
                term("purpose", "diplomatic"),
                term("diplomat", "yes"),
                term("governmentOfficial", "yes"),
                term("internationalOrg", "no"),
            ]),
            10,
        ),
        visa(
            "A-3",
            "Personal employee of an A-1 or A-2 classification holder",
            all(vec![
                term("purpose", "diplomatic"),
                term("diplomat", "yes"),
                term("governmentOfficial", "no"),
                term("workingForDiplomat", "yes"),
            ]),
            15,
        ),
        visa(
            "A-2",
            "Other foreign government official or employee",
            all(vec![
                term("purpose", "diplomatic"),
                term("diplomat", "yes"),
                term("governmentOfficial", "no"),
                term("workingForDiplomat", "no"),
                term("internationalOrg", "no"),
            ]),
            20,
        ),
        visa(
            "G-1",
            "Representative to an international organization",
            all(vec![
                term("purpose", "diplomatic"),
                term("internationalOrg", "yes"),
                term("workingForDiplomat", "no"),
            ]),
            30,
        ),
        visa(
            "F-1",
            "Academic student",
            all(vec![term("purpose", "study"), term("studyType", "academic")]),
            40,
        ),
        visa(
            "M-1",
            "Vocational student",
            all(vec![term("purpose", "study"), term("studyType", "vocational")]),
            41,
        ),
        visa(
            "H-1B",
            "Specialty occupation worker",
            all(vec![term("purpose", "work"), term("workCategory", "specialty")]),
            50,
        ),
        visa(
            "L-1",
            "Intracompany transferee",
            all(vec![term("purpose", "work"), term("workCategory", "transfer")]),
            51,
        ),
        visa(
            "O-1",
            "Individual of extraordinary ability",
            all(vec![
                term("purpose", "work"),
                term("workCategory", "extraordinary"),
            ]),
            52,
        ),
        visa("B-1", "Visitor for business", term("purpose", "business"), 60),
        visa("B-2", "Visitor for pleasure", term("purpose", "tourism"), 61),
        visa("C-1", "Alien in transit", term("purpose", "transit"), 62),
        visa(
            "I",
            "Representative of foreign information media",
            term("purpose", "journalism"),
            63,
        ),
        visa("J-1", "Exchange visitor", term("purpose", "exchange"), 64),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{AnswerSet, Truth};

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.visas().len(), 14);
        assert_eq!(catalog.questions().len(), 7);
    }

    #[test]
    fn every_purpose_option_keeps_at_least_one_candidate() {
        let catalog = builtin_catalog();
        let purpose = catalog.question_by_key(&key("purpose")).unwrap();

        for option in purpose.options() {
            let mut answers = AnswerSet::new();
            answers.insert(key("purpose"), option.clone()).unwrap();
            let remaining = catalog
                .visas()
                .iter()
                .filter(|v| v.predicate().eval(&answers) != Truth::False)
                .count();
            assert!(remaining >= 1, "purpose={} strands the interview", option);
        }
    }

    #[test]
    fn tourism_matches_only_b2() {
        let catalog = builtin_catalog();
        let mut answers = AnswerSet::new();
        answers.insert(key("purpose"), value("tourism")).unwrap();

        let remaining: Vec<&str> = catalog
            .visas()
            .iter()
            .filter(|v| v.predicate().eval(&answers) != Truth::False)
            .map(|v| v.code().as_str())
            .collect();
        assert_eq!(remaining, vec!["B-2"]);
    }

    #[test]
    fn working_for_diplomat_guard_requires_explicit_no() {
        let catalog = builtin_catalog();
        let question = catalog.question_by_key(&key("workingForDiplomat")).unwrap();

        let mut answers = AnswerSet::new();
        answers.insert(key("purpose"), value("diplomatic")).unwrap();
        answers.insert(key("diplomat"), value("yes")).unwrap();
        assert!(!question.is_askable(&answers));

        answers
            .insert(key("governmentOfficial"), value("no"))
            .unwrap();
        assert!(question.is_askable(&answers));
    }
}
