//! Candidate Filter - derives the set of visa types not yet excluded.

use crate::domain::catalog::{AnswerSet, Catalog, Truth, VisaType};

/// Returns the visa types whose predicate is still satisfiable given the
/// answers so far.
///
/// Pure function of the current answers: a visa is excluded the moment a
/// required term evaluates to `False`, and stays excluded because answers
/// are never retracted. Candidate order follows catalog order, which keeps
/// downstream selection deterministic.
pub fn candidates<'a>(catalog: &'a Catalog, answers: &AnswerSet) -> Vec<&'a VisaType> {
    catalog
        .visas()
        .iter()
        .filter(|visa| visa.predicate().eval(answers) != Truth::False)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{builtin_catalog, AnswerKey, AnswerValue};

    fn key(s: &str) -> AnswerKey {
        AnswerKey::new(s).unwrap()
    }

    fn value(s: &str) -> AnswerValue {
        AnswerValue::new(s).unwrap()
    }

    fn codes(candidates: &[&VisaType]) -> Vec<String> {
        candidates.iter().map(|v| v.code().to_string()).collect()
    }

    #[test]
    fn empty_answers_keep_every_visa_candidate() {
        let catalog = builtin_catalog();
        let result = candidates(catalog, &AnswerSet::new());
        assert_eq!(result.len(), catalog.visas().len());
    }

    #[test]
    fn purpose_answer_excludes_other_branches() {
        let catalog = builtin_catalog();
        let mut answers = AnswerSet::new();
        answers.insert(key("purpose"), value("diplomatic")).unwrap();

        let result = codes(&candidates(catalog, &answers));
        assert_eq!(result, vec!["A-1", "A-3", "A-2", "G-1"]);
    }

    #[test]
    fn narrowing_is_monotonic_along_a_path() {
        let catalog = builtin_catalog();
        let mut answers = AnswerSet::new();
        let mut previous = candidates(catalog, &answers).len();

        for (k, v) in [
            ("purpose", "diplomatic"),
            ("diplomat", "yes"),
            ("governmentOfficial", "yes"),
            ("internationalOrg", "no"),
        ] {
            answers.insert(key(k), value(v)).unwrap();
            let current = candidates(catalog, &answers).len();
            assert!(current <= previous);
            previous = current;
        }
        assert_eq!(previous, 1);
    }

    #[test]
    fn unanswered_branch_keys_do_not_exclude() {
        let catalog = builtin_catalog();
        let mut answers = AnswerSet::new();
        answers.insert(key("purpose"), value("diplomatic")).unwrap();
        answers.insert(key("diplomat"), value("yes")).unwrap();

        // governmentOfficial is still unknown, so both branches survive.
        let result = codes(&candidates(catalog, &answers));
        assert!(result.contains(&"A-1".to_string()));
        assert!(result.contains(&"A-3".to_string()));
    }
}
