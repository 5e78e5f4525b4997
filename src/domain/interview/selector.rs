//! Question Selector - picks the next question deterministically.
//!
//! A question qualifies only when it is unanswered, its relevance guard
//! holds, its dependencies are answered, and it still discriminates among
//! the live candidates. The lowest bank priority wins, so an identical
//! answer history always reproduces the identical question sequence.

use crate::domain::catalog::{AnswerSet, Catalog, Question, Truth, VisaType};

/// Returns true if some allowed answer to `question` would exclude at
/// least one of the current candidates.
pub fn is_discriminating(
    question: &Question,
    candidates: &[&VisaType],
    answers: &AnswerSet,
) -> bool {
    question.options().iter().any(|option| {
        let mut hypothetical = answers.clone();
        if hypothetical
            .insert(question.key().clone(), option.clone())
            .is_err()
        {
            // Already answered; an answered question cannot discriminate.
            return false;
        }
        candidates.iter().any(|visa| {
            visa.predicate().eval(answers) != Truth::False
                && visa.predicate().eval(&hypothetical) == Truth::False
        })
    })
}

/// Picks the next question, or `None` when no discriminating, relevant,
/// dependency-satisfied, unanswered question remains (which signals the
/// completion policy to finalize).
pub fn select_next<'a>(
    catalog: &'a Catalog,
    candidates: &[&VisaType],
    answers: &AnswerSet,
) -> Option<&'a Question> {
    // Questions are held in priority order, so the first hit is the winner.
    catalog
        .questions()
        .iter()
        .find(|q| q.is_askable(answers) && is_discriminating(q, candidates, answers))
}
