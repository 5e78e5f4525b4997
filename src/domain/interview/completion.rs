//! Completion Policy - decides whether the session is done and with what.
//!
//! InProgress -> Complete is the only transition, taken when exactly one
//! candidate remains or when no further question can discriminate among the
//! remaining ones. In the latter case the most specific rank wins; a tie at
//! that rank is a genuine ambiguity and is surfaced as such.

use super::errors::InterviewError;
use super::filter;
use super::recommendation::{Recommendation, RecommendationBasis};
use super::selector;
use crate::domain::catalog::{AnswerSet, Catalog, Question, VisaType};

/// Result of evaluating the completion policy after filtering.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'a> {
    /// The interview continues with the given question.
    NextQuestion {
        question: &'a Question,
        remaining_candidates: usize,
    },
    /// The interview is complete.
    Complete(Recommendation),
}

/// Runs filter, completion check, and selection in order.
///
/// # Errors
///
/// - `NoEligibleCategory` when every visa type is excluded. The catalog is
///   expected to guarantee coverage, so this indicates defective reference
///   data and is logged rather than defaulting to an arbitrary category.
pub fn evaluate<'a>(
    catalog: &'a Catalog,
    answers: &AnswerSet,
) -> Result<Outcome<'a>, InterviewError> {
    let candidates = filter::candidates(catalog, answers);

    if candidates.is_empty() {
        tracing::error!(
            answers = %render_answers(answers),
            "no eligible visa category remains; catalog coverage defect"
        );
        return Err(InterviewError::NoEligibleCategory);
    }

    if let [only] = candidates.as_slice() {
        return Ok(Outcome::Complete(Recommendation::new(
            only,
            RecommendationBasis::UniqueCandidate,
        )));
    }

    if let Some(question) = selector::select_next(catalog, &candidates, answers) {
        return Ok(Outcome::NextQuestion {
            question,
            remaining_candidates: candidates.len(),
        });
    }

    Ok(Outcome::Complete(tie_break(&candidates)))
}

// No discriminating question remains: rank decides. Ordering by
// (rank, code) keeps the pick deterministic even inside an ambiguous tie.
fn tie_break(candidates: &[&VisaType]) -> Recommendation {
    let mut ordered: Vec<&VisaType> = candidates.to_vec();
    ordered.sort_by_key(|v| (v.specificity_rank(), v.code().clone()));

    let winner = ordered[0];
    let tied: Vec<&VisaType> = ordered[1..]
        .iter()
        .copied()
        .filter(|v| v.specificity_rank() == winner.specificity_rank())
        .collect();

    if tied.is_empty() {
        Recommendation::new(winner, RecommendationBasis::SpecificityTieBreak)
    } else {
        Recommendation::new(
            winner,
            RecommendationBasis::AmbiguousTie {
                runners_up: tied.iter().map(|v| v.code().clone()).collect(),
            },
        )
    }
}

fn render_answers(answers: &AnswerSet) -> String {
    answers
        .iter()
        .map(|e| format!("{}={}", e.key, e.value))
        .collect::<Vec<_>>()
        .join(", ")
}
