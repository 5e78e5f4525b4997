//! Final recommendation produced when a session completes.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{VisaCode, VisaType};

/// How the recommendation was reached.
///
/// Ambiguous ties are surfaced rather than silently collapsed so that
/// downstream consumers can flag the session for human review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RecommendationBasis {
    /// Exactly one candidate remained.
    UniqueCandidate,
    /// Several candidates remained with no discriminating question left;
    /// the most specific rank won outright.
    SpecificityTieBreak,
    /// Several candidates shared the most specific rank. `runners_up`
    /// lists the codes that tied with the recommended one.
    AmbiguousTie { runners_up: Vec<VisaCode> },
}

/// The recommended visa category with its justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    visa_code: VisaCode,
    visa_name: String,
    rationale: String,
    basis: RecommendationBasis,
}

impl Recommendation {
    pub fn new(visa: &VisaType, basis: RecommendationBasis) -> Self {
        Self {
            visa_code: visa.code().clone(),
            visa_name: visa.name().to_string(),
            rationale: visa.predicate().describe(),
            basis,
        }
    }

    pub fn visa_code(&self) -> &VisaCode {
        &self.visa_code
    }

    pub fn visa_name(&self) -> &str {
        &self.visa_name
    }

    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    pub fn basis(&self) -> &RecommendationBasis {
        &self.basis
    }

    /// Returns true if the recommendation needs human review.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self.basis, RecommendationBasis::AmbiguousTie { .. })
    }
}
