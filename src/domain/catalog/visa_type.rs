//! Rule Catalog entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::predicate::Predicate;
use crate::domain::foundation::ValidationError;

/// Visa category code (e.g. `A-1`, `B-2`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisaCode(String);

impl VisaCode {
    /// Creates a validated visa code.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the code is empty
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        if code.is_empty() {
            return Err(ValidationError::empty_field("code"));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One visa category with its eligibility predicate.
///
/// `specificity_rank` orders categories for tie-breaks when no further
/// question can discriminate: lower rank means more specific.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisaType {
    code: VisaCode,
    name: String,
    predicate: Predicate,
    specificity_rank: u16,
}

impl VisaType {
    pub fn new(
        code: VisaCode,
        name: impl Into<String>,
        predicate: Predicate,
        specificity_rank: u16,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            predicate,
            specificity_rank,
        }
    }

    pub fn code(&self) -> &VisaCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn specificity_rank(&self) -> u16 {
        self.specificity_rank
    }
}
