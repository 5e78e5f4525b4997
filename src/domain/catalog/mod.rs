//! Catalog module - immutable reference data for the interview engine.
//!
//! The Rule Catalog (visa types with eligibility predicates) and the
//! Question Bank (questions with guards and dependencies) are read-only at
//! runtime. Answers resolve by exact key/value matching; display prompts
//! never participate in matching.

mod answer;
mod builtin;
#[allow(clippy::module_inception)]
mod catalog;
mod predicate;
mod question;
mod visa_type;

pub use answer::{AnswerKey, AnswerSet, AnswerValue};
pub use builtin::builtin_catalog;
pub use catalog::{Catalog, CatalogError};
pub use predicate::{Predicate, Truth};
pub use question::Question;
pub use visa_type::{VisaCode, VisaType};
