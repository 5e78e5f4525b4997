//! Interview module - the adaptive eligibility engine.
//!
//! `filter` derives the candidate set, `selector` picks the next question,
//! `completion` decides when the session is done, and `InterviewSession`
//! is the aggregate that records the ordered answers.

mod aggregate;
mod completion;
mod errors;
mod filter;
mod recommendation;
mod selector;

pub use aggregate::InterviewSession;
pub use completion::{evaluate, Outcome};
pub use errors::InterviewError;
pub use filter::candidates;
pub use recommendation::{Recommendation, RecommendationBasis};
pub use selector::{is_discriminating, select_next};
