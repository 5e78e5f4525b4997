//! Step number value object.
//!
//! Steps are the ordering guard for answer submission: a session expects
//! exactly one answer per step, and a submission carrying any other step
//! number is a conflict.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonic 1-based counter for answer submission ordering.
///
/// Equals `answers.len() + 1` for the next expected answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepNumber(u32);

impl StepNumber {
    /// The first step of a fresh session.
    pub fn first() -> Self {
        Self(1)
    }

    /// Creates a step number from a raw value.
    ///
    /// Returns `None` for zero, which is never a valid step.
    pub fn new(value: u32) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Returns the step that follows this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the raw counter value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for StepNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
