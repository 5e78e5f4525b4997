//! Command and query handlers, grouped by domain module.

pub mod interview;
