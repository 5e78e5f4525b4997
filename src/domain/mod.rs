//! Domain layer - the interview engine and its reference data.

pub mod catalog;
pub mod foundation;
pub mod interview;
