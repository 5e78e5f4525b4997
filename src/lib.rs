//! Visa Interview - Adaptive Eligibility Interview Engine
//!
//! This crate implements the session-scoped interview procedure that narrows
//! a catalog of immigration visa categories down to a single recommendation
//! by asking a minimal, deterministically-ordered sequence of questions.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
