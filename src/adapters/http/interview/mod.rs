//! HTTP surface for the interview engine.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::InterviewAppState;
pub use routes::interview_router;
