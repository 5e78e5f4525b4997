//! Interview handlers - the three session operations.

mod next_question;
mod start_interview;
mod submit_answer;

pub use next_question::{NextQuestionHandler, NextQuestionQuery, NextQuestionResult, QuestionView};
pub use start_interview::{
    ExistingSessionPolicy, StartInterviewCommand, StartInterviewHandler, StartInterviewResult,
};
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult};
