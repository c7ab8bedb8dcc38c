//! quizcraft-core — Quiz domain model and grading engine.
//!
//! This crate defines the question variants, quiz composition rules, and the
//! result/grading logic that the rest of quizcraft builds on.

pub mod parser;
pub mod question;
pub mod quiz;
pub mod result;
pub mod validate;

pub use question::{Question, QuestionKind};
pub use quiz::Quiz;
pub use result::{AttemptResult, Grade};
