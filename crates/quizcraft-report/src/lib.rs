//! quizcraft-report — Textual rendering of quizzes and attempt results.
//!
//! Pure formatting over the core types; nothing here touches storage or
//! mutates domain state.

pub mod table;
pub mod text;

pub use table::{quiz_table, result_table};
pub use text::{
    format_detailed_result, format_duration_secs, format_question, format_quiz, format_result,
    quiz_summary,
};
