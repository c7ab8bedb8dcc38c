//! Authoring lint for quizzes.
//!
//! These checks are stricter than the hard validity invariant: they catch
//! authoring mistakes (overlong text, duplicate options, out-of-range marks)
//! that a quiz can technically carry while still being gradeable. The
//! `validate` command surfaces them as warnings.

use crate::question::Question;
use crate::quiz::Quiz;

pub const MIN_QUESTION_LENGTH: usize = 5;
pub const MAX_QUESTION_LENGTH: usize = 500;
pub const MAX_ANSWER_LENGTH: usize = 200;
pub const MIN_MARKS: u32 = 1;
pub const MAX_MARKS: u32 = 100;
pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 10;
pub const MIN_TITLE_LENGTH: usize = 3;
pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_TIME_LIMIT_MINUTES: u32 = 300;

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The 0-based question index, if the warning concerns one question.
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn quiz(message: impl Into<String>) -> Self {
        ValidationWarning {
            question: None,
            message: message.into(),
        }
    }

    fn question(index: usize, message: impl Into<String>) -> Self {
        ValidationWarning {
            question: Some(index),
            message: message.into(),
        }
    }
}

/// Validate a quiz for common authoring issues.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let title = quiz.title().trim();
    if title.is_empty() {
        warnings.push(ValidationWarning::quiz("quiz title is required"));
    } else if title.len() < MIN_TITLE_LENGTH || title.len() > MAX_TITLE_LENGTH {
        warnings.push(ValidationWarning::quiz(format!(
            "quiz title must be {MIN_TITLE_LENGTH}-{MAX_TITLE_LENGTH} characters"
        )));
    }

    if quiz.time_limit_minutes() > MAX_TIME_LIMIT_MINUTES {
        warnings.push(ValidationWarning::quiz(format!(
            "time limit must not exceed {MAX_TIME_LIMIT_MINUTES} minutes"
        )));
    }

    if !quiz.has_questions() {
        warnings.push(ValidationWarning::quiz("quiz has no questions"));
    }

    for (i, question) in quiz.questions().iter().enumerate() {
        validate_question_into(i, question, &mut warnings);
    }

    warnings
}

/// Validate a single question, appending warnings.
fn validate_question_into(index: usize, question: &Question, warnings: &mut Vec<ValidationWarning>) {
    let text = question.text().trim();
    if text.is_empty() {
        warnings.push(ValidationWarning::question(index, "question text is empty"));
    } else if text.len() < MIN_QUESTION_LENGTH || text.len() > MAX_QUESTION_LENGTH {
        warnings.push(ValidationWarning::question(
            index,
            format!("question text must be {MIN_QUESTION_LENGTH}-{MAX_QUESTION_LENGTH} characters"),
        ));
    }

    let marks = question.marks();
    if !(MIN_MARKS..=MAX_MARKS).contains(&marks) {
        warnings.push(ValidationWarning::question(
            index,
            format!("marks must be between {MIN_MARKS} and {MAX_MARKS}"),
        ));
    }

    let answer = question.correct_answer().trim();
    if answer.is_empty() {
        warnings.push(ValidationWarning::question(index, "correct answer is empty"));
    } else if answer.len() > MAX_ANSWER_LENGTH {
        warnings.push(ValidationWarning::question(
            index,
            format!("correct answer must not exceed {MAX_ANSWER_LENGTH} characters"),
        ));
    }

    if let Question::MultipleChoice {
        options,
        correct_answer,
        ..
    } = question
    {
        if options.len() < MIN_OPTIONS {
            warnings.push(ValidationWarning::question(
                index,
                format!("must have at least {MIN_OPTIONS} options"),
            ));
        }
        if options.len() > MAX_OPTIONS {
            warnings.push(ValidationWarning::question(
                index,
                format!("cannot have more than {MAX_OPTIONS} options"),
            ));
        }
        if options.iter().any(|o| o.trim().is_empty()) {
            warnings.push(ValidationWarning::question(index, "options must not be empty"));
        }

        // Case-insensitive duplicate detection.
        for i in 0..options.len() {
            for j in (i + 1)..options.len() {
                if options[i].trim().to_lowercase() == options[j].trim().to_lowercase() {
                    warnings.push(ValidationWarning::question(
                        index,
                        format!("duplicate option: {:?}", options[j].trim()),
                    ));
                }
            }
        }

        let offered = options
            .iter()
            .any(|o| o.trim().to_lowercase() == correct_answer.trim().to_lowercase());
        if !offered && !correct_answer.trim().is_empty() {
            warnings.push(ValidationWarning::question(
                index,
                "correct answer is not one of the options",
            ));
        }
    }
}
