//! Plain-text rendering of questions, quizzes, and results.

use std::fmt::Write;

use quizcraft_core::{AttemptResult, Question, QuestionKind, Quiz};

/// Render one question with its options, the way it is shown to a student.
pub fn format_question(question: &Question) -> String {
    let mut out = String::new();
    writeln!(out, "Q. {}", question.text()).unwrap();
    writeln!(out, "Marks: {}", question.marks()).unwrap();

    match question {
        Question::ShortAnswer { case_sensitive, .. } => {
            if *case_sensitive {
                out.push_str("Type: Short Answer (Case Sensitive)\n");
            } else {
                out.push_str("Type: Short Answer\n");
            }
        }
        _ => {
            out.push_str("Options:\n");
            for (i, option) in question.options().iter().enumerate() {
                let label = (b'A' + i as u8) as char;
                writeln!(out, "  {label}) {option}").unwrap();
            }
        }
    }

    out
}

/// Render a quiz header followed by every question
/// (the `show` command's body).
pub fn format_quiz(quiz: &Quiz) -> String {
    if !quiz.has_questions() {
        return "No questions in this quiz.\n".to_string();
    }

    let mut out = String::new();
    writeln!(out, "Quiz: {}", quiz.title()).unwrap();
    writeln!(out, "Description: {}", quiz.description()).unwrap();
    writeln!(out, "Total Questions: {}", quiz.question_count()).unwrap();
    writeln!(out, "Total Marks: {}", quiz.total_marks()).unwrap();
    writeln!(out, "Passing Marks: {}", quiz.passing_marks()).unwrap();
    if quiz.has_time_limit() {
        writeln!(out, "Time Limit: {} minutes", quiz.time_limit_minutes()).unwrap();
    }
    out.push('\n');

    for (i, question) in quiz.questions().iter().enumerate() {
        writeln!(out, "Question {}:", i + 1).unwrap();
        out.push_str(&format_question(question));
        out.push('\n');
    }

    out
}

/// Render quiz metadata and per-kind counts.
pub fn quiz_summary(quiz: &Quiz) -> String {
    let mut out = String::new();
    writeln!(out, "Title: {}", quiz.title()).unwrap();
    writeln!(out, "Created by: {}", quiz.created_by()).unwrap();
    writeln!(
        out,
        "Date Created: {}",
        quiz.created_at().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .unwrap();
    writeln!(out, "Total Questions: {}", quiz.question_count()).unwrap();
    writeln!(out, "Total Marks: {}", quiz.total_marks()).unwrap();
    writeln!(out, "Passing Percentage: {}%", quiz.passing_percentage()).unwrap();
    if quiz.has_time_limit() {
        writeln!(out, "Time Limit: {} minutes", quiz.time_limit_minutes()).unwrap();
    }
    for kind in [
        QuestionKind::MultipleChoice,
        QuestionKind::TrueFalse,
        QuestionKind::ShortAnswer,
    ] {
        writeln!(
            out,
            "{} Questions: {}",
            kind,
            quiz.count_questions_by_kind(kind)
        )
        .unwrap();
    }
    out
}

/// Render the boxed result summary.
pub fn format_result(result: &AttemptResult) -> String {
    let mut out = String::new();
    out.push_str("========== QUIZ RESULT ==========\n");
    writeln!(out, "Quiz: {}", result.quiz_title()).unwrap();
    write!(out, "Student: {}", result.student_name()).unwrap();
    if !result.student_id().is_empty() {
        write!(out, " (ID: {})", result.student_id()).unwrap();
    }
    out.push('\n');
    writeln!(
        out,
        "Date: {}",
        result.attempt_date().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .unwrap();
    writeln!(
        out,
        "Time Taken: {}",
        format_duration_secs(result.time_taken_secs())
    )
    .unwrap();
    out.push('\n');
    writeln!(
        out,
        "Score: {} / {}",
        result.marks_obtained(),
        result.total_marks()
    )
    .unwrap();
    writeln!(out, "Percentage: {:.2}%", result.percentage()).unwrap();
    writeln!(out, "Grade: {}", result.grade()).unwrap();
    writeln!(
        out,
        "Result: {}",
        if result.passed() { "PASSED" } else { "FAILED" }
    )
    .unwrap();
    out.push('\n');
    writeln!(
        out,
        "Correct Answers: {} / {}",
        result.correct_answers_count(),
        result.questions().len()
    )
    .unwrap();
    writeln!(out, "Incorrect Answers: {}", result.incorrect_answers_count()).unwrap();
    writeln!(out, "Unanswered: {}", result.unanswered_count()).unwrap();
    out.push_str("================================\n");
    out
}

/// Render the result summary plus a per-question breakdown.
pub fn format_detailed_result(result: &AttemptResult) -> String {
    let mut out = format_result(result);
    out.push_str("\n========== DETAILED BREAKDOWN ==========\n\n");

    for (i, question) in result.questions().iter().enumerate() {
        writeln!(out, "Question {}:", i + 1).unwrap();
        out.push_str(&format_question(question));

        match result.answer(i) {
            Some(answer) => writeln!(out, "Your Answer: {answer}").unwrap(),
            None => out.push_str("Your Answer: [Not Answered]\n"),
        }
        writeln!(out, "Correct Answer: {}", question.correct_answer()).unwrap();

        if result.is_answer_correct(i) {
            writeln!(out, "Status: CORRECT ({} marks)", question.marks()).unwrap();
        } else {
            out.push_str("Status: INCORRECT (0 marks)\n");
        }
        out.push('\n');
    }

    out.push_str("========================================\n");
    out
}

/// Format seconds as `"5m 30s"` style, with hours when needed.
pub fn format_duration_secs(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let rest = seconds % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m {rest}s")
    } else if minutes > 0 {
        format!("{minutes}m {rest}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quiz() -> Quiz {
        let mut quiz = Quiz::new("Arithmetic", "Basic sums");
        quiz.add_question(Question::multiple_choice(
            "2+2=?",
            1,
            vec!["3".into(), "4".into(), "5".into()],
            "4",
        ));
        quiz.add_question(Question::short_answer("Capital of France?", 2, "Paris", true));
        quiz
    }

    #[test]
    fn question_rendering_labels_options() {
        let quiz = sample_quiz();
        let text = format_question(quiz.question(0).unwrap());
        assert!(text.contains("Q. 2+2=?"));
        assert!(text.contains("  A) 3"));
        assert!(text.contains("  B) 4"));
        assert!(text.contains("  C) 5"));
    }

    #[test]
    fn short_answer_notes_case_sensitivity() {
        let quiz = sample_quiz();
        let text = format_question(quiz.question(1).unwrap());
        assert!(text.contains("Short Answer (Case Sensitive)"));
        assert!(!text.contains("Options:"));
    }

    #[test]
    fn quiz_rendering_includes_header_and_questions() {
        let quiz = sample_quiz();
        let text = format_quiz(&quiz);
        assert!(text.contains("Quiz: Arithmetic"));
        assert!(text.contains("Total Questions: 2"));
        assert!(text.contains("Total Marks: 3"));
        assert!(text.contains("Question 1:"));
        assert!(text.contains("Question 2:"));

        let empty = Quiz::new("Empty", "");
        assert_eq!(format_quiz(&empty), "No questions in this quiz.\n");
    }

    #[test]
    fn summary_counts_by_kind() {
        let text = quiz_summary(&sample_quiz());
        assert!(text.contains("Multiple Choice Questions: 1"));
        assert!(text.contains("True/False Questions: 0"));
        assert!(text.contains("Short Answer Questions: 1"));
    }

    #[test]
    fn result_rendering_surfaces_all_fields() {
        let quiz = sample_quiz();
        let mut result = AttemptResult::new(&quiz, "Ada", "S1");
        result.record_answer(0, "4");
        result.set_time_taken_secs(95);
        result.calculate_result(50);

        let text = format_result(&result);
        assert!(text.contains("Quiz: Arithmetic"));
        assert!(text.contains("Student: Ada (ID: S1)"));
        assert!(text.contains("Time Taken: 1m 35s"));
        assert!(text.contains("Score: 1 / 3"));
        assert!(text.contains("Percentage: 33.33%"));
        assert!(text.contains("Result: FAILED"));
        assert!(text.contains("Unanswered: 1"));
    }

    #[test]
    fn detailed_rendering_marks_each_question() {
        let quiz = sample_quiz();
        let mut result = AttemptResult::new(&quiz, "Ada", "");
        result.record_answer(0, "4");
        result.calculate_result(50);

        let text = format_detailed_result(&result);
        assert!(text.contains("DETAILED BREAKDOWN"));
        assert!(text.contains("Your Answer: 4"));
        assert!(text.contains("Status: CORRECT (1 marks)"));
        assert!(text.contains("Your Answer: [Not Answered]"));
        assert!(text.contains("Status: INCORRECT (0 marks)"));
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration_secs(42), "42s");
        assert_eq!(format_duration_secs(330), "5m 30s");
        assert_eq!(format_duration_secs(3725), "1h 2m 5s");
    }
}
