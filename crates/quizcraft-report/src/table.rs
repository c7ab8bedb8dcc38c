//! Table listings for the `list` and `results` commands.

use comfy_table::{Cell, Table};

use quizcraft_core::{AttemptResult, Quiz};

/// Build a listing table of stored quizzes.
pub fn quiz_table(quizzes: &[Quiz]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Title",
        "Questions",
        "Total Marks",
        "Pass %",
        "Time Limit",
        "Created By",
    ]);

    for quiz in quizzes {
        let time_limit = if quiz.has_time_limit() {
            format!("{} min", quiz.time_limit_minutes())
        } else {
            "none".to_string()
        };
        table.add_row(vec![
            Cell::new(quiz.title()),
            Cell::new(quiz.question_count()),
            Cell::new(quiz.total_marks()),
            Cell::new(format!("{}%", quiz.passing_percentage())),
            Cell::new(time_limit),
            Cell::new(quiz.created_by()),
        ]);
    }

    table
}

/// Build a listing table of attempt results.
pub fn result_table(results: &[AttemptResult]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Student", "Quiz", "Score", "Percent", "Grade", "Status", "Date",
    ]);

    for result in results {
        table.add_row(vec![
            Cell::new(result.student_name()),
            Cell::new(result.quiz_title()),
            Cell::new(format!(
                "{}/{}",
                result.marks_obtained(),
                result.total_marks()
            )),
            Cell::new(format!("{:.1}%", result.percentage())),
            Cell::new(result.grade()),
            Cell::new(if result.passed() { "PASSED" } else { "FAILED" }),
            Cell::new(result.attempt_date().format("%Y-%m-%d %H:%M")),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizcraft_core::Question;

    #[test]
    fn tables_render_one_row_per_entry() {
        let mut quiz = Quiz::new("Arithmetic", "");
        quiz.add_question(Question::true_false("1 < 2", 1, "true"));

        let rendered = quiz_table(std::slice::from_ref(&quiz)).to_string();
        assert!(rendered.contains("Arithmetic"));
        assert!(rendered.contains("Title"));

        let mut result = AttemptResult::new(&quiz, "Ada", "");
        result.record_answer(0, "true");
        result.calculate_result(50);

        let rendered = result_table(&[result]).to_string();
        assert!(rendered.contains("Ada"));
        assert!(rendered.contains("PASSED"));
        assert!(rendered.contains("100.0%"));
    }
}
