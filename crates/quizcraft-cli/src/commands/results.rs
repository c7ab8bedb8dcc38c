//! The `quizcraft results` command.

use std::path::Path;

use anyhow::Result;
use quizcraft_store::QuizStore;

pub fn execute(
    data_dir: &Path,
    quiz: Option<String>,
    student: Option<String>,
    detailed: Option<String>,
) -> Result<()> {
    let store = QuizStore::open(data_dir)?;

    if let Some(filename) = detailed {
        let result = store.load_result(&filename)?;
        print!("{}", quizcraft_report::format_detailed_result(&result));
        return Ok(());
    }

    let results = match (&quiz, &student) {
        (Some(name), Some(student)) => {
            let quiz = store.load_quiz(name)?;
            let mut results = store.results_for_student(student)?;
            results.retain(|r| r.quiz_id() == quiz.id());
            results
        }
        (Some(name), None) => {
            let quiz = store.load_quiz(name)?;
            store.results_for_quiz(quiz.id())?
        }
        (None, Some(name)) => store.results_for_student(name)?,
        (None, None) => store.load_all_results()?,
    };

    if results.is_empty() {
        println!("No results found.");
        return Ok(());
    }

    println!("{}", quizcraft_report::result_table(&results));
    println!("{} result(s).", results.len());

    Ok(())
}
