//! The `quizcraft show` command.

use std::path::Path;

use anyhow::Result;
use quizcraft_store::QuizStore;

pub fn execute(data_dir: &Path, name: &str, answers: bool) -> Result<()> {
    let store = QuizStore::open(data_dir)?;
    let quiz = store.load_quiz(name)?;

    print!("{}", quizcraft_report::format_quiz(&quiz));
    println!();
    print!("{}", quizcraft_report::quiz_summary(&quiz));

    if answers {
        println!("\nAnswers:");
        for (i, question) in quiz.questions().iter().enumerate() {
            println!("  {}. {}", i + 1, question.correct_answer());
        }
    }

    Ok(())
}
