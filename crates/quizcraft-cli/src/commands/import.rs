//! The `quizcraft import` command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use quizcraft_store::QuizStore;

pub fn execute(data_dir: &Path, quiz_path: PathBuf) -> Result<()> {
    let quizzes = if quiz_path.is_dir() {
        quizcraft_core::parser::load_quiz_directory(&quiz_path)?
    } else {
        vec![quizcraft_core::parser::parse_quiz(&quiz_path)?]
    };

    let store = QuizStore::open(data_dir)?;
    let mut imported = 0;
    let mut skipped = 0;

    for quiz in &quizzes {
        if !quiz.is_valid() {
            println!("Skipped '{}':", quiz.title());
            for error in quiz.validation_errors() {
                println!("  {error}");
            }
            skipped += 1;
            continue;
        }
        let path = store.save_quiz(quiz)?;
        println!(
            "Imported '{}' ({} questions) -> {}",
            quiz.title(),
            quiz.question_count(),
            path.display()
        );
        imported += 1;
    }

    if skipped > 0 {
        println!("\n{imported} imported, {skipped} skipped. Fix the errors and re-import.");
    }

    Ok(())
}
