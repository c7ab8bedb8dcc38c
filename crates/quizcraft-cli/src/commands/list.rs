//! The `quizcraft list` command.

use std::path::Path;

use anyhow::Result;
use quizcraft_store::QuizStore;

pub fn execute(data_dir: &Path) -> Result<()> {
    let store = QuizStore::open(data_dir)?;
    let quizzes = store.load_all_quizzes()?;

    if quizzes.is_empty() {
        println!("No quizzes stored. Import one with: quizcraft import --quiz <file>");
        return Ok(());
    }

    println!("{}", quizcraft_report::quiz_table(&quizzes));
    println!("{} quiz(zes) stored.", quizzes.len());

    Ok(())
}
