//! The `quizcraft delete` command.

use std::path::Path;

use anyhow::Result;
use quizcraft_store::QuizStore;

pub fn execute(data_dir: &Path, name: &str) -> Result<()> {
    let store = QuizStore::open(data_dir)?;
    store.delete_quiz(name)?;
    println!("Deleted quiz '{name}'.");
    Ok(())
}
