//! The `quizcraft init` command.

use std::path::Path;

use anyhow::Result;
use quizcraft_store::QuizStore;

pub fn execute(data_dir: &Path) -> Result<()> {
    QuizStore::open(data_dir)?;
    println!("Created data directory at {}", data_dir.display());

    let example_path = Path::new("example-quiz.toml");
    if example_path.exists() {
        println!("example-quiz.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUIZ)?;
        println!("Created example-quiz.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit example-quiz.toml with your own questions");
    println!("  2. Run: quizcraft validate --quiz example-quiz.toml");
    println!("  3. Run: quizcraft import --quiz example-quiz.toml");
    println!("  4. Run: quizcraft attempt \"General Knowledge\" --student \"Your Name\"");

    Ok(())
}

const EXAMPLE_QUIZ: &str = r#"[quiz]
title = "General Knowledge"
description = "A short starter quiz"
created_by = "quizcraft"
time_limit_minutes = 10
passing_percentage = 60

[[questions]]
kind = "multiple_choice"
text = "What is the capital of France?"
marks = 2
options = ["London", "Paris", "Berlin", "Madrid"]
correct_answer = "Paris"

[[questions]]
kind = "true_false"
text = "The Pacific is the largest ocean on Earth."
marks = 1
correct_answer = "True"

[[questions]]
kind = "short_answer"
text = "Which planet is known as the Red Planet?"
marks = 2
correct_answer = "Mars"
case_sensitive = false
"#;
