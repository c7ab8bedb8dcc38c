//! TOML quiz authoring format.
//!
//! Quizzes are authored as TOML files and parsed into [`Quiz`] values with a
//! fresh identity. Parsing is deliberately permissive about domain validity:
//! a structurally well-formed file whose questions break the domain rules
//! still parses, so `validate` can report on it.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::question::{Question, QuestionKind};
use crate::quiz::Quiz;

/// Intermediate TOML structure for quiz files.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    created_by: String,
    #[serde(default)]
    time_limit_minutes: u32,
    #[serde(default = "default_passing_percentage")]
    passing_percentage: u32,
}

fn default_passing_percentage() -> u32 {
    50
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    kind: String,
    text: String,
    #[serde(default = "default_marks")]
    marks: u32,
    #[serde(default)]
    options: Vec<String>,
    correct_answer: String,
    #[serde(default)]
    case_sensitive: bool,
}

fn default_marks() -> u32 {
    1
}

/// Parse a single TOML file into a [`Quiz`].
pub fn parse_quiz(path: &Path) -> Result<Quiz> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse a TOML string into a [`Quiz`] (useful for testing).
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<Quiz> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut quiz = Quiz::new(parsed.quiz.title, parsed.quiz.description);
    quiz.set_created_by(parsed.quiz.created_by);
    quiz.set_time_limit_minutes(parsed.quiz.time_limit_minutes);
    if !quiz.set_passing_percentage(parsed.quiz.passing_percentage) {
        anyhow::bail!(
            "passing_percentage must be 0-100, got {}",
            parsed.quiz.passing_percentage
        );
    }

    for (i, q) in parsed.questions.into_iter().enumerate() {
        let kind = QuestionKind::from_str(&q.kind)
            .map_err(|e| anyhow::anyhow!("question {}: {}", i + 1, e))?;
        let question = match kind {
            QuestionKind::MultipleChoice => {
                Question::multiple_choice(q.text, q.marks, q.options, q.correct_answer)
            }
            QuestionKind::TrueFalse => Question::true_false(q.text, q.marks, &q.correct_answer),
            QuestionKind::ShortAnswer => {
                Question::short_answer(q.text, q.marks, q.correct_answer, q.case_sensitive)
            }
        };
        // Bypass the gated add: invalid questions are kept so that the
        // authoring lint can point at them.
        quiz.push_question_unchecked(question);
    }

    Ok(quiz)
}

/// Recursively load all `.toml` quiz files from a directory.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<Quiz>> {
    let mut quizzes = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            quizzes.extend(load_quiz_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_quiz(&path) {
                Ok(quiz) => quizzes.push(quiz),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(quizzes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[quiz]
title = "General Knowledge"
description = "A quick check"
created_by = "Ms. Finch"
time_limit_minutes = 10
passing_percentage = 50

[[questions]]
kind = "multiple_choice"
text = "2+2=?"
marks = 1
options = ["3", "4", "5"]
correct_answer = "4"

[[questions]]
kind = "true_false"
text = "The sky is green."
correct_answer = "false"

[[questions]]
kind = "short_answer"
text = "Capital of France?"
marks = 2
correct_answer = "Paris"
"#;

    #[test]
    fn parse_valid_toml() {
        let quiz = parse_quiz_str(VALID_TOML, &PathBuf::from("quiz.toml")).unwrap();
        assert_eq!(quiz.title(), "General Knowledge");
        assert_eq!(quiz.created_by(), "Ms. Finch");
        assert_eq!(quiz.time_limit_minutes(), 10);
        assert_eq!(quiz.question_count(), 3);
        assert_eq!(quiz.total_marks(), 4);
        assert!(quiz.is_valid());

        // True/False answers normalize on construction.
        assert_eq!(quiz.question(1).unwrap().correct_answer(), "False");
    }

    #[test]
    fn parse_fills_defaults() {
        let toml = r#"
[quiz]
title = "Minimal"

[[questions]]
kind = "short_answer"
text = "Name a vowel"
correct_answer = "a"
"#;
        let quiz = parse_quiz_str(toml, &PathBuf::from("quiz.toml")).unwrap();
        assert_eq!(quiz.passing_percentage(), 50);
        assert_eq!(quiz.time_limit_minutes(), 0);
        assert_eq!(quiz.question(0).unwrap().marks(), 1);
    }

    #[test]
    fn parse_keeps_invalid_questions_for_linting() {
        let toml = r#"
[quiz]
title = "Broken"

[[questions]]
kind = "multiple_choice"
text = "Pick one"
options = ["only"]
correct_answer = "only"
"#;
        let quiz = parse_quiz_str(toml, &PathBuf::from("quiz.toml")).unwrap();
        assert_eq!(quiz.question_count(), 1);
        assert!(!quiz.is_valid());
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        let toml = r#"
[quiz]
title = "Bad"

[[questions]]
kind = "essay"
text = "Discuss."
correct_answer = "n/a"
"#;
        let err = parse_quiz_str(toml, &PathBuf::from("quiz.toml")).unwrap_err();
        assert!(err.to_string().contains("question 1"));
    }

    #[test]
    fn parse_rejects_out_of_range_percentage() {
        let toml = r#"
[quiz]
title = "Bad"
passing_percentage = 150
"#;
        assert!(parse_quiz_str(toml, &PathBuf::from("quiz.toml")).is_err());
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        assert!(parse_quiz_str(bad, &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn load_directory_skips_unparsable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("good.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("bad.toml"), "nope [").unwrap();

        let quizzes = load_quiz_directory(dir.path()).unwrap();
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].title(), "General Knowledge");
    }
}
