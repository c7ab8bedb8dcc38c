//! quizcraft-store — File-backed persistence for quizzes and results.
//!
//! Quizzes are stored as pretty-printed JSON under `<root>/quizzes/`, keyed
//! by a filesystem-safe slug of the title (a save under a colliding title
//! overwrites silently). Results live under `<root>/results/`, one file per
//! attempt. Directory scans skip unreadable files with a warning rather than
//! aborting.

mod error;

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use quizcraft_core::{AttemptResult, Quiz};

pub use error::StoreError;

const QUIZ_EXTENSION: &str = ".quiz.json";
const RESULT_EXTENSION: &str = ".result.json";

/// A file-backed store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct QuizStore {
    quiz_dir: PathBuf,
    result_dir: PathBuf,
}

impl QuizStore {
    /// Open a store under `root`, creating the directory layout if needed.
    pub fn open(root: &Path) -> Result<Self, StoreError> {
        let quiz_dir = root.join("quizzes");
        let result_dir = root.join("results");
        for dir in [&quiz_dir, &result_dir] {
            fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(QuizStore {
            quiz_dir,
            result_dir,
        })
    }

    // --- Quiz operations ---

    /// Save a quiz under the slug of its title. Refuses an invalid quiz.
    /// Returns the path written.
    pub fn save_quiz(&self, quiz: &Quiz) -> Result<PathBuf, StoreError> {
        if !quiz.is_valid() {
            return Err(StoreError::InvalidQuiz(quiz.validation_errors()));
        }
        let path = self.quiz_path(quiz.title());
        write_json(&path, quiz)?;
        tracing::debug!(path = %path.display(), "quiz saved");
        Ok(path)
    }

    /// Load a quiz by title (or slug).
    pub fn load_quiz(&self, name: &str) -> Result<Quiz, StoreError> {
        let path = self.quiz_path(name);
        if !path.exists() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        read_json(&path)
    }

    /// Whether a quiz file exists for the given title (or slug).
    pub fn quiz_exists(&self, name: &str) -> bool {
        self.quiz_path(name).exists()
    }

    /// Delete a stored quiz by title (or slug).
    pub fn delete_quiz(&self, name: &str) -> Result<(), StoreError> {
        let path = self.quiz_path(name);
        if !path.exists() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        fs::remove_file(&path).map_err(|source| StoreError::Io { path, source })
    }

    /// Slugs of all stored quizzes, sorted.
    pub fn list_quizzes(&self) -> Result<Vec<String>, StoreError> {
        list_stems(&self.quiz_dir, QUIZ_EXTENSION)
    }

    /// All stored quizzes. Unreadable files are skipped with a warning.
    pub fn load_all_quizzes(&self) -> Result<Vec<Quiz>, StoreError> {
        let mut quizzes = Vec::new();
        for slug in self.list_quizzes()? {
            match self.load_quiz(&slug) {
                Ok(quiz) => quizzes.push(quiz),
                Err(e) => tracing::warn!("skipping quiz {slug}: {e}"),
            }
        }
        Ok(quizzes)
    }

    /// Write a quiz to an arbitrary path, outside the store layout.
    pub fn export_quiz(&self, quiz: &Quiz, path: &Path) -> Result<(), StoreError> {
        if !quiz.is_valid() {
            return Err(StoreError::InvalidQuiz(quiz.validation_errors()));
        }
        write_json(path, quiz)
    }

    /// Read a quiz from an arbitrary path.
    pub fn import_quiz(&self, path: &Path) -> Result<Quiz, StoreError> {
        if !path.exists() {
            return Err(StoreError::NotFound(path.display().to_string()));
        }
        read_json(path)
    }

    // --- Result operations ---

    /// Save a result, keyed by student slug and result id.
    /// Returns the filename written (relative to the results directory).
    pub fn save_result(&self, result: &AttemptResult) -> Result<String, StoreError> {
        let filename = format!(
            "{}_{}{}",
            slugify(result.student_name()),
            result.id(),
            RESULT_EXTENSION
        );
        let path = self.result_dir.join(&filename);
        write_json(&path, result)?;
        tracing::debug!(path = %path.display(), "result saved");
        Ok(filename)
    }

    /// Load a result by its filename.
    pub fn load_result(&self, filename: &str) -> Result<AttemptResult, StoreError> {
        let path = self.result_dir.join(filename);
        if !path.exists() {
            return Err(StoreError::NotFound(filename.to_string()));
        }
        read_json(&path)
    }

    /// Filenames of all stored results, sorted.
    pub fn list_results(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for entry in read_dir(&self.result_dir)? {
            if let Some(name) = entry.file_name().to_str() {
                if name.ends_with(RESULT_EXTENSION) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// All stored results. Unreadable files are skipped with a warning.
    pub fn load_all_results(&self) -> Result<Vec<AttemptResult>, StoreError> {
        let mut results = Vec::new();
        for filename in self.list_results()? {
            match self.load_result(&filename) {
                Ok(result) => results.push(result),
                Err(e) => tracing::warn!("skipping result {filename}: {e}"),
            }
        }
        Ok(results)
    }

    /// All results recorded against the given quiz id.
    pub fn results_for_quiz(&self, quiz_id: Uuid) -> Result<Vec<AttemptResult>, StoreError> {
        let mut results = self.load_all_results()?;
        results.retain(|r| r.quiz_id() == quiz_id);
        Ok(results)
    }

    /// All results for the given student, matched case-insensitively.
    pub fn results_for_student(&self, student_name: &str) -> Result<Vec<AttemptResult>, StoreError> {
        let wanted = student_name.trim().to_lowercase();
        let mut results = self.load_all_results()?;
        results.retain(|r| r.student_name().trim().to_lowercase() == wanted);
        Ok(results)
    }

    /// Delete a stored result by its filename.
    pub fn delete_result(&self, filename: &str) -> Result<(), StoreError> {
        let path = self.result_dir.join(filename);
        if !path.exists() {
            return Err(StoreError::NotFound(filename.to_string()));
        }
        fs::remove_file(&path).map_err(|source| StoreError::Io { path, source })
    }

    fn quiz_path(&self, name: &str) -> PathBuf {
        self.quiz_dir.join(format!("{}{}", slugify(name), QUIZ_EXTENSION))
    }
}

/// Reduce a title or student name to a filesystem-safe slug: everything
/// outside `[A-Za-z0-9.-]` becomes `_`.
pub fn slugify(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return "unnamed".to_string();
    }
    trimmed
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Serde {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| StoreError::Serde {
        path: path.to_path_buf(),
        source,
    })
}

fn list_stems(dir: &Path, extension: &str) -> Result<Vec<String>, StoreError> {
    let mut stems = Vec::new();
    for entry in read_dir(dir)? {
        if let Some(name) = entry.file_name().to_str() {
            if let Some(stem) = name.strip_suffix(extension) {
                stems.push(stem.to_string());
            }
        }
    }
    stems.sort();
    Ok(stems)
}

fn read_dir(dir: &Path) -> Result<Vec<fs::DirEntry>, StoreError> {
    fs::read_dir(dir)
        .map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })
}
