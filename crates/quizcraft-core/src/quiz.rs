//! The [`Quiz`] type: an ordered, exclusively-owned collection of questions
//! plus authoring metadata and derived statistics.
//!
//! Every mutation is gated on validity and bumps the last-modified timestamp.
//! Derived values (total marks, passing marks, per-kind counts) are always
//! recomputed from the live question list, never cached.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::question::{Question, QuestionKind};

/// A complete quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    id: Uuid,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    created_by: String,
    created_at: DateTime<Utc>,
    last_modified: DateTime<Utc>,
    /// Time limit in minutes; 0 means unlimited.
    #[serde(default)]
    time_limit_minutes: u32,
    /// Minimum percentage score required to pass, 0-100.
    #[serde(default = "default_passing_percentage")]
    passing_percentage: u32,
    #[serde(default = "default_active")]
    active: bool,
    #[serde(default)]
    questions: Vec<Question>,
}

fn default_passing_percentage() -> u32 {
    50
}

fn default_active() -> bool {
    true
}

impl Quiz {
    /// Create an empty quiz with a fresh id.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Quiz {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            created_by: String::new(),
            created_at: now,
            last_modified: now,
            time_limit_minutes: 0,
            passing_percentage: default_passing_percentage(),
            active: true,
            questions: Vec::new(),
        }
    }

    // --- Metadata accessors ---

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the title. An empty or whitespace-only title is rejected.
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        let title = title.into();
        if title.trim().is_empty() {
            return false;
        }
        self.title = title;
        self.touch();
        true
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.touch();
    }

    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    pub fn set_created_by(&mut self, created_by: impl Into<String>) {
        self.created_by = created_by.into();
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    pub fn time_limit_minutes(&self) -> u32 {
        self.time_limit_minutes
    }

    pub fn set_time_limit_minutes(&mut self, minutes: u32) {
        self.time_limit_minutes = minutes;
        self.touch();
    }

    pub fn has_time_limit(&self) -> bool {
        self.time_limit_minutes > 0
    }

    pub fn passing_percentage(&self) -> u32 {
        self.passing_percentage
    }

    /// Set the passing threshold. Values above 100 are rejected.
    pub fn set_passing_percentage(&mut self, percentage: u32) -> bool {
        if percentage > 100 {
            return false;
        }
        self.passing_percentage = percentage;
        self.touch();
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.touch();
    }

    fn touch(&mut self) {
        self.last_modified = Utc::now();
    }

    // --- Question management ---

    /// The questions in display order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The question at `index`, if in range.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }

    /// Append a question. Returns false (and leaves the quiz unchanged) if
    /// the question is invalid.
    pub fn add_question(&mut self, question: Question) -> bool {
        if !question.is_valid() {
            return false;
        }
        self.questions.push(question);
        self.touch();
        true
    }

    /// Insert a question at `index` (insertion at the end is allowed).
    /// Returns false on an out-of-range index or an invalid question.
    pub fn add_question_at(&mut self, index: usize, question: Question) -> bool {
        if !question.is_valid() || index > self.questions.len() {
            return false;
        }
        self.questions.insert(index, question);
        self.touch();
        true
    }

    /// Remove and return the question at `index`, or `None` if out of range.
    pub fn remove_question_at(&mut self, index: usize) -> Option<Question> {
        if index >= self.questions.len() {
            return None;
        }
        let removed = self.questions.remove(index);
        self.touch();
        Some(removed)
    }

    /// Replace the question at `index`. Returns false on an out-of-range
    /// index or an invalid replacement.
    pub fn update_question(&mut self, index: usize, question: Question) -> bool {
        if index >= self.questions.len() || !question.is_valid() {
            return false;
        }
        self.questions[index] = question;
        self.touch();
        true
    }

    /// Append a question without the validity gate. Used by the authoring
    /// parser so that the lint can report on invalid questions.
    pub(crate) fn push_question_unchecked(&mut self, question: Question) {
        self.questions.push(question);
        self.touch();
    }

    /// Remove every question.
    pub fn clear_questions(&mut self) {
        self.questions.clear();
        self.touch();
    }

    /// Reorder the questions with a uniformly-random permutation.
    /// For use during editing only, never mid-attempt.
    pub fn shuffle_questions(&mut self) {
        self.questions.shuffle(&mut rand::thread_rng());
        self.touch();
    }

    // --- Derived statistics ---

    /// Sum of the marks over all questions.
    pub fn total_marks(&self) -> u32 {
        self.questions.iter().map(Question::marks).sum()
    }

    /// Minimum marks required to pass: `ceil(total * percentage / 100)`.
    pub fn passing_marks(&self) -> u32 {
        (self.total_marks() * self.passing_percentage).div_ceil(100)
    }

    /// Average marks per question, or 0 for an empty quiz.
    pub fn average_marks_per_question(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        f64::from(self.total_marks()) / self.questions.len() as f64
    }

    /// Number of questions of the given kind.
    pub fn count_questions_by_kind(&self, kind: QuestionKind) -> usize {
        self.questions.iter().filter(|q| q.kind() == kind).count()
    }

    /// All questions of the given kind, in display order.
    pub fn questions_by_kind(&self, kind: QuestionKind) -> Vec<&Question> {
        self.questions.iter().filter(|q| q.kind() == kind).collect()
    }

    /// Estimated completion time in minutes given an average pace.
    pub fn estimated_time_minutes(&self, seconds_per_question: u32) -> u32 {
        (self.questions.len() as u32 * seconds_per_question) / 60
    }

    // --- Validation ---

    /// Whether the quiz is ready to be attempted: non-empty title, at least
    /// one question, and every question valid.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.questions.is_empty()
            && self.questions.iter().all(Question::is_valid)
    }

    /// Human-readable validation errors; empty when the quiz is valid.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push("Quiz title is required".to_string());
        }
        if self.questions.is_empty() {
            errors.push("Quiz must have at least one question".to_string());
        } else {
            for (i, q) in self.questions.iter().enumerate() {
                if !q.is_valid() {
                    errors.push(format!("Question {} is invalid", i + 1));
                }
            }
        }
        errors
    }

    /// Copy this quiz under a fresh id with fresh timestamps.
    ///
    /// Questions are deep-copied; invalid questions (if any) are dropped by
    /// the gated add, matching construction through the normal authoring
    /// path. Use `clone()` for an identity-preserving value copy.
    pub fn duplicate(&self) -> Quiz {
        let mut copy = Quiz::new(self.title.clone(), self.description.clone());
        copy.created_by = self.created_by.clone();
        copy.time_limit_minutes = self.time_limit_minutes;
        copy.passing_percentage = self.passing_percentage;
        copy.active = self.active;
        for question in &self.questions {
            copy.add_question(question.clone());
        }
        copy
    }
}
