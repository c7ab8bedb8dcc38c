//! Attempt results and the grading engine.
//!
//! An [`AttemptResult`] snapshots a quiz at attempt start, records raw
//! answers by question index, and derives the final score with
//! [`AttemptResult::calculate_result`]. Grading is a pure re-derivation from
//! the recorded answers and the snapshot, so it can be repeated safely.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::question::Question;
use crate::quiz::Quiz;

/// The outcome of one student's pass through a quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptResult {
    id: Uuid,
    quiz_id: Uuid,
    quiz_title: String,
    student_name: String,
    #[serde(default)]
    student_id: String,
    attempt_date: DateTime<Utc>,
    /// Total marks of the quiz, copied at attempt start.
    total_marks: u32,
    #[serde(default)]
    marks_obtained: u32,
    #[serde(default)]
    percentage: f64,
    #[serde(default)]
    passed: bool,
    /// Wall-clock time spent on the attempt, in seconds.
    #[serde(default)]
    time_taken_secs: u32,
    /// Raw answers by question index; only answered questions are present.
    #[serde(default)]
    student_answers: BTreeMap<usize, String>,
    /// Per-question verdicts, populated by grading.
    #[serde(default)]
    answer_correctness: BTreeMap<usize, bool>,
    /// Snapshot of the quiz's questions at attempt start. Later quiz edits
    /// cannot affect this result.
    questions: Vec<Question>,
}

impl AttemptResult {
    /// Start an attempt against `quiz`, snapshotting its questions.
    pub fn new(quiz: &Quiz, student_name: impl Into<String>, student_id: impl Into<String>) -> Self {
        AttemptResult {
            id: Uuid::new_v4(),
            quiz_id: quiz.id(),
            quiz_title: quiz.title().to_string(),
            student_name: student_name.into(),
            student_id: student_id.into(),
            attempt_date: Utc::now(),
            total_marks: quiz.total_marks(),
            marks_obtained: 0,
            percentage: 0.0,
            passed: false,
            time_taken_secs: 0,
            student_answers: BTreeMap::new(),
            answer_correctness: BTreeMap::new(),
            questions: quiz.questions().to_vec(),
        }
    }

    // --- Accessors ---

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn quiz_id(&self) -> Uuid {
        self.quiz_id
    }

    pub fn quiz_title(&self) -> &str {
        &self.quiz_title
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn attempt_date(&self) -> DateTime<Utc> {
        self.attempt_date
    }

    pub fn total_marks(&self) -> u32 {
        self.total_marks
    }

    pub fn marks_obtained(&self) -> u32 {
        self.marks_obtained
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn time_taken_secs(&self) -> u32 {
        self.time_taken_secs
    }

    pub fn set_time_taken_secs(&mut self, secs: u32) {
        self.time_taken_secs = secs;
    }

    /// The question snapshot taken at attempt start.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn student_answers(&self) -> &BTreeMap<usize, String> {
        &self.student_answers
    }

    pub fn answer_correctness(&self) -> &BTreeMap<usize, bool> {
        &self.answer_correctness
    }

    // --- Answer recording ---

    /// Record the raw answer for a question index. Recording again replaces
    /// the previous answer.
    pub fn record_answer(&mut self, question_index: usize, answer: impl Into<String>) {
        self.student_answers.insert(question_index, answer.into());
    }

    /// The recorded answer for a question, if any.
    pub fn answer(&self, question_index: usize) -> Option<&str> {
        self.student_answers.get(&question_index).map(String::as_str)
    }

    pub fn is_question_answered(&self, question_index: usize) -> bool {
        self.student_answers.contains_key(&question_index)
    }

    pub fn answered_count(&self) -> usize {
        self.student_answers.len()
    }

    pub fn unanswered_count(&self) -> usize {
        self.questions.len().saturating_sub(self.student_answers.len())
    }

    // --- Grading ---

    /// Grade every question and finalize the aggregate score.
    ///
    /// Unanswered questions are recorded as incorrect. The pass boundary is
    /// inclusive: a percentage exactly equal to `passing_percentage` passes.
    /// Idempotent: re-running with unchanged answers yields the same output.
    pub fn calculate_result(&mut self, passing_percentage: u32) {
        self.marks_obtained = 0;
        self.answer_correctness.clear();

        for (i, question) in self.questions.iter().enumerate() {
            let correct = match self.student_answers.get(&i) {
                Some(answer) => question.check_answer(answer),
                None => false,
            };
            self.answer_correctness.insert(i, correct);
            if correct {
                self.marks_obtained += question.marks();
            }
        }

        self.percentage = if self.total_marks > 0 {
            f64::from(self.marks_obtained) / f64::from(self.total_marks) * 100.0
        } else {
            0.0
        };
        self.passed = self.percentage >= f64::from(passing_percentage);
    }

    /// Number of questions graded correct.
    pub fn correct_answers_count(&self) -> usize {
        self.answer_correctness.values().filter(|&&c| c).count()
    }

    /// Number of answered questions graded incorrect.
    pub fn incorrect_answers_count(&self) -> usize {
        self.answered_count().saturating_sub(self.correct_answers_count())
    }

    /// Whether the answer at `question_index` was graded correct.
    /// Ungraded or unanswered indices are false.
    pub fn is_answer_correct(&self, question_index: usize) -> bool {
        self.answer_correctness
            .get(&question_index)
            .copied()
            .unwrap_or(false)
    }

    /// Letter grade for the final percentage.
    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage)
    }

    /// One-line summary of the outcome.
    pub fn summary(&self) -> String {
        format!(
            "{} - {}: {:.2}% ({}/{}) - {}",
            self.quiz_title,
            self.student_name,
            self.percentage,
            self.marks_obtained,
            self.total_marks,
            if self.passed { "PASSED" } else { "FAILED" }
        )
    }

    /// Whether this result is complete enough to persist: non-empty student
    /// name and a quiz snapshot with positive total marks.
    pub fn is_valid(&self) -> bool {
        !self.student_name.trim().is_empty() && !self.quiz_id.is_nil() && self.total_marks > 0
    }
}

/// Letter grade bands, checked in descending order with strict lower bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Band a percentage: >=90 A, >=80 B, >=70 C, >=60 D, else F.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Grade::A
        } else if percentage >= 80.0 {
            Grade::B
        } else if percentage >= 70.0 {
            Grade::C
        } else if percentage >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{letter}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::Question;

    fn arithmetic_quiz() -> Quiz {
        let mut quiz = Quiz::new("Arithmetic", "");
        quiz.set_passing_percentage(50);
        quiz.add_question(Question::multiple_choice(
            "2+2=?",
            1,
            vec!["3".into(), "4".into(), "5".into()],
            "4",
        ));
        quiz
    }

    #[test]
    fn correct_answer_scores_full_marks() {
        let quiz = arithmetic_quiz();
        let mut result = AttemptResult::new(&quiz, "Ada", "S1");
        result.record_answer(0, "4");
        result.calculate_result(50);

        assert_eq!(result.marks_obtained(), 1);
        assert!((result.percentage() - 100.0).abs() < f64::EPSILON);
        assert!(result.passed());
        assert_eq!(result.answer_correctness().get(&0), Some(&true));
        assert_eq!(result.correct_answers_count(), 1);
        assert_eq!(result.incorrect_answers_count(), 0);
    }

    #[test]
    fn wrong_answer_scores_zero() {
        let quiz = arithmetic_quiz();
        let mut result = AttemptResult::new(&quiz, "Ada", "");
        result.record_answer(0, "3");
        result.calculate_result(50);

        assert_eq!(result.marks_obtained(), 0);
        assert!((result.percentage() - 0.0).abs() < f64::EPSILON);
        assert!(!result.passed());
        assert_eq!(result.incorrect_answers_count(), 1);
    }

    #[test]
    fn unanswered_counts_as_incorrect() {
        let quiz = arithmetic_quiz();
        let mut result = AttemptResult::new(&quiz, "Ada", "");
        result.calculate_result(50);

        assert_eq!(result.unanswered_count(), 1);
        assert_eq!(result.answer_correctness().get(&0), Some(&false));
        assert!(!result.passed());
        assert!(!result.is_answer_correct(0));
    }

    #[test]
    fn calculate_result_is_idempotent() {
        let mut quiz = arithmetic_quiz();
        quiz.add_question(Question::true_false("1 < 2", 2, "true"));

        let mut result = AttemptResult::new(&quiz, "Ada", "");
        result.record_answer(0, "4");
        result.record_answer(1, "false");
        result.calculate_result(60);

        let first = (
            result.marks_obtained(),
            result.percentage(),
            result.passed(),
            result.answer_correctness().clone(),
        );
        result.calculate_result(60);
        assert_eq!(result.marks_obtained(), first.0);
        assert!((result.percentage() - first.1).abs() < f64::EPSILON);
        assert_eq!(result.passed(), first.2);
        assert_eq!(result.answer_correctness(), &first.3);
    }

    #[test]
    fn pass_boundary_is_inclusive() {
        let mut quiz = Quiz::new("Halves", "");
        quiz.add_question(Question::short_answer("A?", 7, "a", false));
        quiz.add_question(Question::short_answer("B?", 3, "b", false));

        let mut result = AttemptResult::new(&quiz, "Ada", "");
        result.record_answer(0, "a");
        result.calculate_result(70);

        assert!((result.percentage() - 70.0).abs() < f64::EPSILON);
        assert!(result.passed());
    }

    #[test]
    fn zero_total_marks_yields_zero_percentage() {
        let quiz = Quiz::new("Empty", "");
        let mut result = AttemptResult::new(&quiz, "Ada", "");
        result.calculate_result(50);

        assert!((result.percentage() - 0.0).abs() < f64::EPSILON);
        assert!(!result.passed());
        assert!(!result.is_valid());
    }

    #[test]
    fn snapshot_is_immune_to_later_quiz_edits() {
        let mut quiz = arithmetic_quiz();
        let mut result = AttemptResult::new(&quiz, "Ada", "");
        result.record_answer(0, "4");

        // The correct answer changes on the live quiz after the attempt began.
        let swapped = Question::multiple_choice(
            "2+2=?",
            1,
            vec!["3".into(), "4".into(), "5".into()],
            "5",
        );
        assert!(quiz.update_question(0, swapped));

        result.calculate_result(50);
        assert!(result.passed());
    }

    #[test]
    fn recording_again_replaces_the_answer() {
        let quiz = arithmetic_quiz();
        let mut result = AttemptResult::new(&quiz, "Ada", "");
        result.record_answer(0, "3");
        result.record_answer(0, "4");
        assert_eq!(result.answered_count(), 1);
        result.calculate_result(50);
        assert!(result.passed());
    }

    #[test]
    fn grade_bands() {
        assert_eq!(Grade::from_percentage(95.0), Grade::A);
        assert_eq!(Grade::from_percentage(90.0), Grade::A);
        assert_eq!(Grade::from_percentage(89.9), Grade::B);
        assert_eq!(Grade::from_percentage(80.0), Grade::B);
        assert_eq!(Grade::from_percentage(70.0), Grade::C);
        assert_eq!(Grade::from_percentage(60.0), Grade::D);
        assert_eq!(Grade::from_percentage(59.9), Grade::F);
        assert_eq!(Grade::from_percentage(0.0), Grade::F);
        assert_eq!(Grade::A.to_string(), "A");
    }

    #[test]
    fn result_serde_roundtrip() {
        let quiz = arithmetic_quiz();
        let mut result = AttemptResult::new(&quiz, "Ada", "S1");
        result.record_answer(0, "4");
        result.calculate_result(50);

        let json = serde_json::to_string(&result).unwrap();
        let back: AttemptResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id(), result.id());
        assert_eq!(back.marks_obtained(), 1);
        assert_eq!(back.student_answers().get(&0).map(String::as_str), Some("4"));
        assert!(back.passed());
    }
}
