//! Question variants and the per-question grading rules.
//!
//! A [`Question`] is a closed tagged-variant type: the set of question kinds
//! is fixed and every operation matches exhaustively over the tag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One quiz question together with its grading rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    /// A question with a fixed set of options, exactly one of which is correct.
    MultipleChoice {
        /// The question text shown to the student.
        text: String,
        /// Marks awarded for a correct answer.
        #[serde(default = "default_marks")]
        marks: u32,
        /// The options offered, in display order.
        options: Vec<String>,
        /// The correct option text.
        correct_answer: String,
    },
    /// A True/False question. The stored answer is always exactly
    /// `"True"` or `"False"`.
    TrueFalse {
        text: String,
        #[serde(default = "default_marks")]
        marks: u32,
        correct_answer: String,
    },
    /// A free-text question compared against a single expected answer.
    ShortAnswer {
        text: String,
        #[serde(default = "default_marks")]
        marks: u32,
        correct_answer: String,
        /// Whether the comparison is case-sensitive.
        #[serde(default)]
        case_sensitive: bool,
    },
}

fn default_marks() -> u32 {
    1
}

/// The kind tag of a [`Question`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::MultipleChoice => write!(f, "Multiple Choice"),
            QuestionKind::TrueFalse => write!(f, "True/False"),
            QuestionKind::ShortAnswer => write!(f, "Short Answer"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "multiple_choice" | "mc" | "choice" => Ok(QuestionKind::MultipleChoice),
            "true_false" | "true/false" | "tf" => Ok(QuestionKind::TrueFalse),
            "short_answer" | "sa" | "text" => Ok(QuestionKind::ShortAnswer),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// Normalize a raw answer to exactly `"True"` or `"False"`.
///
/// This is a total function: any string that is not a recognized spelling of
/// true becomes `"False"`. It is applied both at construction time and to
/// candidate answers during grading.
pub fn normalize_true_false(answer: &str) -> String {
    match answer.trim().to_lowercase().as_str() {
        "true" | "t" | "1" => "True".to_string(),
        _ => "False".to_string(),
    }
}

/// Case-insensitive string equality after trimming both sides.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

impl Question {
    /// Create a multiple-choice question. Marks of 0 are coerced to 1.
    pub fn multiple_choice(
        text: impl Into<String>,
        marks: u32,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Question::MultipleChoice {
            text: text.into(),
            marks: marks.max(1),
            options,
            correct_answer: correct_answer.into(),
        }
    }

    /// Create a True/False question. The correct answer is normalized to
    /// `"True"` or `"False"` on construction.
    pub fn true_false(text: impl Into<String>, marks: u32, correct_answer: &str) -> Self {
        Question::TrueFalse {
            text: text.into(),
            marks: marks.max(1),
            correct_answer: normalize_true_false(correct_answer),
        }
    }

    /// Create a short-answer question.
    pub fn short_answer(
        text: impl Into<String>,
        marks: u32,
        correct_answer: impl Into<String>,
        case_sensitive: bool,
    ) -> Self {
        Question::ShortAnswer {
            text: text.into(),
            marks: marks.max(1),
            correct_answer: correct_answer.into(),
            case_sensitive,
        }
    }

    /// The kind tag of this question.
    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            Question::TrueFalse { .. } => QuestionKind::TrueFalse,
            Question::ShortAnswer { .. } => QuestionKind::ShortAnswer,
        }
    }

    /// The question text.
    pub fn text(&self) -> &str {
        match self {
            Question::MultipleChoice { text, .. }
            | Question::TrueFalse { text, .. }
            | Question::ShortAnswer { text, .. } => text,
        }
    }

    pub fn set_text(&mut self, new_text: impl Into<String>) {
        match self {
            Question::MultipleChoice { text, .. }
            | Question::TrueFalse { text, .. }
            | Question::ShortAnswer { text, .. } => *text = new_text.into(),
        }
    }

    /// Marks awarded for a correct answer.
    pub fn marks(&self) -> u32 {
        match self {
            Question::MultipleChoice { marks, .. }
            | Question::TrueFalse { marks, .. }
            | Question::ShortAnswer { marks, .. } => *marks,
        }
    }

    /// Set the marks. A value of 0 is coerced to 1 rather than rejected.
    pub fn set_marks(&mut self, new_marks: u32) {
        let coerced = new_marks.max(1);
        match self {
            Question::MultipleChoice { marks, .. }
            | Question::TrueFalse { marks, .. }
            | Question::ShortAnswer { marks, .. } => *marks = coerced,
        }
    }

    /// The stored correct answer. For True/False this is always exactly
    /// `"True"` or `"False"`.
    pub fn correct_answer(&self) -> &str {
        match self {
            Question::MultipleChoice { correct_answer, .. }
            | Question::TrueFalse { correct_answer, .. }
            | Question::ShortAnswer { correct_answer, .. } => correct_answer,
        }
    }

    /// Set the correct answer. True/False questions normalize the value.
    pub fn set_correct_answer(&mut self, answer: impl Into<String>) {
        let answer = answer.into();
        match self {
            Question::TrueFalse { correct_answer, .. } => {
                *correct_answer = normalize_true_false(&answer);
            }
            Question::MultipleChoice { correct_answer, .. }
            | Question::ShortAnswer { correct_answer, .. } => *correct_answer = answer,
        }
    }

    /// The options offered to the student, in display order.
    ///
    /// True/False always offers `["True", "False"]`; short-answer questions
    /// have no predefined options.
    pub fn options(&self) -> Vec<String> {
        match self {
            Question::MultipleChoice { options, .. } => options.clone(),
            Question::TrueFalse { .. } => vec!["True".to_string(), "False".to_string()],
            Question::ShortAnswer { .. } => Vec::new(),
        }
    }

    /// Grade a candidate answer against this question.
    ///
    /// Multiple-choice compares only against the stored correct text, so a
    /// free-text candidate equal to the correct answer passes even if it was
    /// never offered as an option. True/False normalizes the candidate first,
    /// so an arbitrary string counts as `"False"`.
    pub fn check_answer(&self, candidate: &str) -> bool {
        match self {
            Question::MultipleChoice { correct_answer, .. } => {
                eq_ignore_case(candidate, correct_answer)
            }
            Question::TrueFalse { correct_answer, .. } => {
                normalize_true_false(candidate) == *correct_answer
            }
            Question::ShortAnswer {
                correct_answer,
                case_sensitive,
                ..
            } => {
                if *case_sensitive {
                    candidate.trim() == correct_answer.trim()
                } else {
                    eq_ignore_case(candidate, correct_answer)
                }
            }
        }
    }

    /// Whether this question is fully configured and gradeable.
    ///
    /// All kinds require non-empty text, positive marks, and a non-empty
    /// correct answer. Multiple-choice additionally requires at least two
    /// options, one of which matches the correct answer case-insensitively.
    pub fn is_valid(&self) -> bool {
        if self.text().trim().is_empty()
            || self.marks() == 0
            || self.correct_answer().trim().is_empty()
        {
            return false;
        }
        match self {
            Question::MultipleChoice {
                options,
                correct_answer,
                ..
            } => {
                options.len() >= 2
                    && options.iter().any(|o| eq_ignore_case(o, correct_answer))
            }
            Question::TrueFalse { correct_answer, .. } => {
                correct_answer == "True" || correct_answer == "False"
            }
            Question::ShortAnswer { .. } => true,
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (Marks: {})",
            self.kind(),
            self.text(),
            self.marks()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mc() -> Question {
        Question::multiple_choice(
            "2+2=?",
            1,
            vec!["3".into(), "4".into(), "5".into()],
            "4",
        )
    }

    #[test]
    fn kind_display_and_parse() {
        assert_eq!(QuestionKind::MultipleChoice.to_string(), "Multiple Choice");
        assert_eq!(QuestionKind::TrueFalse.to_string(), "True/False");
        assert_eq!(
            "multiple-choice".parse::<QuestionKind>().unwrap(),
            QuestionKind::MultipleChoice
        );
        assert_eq!(
            "True/False".parse::<QuestionKind>().unwrap(),
            QuestionKind::TrueFalse
        );
        assert_eq!("sa".parse::<QuestionKind>().unwrap(), QuestionKind::ShortAnswer);
        assert!("essay".parse::<QuestionKind>().is_err());
    }

    #[test]
    fn multiple_choice_grading_is_case_insensitive() {
        let q = Question::multiple_choice(
            "Capital of France?",
            2,
            vec!["Paris".into(), "Lyon".into()],
            "Paris",
        );
        assert!(q.check_answer("Paris"));
        assert!(q.check_answer("PARIS"));
        assert!(q.check_answer("  paris  "));
        assert!(!q.check_answer("Lyon"));
        assert!(!q.check_answer(""));
    }

    #[test]
    fn multiple_choice_accepts_correct_text_outside_options() {
        // Grading depends only on the stored answer text, not on membership
        // in the current option list.
        let mut q = mc();
        if let Question::MultipleChoice { options, .. } = &mut q {
            options.retain(|o| o != "4");
        }
        assert!(q.check_answer("4"));
    }

    #[test]
    fn true_false_normalizes_on_construction() {
        for spelling in ["true", "True", "T", "1"] {
            let q = Question::true_false("Water is wet.", 1, spelling);
            assert_eq!(q.correct_answer(), "True", "spelling {spelling:?}");
            assert!(!q.check_answer("false"));
        }
        let q = Question::true_false("Water is dry.", 1, "no");
        assert_eq!(q.correct_answer(), "False");
    }

    #[test]
    fn true_false_grades_arbitrary_strings_as_false() {
        let q = Question::true_false("The sky is green.", 1, "false");
        // Anything unrecognized normalizes to "False" and therefore matches.
        assert!(q.check_answer("banana"));
        assert!(q.check_answer("false"));
        assert!(!q.check_answer("true"));
    }

    #[test]
    fn short_answer_case_modes() {
        let relaxed = Question::short_answer("Capital of France?", 1, "Paris", false);
        assert!(relaxed.check_answer("paris"));
        assert!(relaxed.check_answer(" PARIS "));

        let strict = Question::short_answer("Capital of France?", 1, "Paris", true);
        assert!(strict.check_answer("Paris"));
        assert!(strict.check_answer("  Paris "));
        assert!(!strict.check_answer("paris"));
    }

    #[test]
    fn marks_are_coerced_to_at_least_one() {
        let mut q = Question::short_answer("Q?", 0, "a", false);
        assert_eq!(q.marks(), 1);
        q.set_marks(0);
        assert_eq!(q.marks(), 1);
        q.set_marks(5);
        assert_eq!(q.marks(), 5);
    }

    #[test]
    fn validity_rules() {
        assert!(mc().is_valid());

        let no_text = Question::short_answer("   ", 1, "a", false);
        assert!(!no_text.is_valid());

        let empty_answer = Question::short_answer("Q?", 1, "", false);
        assert!(!empty_answer.is_valid());

        let one_option = Question::multiple_choice("Q?", 1, vec!["4".into()], "4");
        assert!(!one_option.is_valid());

        let answer_not_offered =
            Question::multiple_choice("Q?", 1, vec!["3".into(), "5".into()], "4");
        assert!(!answer_not_offered.is_valid());

        // Case-insensitive membership is enough.
        let mixed_case =
            Question::multiple_choice("Q?", 1, vec!["paris".into(), "Lyon".into()], "Paris");
        assert!(mixed_case.is_valid());
    }

    #[test]
    fn options_per_kind() {
        assert_eq!(mc().options(), vec!["3", "4", "5"]);
        let tf = Question::true_false("Q?", 1, "true");
        assert_eq!(tf.options(), vec!["True", "False"]);
        let sa = Question::short_answer("Q?", 1, "a", false);
        assert!(sa.options().is_empty());
    }

    #[test]
    fn question_serde_roundtrip() {
        let q = mc();
        let json = serde_json::to_string(&q).unwrap();
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back.text(), "2+2=?");
        assert_eq!(back.kind(), QuestionKind::MultipleChoice);
        assert!(back.check_answer("4"));
    }
}
