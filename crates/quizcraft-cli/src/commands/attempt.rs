//! The `quizcraft attempt` command — interactive quiz taking.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{ensure, Result};
use quizcraft_core::{AttemptResult, Question, Quiz};
use quizcraft_store::QuizStore;

pub fn execute(
    data_dir: &Path,
    name: &str,
    student: &str,
    student_id: &str,
    detailed: bool,
) -> Result<()> {
    ensure!(!student.trim().is_empty(), "student name cannot be empty");

    let store = QuizStore::open(data_dir)?;
    let quiz = store.load_quiz(name)?;
    ensure!(
        quiz.is_valid(),
        "quiz '{}' has invalid questions: {}",
        quiz.title(),
        quiz.validation_errors().join("; ")
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = run_attempt(
        &quiz,
        student,
        student_id,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )?;

    let filename = store.save_result(&result)?;

    println!();
    if detailed {
        print!("{}", quizcraft_report::format_detailed_result(&result));
    } else {
        print!("{}", quizcraft_report::format_result(&result));
    }
    println!("\nSaved result as {filename}");

    Ok(())
}

/// Walks the student through every question, then grades the attempt.
///
/// Reading stops early when input ends or the quiz time limit runs out;
/// questions not reached stay unanswered and count as incorrect.
fn run_attempt<R: BufRead, W: Write>(
    quiz: &Quiz,
    student: &str,
    student_id: &str,
    input: &mut R,
    out: &mut W,
) -> Result<AttemptResult> {
    let mut result = AttemptResult::new(quiz, student.trim(), student_id.trim());
    let deadline = (quiz.has_time_limit())
        .then(|| Instant::now() + Duration::from_secs(u64::from(quiz.time_limit_minutes()) * 60));
    let started = Instant::now();

    writeln!(out, "Quiz: {} ({} marks)", quiz.title(), quiz.total_marks())?;
    if quiz.has_time_limit() {
        writeln!(out, "Time limit: {} minutes", quiz.time_limit_minutes())?;
    }

    let total = quiz.question_count();
    for (index, question) in quiz.questions().iter().enumerate() {
        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                writeln!(out, "\nTime's up! Submitting your answers.")?;
                break;
            }
        }

        writeln!(out, "\nQuestion {} of {total}", index + 1)?;
        write!(out, "{}", quizcraft_report::format_question(question))?;

        match prompt_answer(question, input, out)? {
            Prompted::Answer(answer) => result.record_answer(index, answer),
            Prompted::Skip => writeln!(out, "Skipped.")?,
            Prompted::EndOfInput => break,
        }
    }

    result.set_time_taken_secs(started.elapsed().as_secs() as u32);
    result.calculate_result(quiz.passing_percentage());
    Ok(result)
}

enum Prompted {
    Answer(String),
    Skip,
    EndOfInput,
}

/// Prompts until a usable answer arrives. Empty lines and unrecognised
/// inputs reprompt; "skip" leaves the question unanswered.
fn prompt_answer<R: BufRead, W: Write>(
    question: &Question,
    input: &mut R,
    out: &mut W,
) -> io::Result<Prompted> {
    loop {
        write!(out, "Your answer (or 'skip'): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Prompted::EndOfInput);
        }
        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }
        if entry.eq_ignore_ascii_case("skip") {
            return Ok(Prompted::Skip);
        }

        match question {
            Question::MultipleChoice { options, .. } => {
                // Accept an option letter (A, b, ...), a 1-based number,
                // or the option text itself. Anything not naming an option
                // is taken as a free-text answer.
                if entry.len() == 1 {
                    let c = entry.chars().next().unwrap_or_default();
                    if c.is_ascii_alphabetic() {
                        let index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
                        if let Some(option) = options.get(index) {
                            return Ok(Prompted::Answer(option.clone()));
                        }
                    }
                }
                if let Ok(number) = entry.parse::<usize>() {
                    if let Some(option) = number.checked_sub(1).and_then(|i| options.get(i)) {
                        return Ok(Prompted::Answer(option.clone()));
                    }
                }
                return Ok(Prompted::Answer(entry.to_string()));
            }
            Question::TrueFalse { .. } => match entry.to_lowercase().as_str() {
                "true" | "t" | "1" | "a" => return Ok(Prompted::Answer("True".to_string())),
                "false" | "f" | "0" | "b" => return Ok(Prompted::Answer("False".to_string())),
                _ => {
                    writeln!(out, "Please answer true or false.")?;
                    continue;
                }
            },
            Question::ShortAnswer { .. } => return Ok(Prompted::Answer(entry.to_string())),
        }
    }
}
