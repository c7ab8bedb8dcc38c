//! quizcraft CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizcraft", version, about = "Quiz authoring and grading toolkit")]
struct Cli {
    /// Directory where quizzes and results are stored
    #[arg(long, global = true, default_value = "./quizcraft-data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and a starter quiz file
    Init,

    /// Check quiz TOML files for problems without importing them
    Validate {
        /// Path to a .toml quiz file or directory
        #[arg(long)]
        quiz: PathBuf,
    },

    /// Import quiz TOML files into the store
    Import {
        /// Path to a .toml quiz file or directory
        #[arg(long)]
        quiz: PathBuf,
    },

    /// List stored quizzes
    List,

    /// Show a stored quiz
    Show {
        /// Quiz title or slug
        name: String,

        /// Include correct answers
        #[arg(long)]
        answers: bool,
    },

    /// Take a quiz interactively
    Attempt {
        /// Quiz title or slug
        name: String,

        /// Student name
        #[arg(long)]
        student: String,

        /// Optional student identifier
        #[arg(long, default_value = "")]
        student_id: String,

        /// Print a question-by-question breakdown
        #[arg(long)]
        detailed: bool,
    },

    /// List stored attempt results
    Results {
        /// Only results for this quiz title or slug
        #[arg(long)]
        quiz: Option<String>,

        /// Only results for this student (case-insensitive)
        #[arg(long)]
        student: Option<String>,

        /// Show a question-by-question breakdown for one result file
        #[arg(long)]
        detailed: Option<String>,
    },

    /// Delete a stored quiz
    Delete {
        /// Quiz title or slug
        name: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizcraft=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => commands::init::execute(&cli.data_dir),
        Commands::Validate { quiz } => commands::validate::execute(quiz),
        Commands::Import { quiz } => commands::import::execute(&cli.data_dir, quiz),
        Commands::List => commands::list::execute(&cli.data_dir),
        Commands::Show { name, answers } => commands::show::execute(&cli.data_dir, &name, answers),
        Commands::Attempt {
            name,
            student,
            student_id,
            detailed,
        } => commands::attempt::execute(&cli.data_dir, &name, &student, &student_id, detailed),
        Commands::Results {
            quiz,
            student,
            detailed,
        } => commands::results::execute(&cli.data_dir, quiz, student, detailed),
        Commands::Delete { name } => commands::delete::execute(&cli.data_dir, &name),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
