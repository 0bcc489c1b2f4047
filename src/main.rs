mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the courses from instead of the bundled content
    #[arg(short, long, env = "QUIZ_CONTENT", global = true)]
    content: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all courses with their question counts
    List,
    /// Print every question of a course, marking the correct options
    Show { course: u32 },
    /// Print a single question
    Question { course: u32, question: u32 },
    /// Check the content and report what was loaded
    Validate,
    /// Write the content (or one course) as JSON
    Export { course: Option<u32> },
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = interview_quiz::logging::init(args.verbose) {
        eprintln!("Failed to set up logging: {}", e);
    }

    match cli::run(args.content.as_deref(), &args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
