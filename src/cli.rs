//! Command implementations for the `interview-quiz` binary.
//!
//! Output goes to any `Write` so the rendering can be checked in tests.

use std::io::{self, Write};
use std::path::Path;

use interview_quiz::{Catalog, LoadError, NotFoundError, Question, load_catalog};
use thiserror::Error;

use crate::Command;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

pub fn run(content: Option<&Path>, command: &Command) -> Result<(), CommandError> {
    let catalog = match content {
        Some(path) => Catalog::from_json_path(path)?,
        None => load_catalog()?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&catalog, command, &mut out)
}

fn execute<W: Write>(catalog: &Catalog, command: &Command, out: &mut W) -> Result<(), CommandError> {
    match command {
        Command::List => list(catalog, out)?,
        Command::Show { course } => {
            let course = catalog.course(*course)?;
            for question in &course.questions {
                write_question(question, out)?;
                writeln!(out)?;
            }
        }
        Command::Question { course, question } => {
            write_question(catalog.question(*course, *question)?, out)?;
        }
        Command::Validate => {
            writeln!(
                out,
                "ok: {} courses, {} questions",
                catalog.len(),
                catalog.question_count()
            )?;
        }
        Command::Export { course: Some(id) } => {
            let json = serde_json::to_string_pretty(catalog.course(*id)?)?;
            writeln!(out, "{}", json)?;
        }
        Command::Export { course: None } => {
            writeln!(out, "{}", catalog.to_json_pretty()?)?;
        }
    }

    Ok(())
}

fn list<W: Write>(catalog: &Catalog, out: &mut W) -> io::Result<()> {
    for course in catalog.courses() {
        let first = course.questions.first().map_or("", |q| q.question.as_str());
        writeln!(out, "{:>3}  {:>2} questions  {}", course.id, course.len(), first)?;
    }
    Ok(())
}

fn write_question<W: Write>(question: &Question, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}. {}", question.id, question.question)?;
    for option in &question.options {
        let mark = if option.correct { 'x' } else { ' ' };
        writeln!(out, "   [{}] {}) {}", mark, option.id, option.option)?;
    }
    Ok(())
}
