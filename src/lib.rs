//! # interview-quiz
//!
//! Interview etiquette quiz content (in Hindi) as a validated, read-only
//! catalog of courses, questions and answer options.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use interview_quiz::catalog;
//!
//! let catalog = catalog().expect("bundled content is valid");
//!
//! for course in catalog.courses() {
//!     println!("course {}: {} questions", course.id, course.len());
//! }
//!
//! let question = catalog.question(1, 1).expect("question exists");
//! println!("{}", question.question);
//! ```
//!
//! Content in the same JSON format can also be loaded from a file with
//! [`Catalog::from_json_path`].

mod catalog;
mod data;
mod error;
pub mod logging;
mod models;
mod validate;

use std::sync::LazyLock;

pub use catalog::Catalog;
pub use error::{LoadError, NotFoundError, ValidationError};
pub use models::{AnswerOption, Course, Question};

static CATALOG: LazyLock<Result<Catalog, LoadError>> = LazyLock::new(load_catalog);

/// Build a fresh catalog from the bundled content.
pub fn load_catalog() -> Result<Catalog, LoadError> {
    Catalog::from_json_str(data::BUNDLED_CONTENT)
}

/// The process-wide catalog of bundled content.
///
/// Loaded and validated on first access. Concurrent first callers block
/// until the single load finishes and then all see the same result.
pub fn catalog() -> Result<&'static Catalog, &'static LoadError> {
    CATALOG.as_ref()
}
