use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Content that breaks a catalog invariant. Names the first offending record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("catalog contains no courses")]
    EmptyCatalog,

    #[error("course id {course_id} is invalid, ids start at 1")]
    InvalidCourseId { course_id: u32 },

    #[error("course {course_id} appears more than once")]
    DuplicateCourse { course_id: u32 },

    #[error("course {course_id} has no questions")]
    EmptyCourse { course_id: u32 },

    #[error("course {course_id}: question {question_id} appears more than once")]
    DuplicateQuestion { course_id: u32, question_id: u32 },

    #[error("course {course_id}: question {question_id} has empty text")]
    EmptyQuestionText { course_id: u32, question_id: u32 },

    #[error("course {course_id}: question {question_id} has {count} option(s), at least 2 required")]
    TooFewOptions {
        course_id: u32,
        question_id: u32,
        count: usize,
    },

    #[error("course {course_id}: question {question_id}: option {option_id} appears more than once")]
    DuplicateOption {
        course_id: u32,
        question_id: u32,
        option_id: u32,
    },

    #[error("course {course_id}: question {question_id}: option {option_id} has empty text")]
    EmptyOptionText {
        course_id: u32,
        question_id: u32,
        option_id: u32,
    },

    #[error("course {course_id}: question {question_id} has {count} correct options, expected exactly 1")]
    CorrectOptionCount {
        course_id: u32,
        question_id: u32,
        count: usize,
    },
}

impl ValidationError {
    /// Course the offending record belongs to, if any.
    pub fn course_id(&self) -> Option<u32> {
        match self {
            ValidationError::EmptyCatalog => None,
            ValidationError::InvalidCourseId { course_id }
            | ValidationError::DuplicateCourse { course_id }
            | ValidationError::EmptyCourse { course_id }
            | ValidationError::DuplicateQuestion { course_id, .. }
            | ValidationError::EmptyQuestionText { course_id, .. }
            | ValidationError::TooFewOptions { course_id, .. }
            | ValidationError::DuplicateOption { course_id, .. }
            | ValidationError::EmptyOptionText { course_id, .. }
            | ValidationError::CorrectOptionCount { course_id, .. } => Some(*course_id),
        }
    }

    /// Question the offending record belongs to, if the error is question-level.
    pub fn question_id(&self) -> Option<u32> {
        match self {
            ValidationError::DuplicateQuestion { question_id, .. }
            | ValidationError::EmptyQuestionText { question_id, .. }
            | ValidationError::TooFewOptions { question_id, .. }
            | ValidationError::DuplicateOption { question_id, .. }
            | ValidationError::EmptyOptionText { question_id, .. }
            | ValidationError::CorrectOptionCount { question_id, .. } => Some(*question_id),
            _ => None,
        }
    }
}

/// A lookup for a course or question that the catalog does not contain.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("course {course_id} not found")]
    Course { course_id: u32 },

    #[error("question {question_id} not found in course {course_id}")]
    Question { course_id: u32, question_id: u32 },
}

/// Failure to produce a catalog from content.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed quiz content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid quiz content: {0}")]
    Validation(#[from] ValidationError),
}
