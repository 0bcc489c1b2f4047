//! Invariant checks for quiz content.
//!
//! Records are visited in source order and the first violation is returned,
//! so the same content always fails with the same error.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::models::{Course, Question};

pub(crate) const MIN_OPTIONS: usize = 2;

pub(crate) fn validate_courses(courses: &[Course]) -> Result<(), ValidationError> {
    if courses.is_empty() {
        return Err(ValidationError::EmptyCatalog);
    }

    let mut seen = HashSet::with_capacity(courses.len());
    for course in courses {
        if course.id == 0 {
            return Err(ValidationError::InvalidCourseId { course_id: course.id });
        }
        if !seen.insert(course.id) {
            return Err(ValidationError::DuplicateCourse { course_id: course.id });
        }
        validate_course(course)?;
        tracing::debug!(course_id = course.id, questions = course.len(), "course validated");
    }

    Ok(())
}

fn validate_course(course: &Course) -> Result<(), ValidationError> {
    if course.questions.is_empty() {
        return Err(ValidationError::EmptyCourse { course_id: course.id });
    }

    let mut seen = HashSet::with_capacity(course.questions.len());
    for question in &course.questions {
        if !seen.insert(question.id) {
            return Err(ValidationError::DuplicateQuestion {
                course_id: course.id,
                question_id: question.id,
            });
        }
        validate_question(course.id, question)?;
    }

    Ok(())
}

fn validate_question(course_id: u32, question: &Question) -> Result<(), ValidationError> {
    let question_id = question.id;

    if question.question.trim().is_empty() {
        return Err(ValidationError::EmptyQuestionText { course_id, question_id });
    }

    if question.options.len() < MIN_OPTIONS {
        return Err(ValidationError::TooFewOptions {
            course_id,
            question_id,
            count: question.options.len(),
        });
    }

    let mut seen = HashSet::with_capacity(question.options.len());
    for option in &question.options {
        if !seen.insert(option.id) {
            return Err(ValidationError::DuplicateOption {
                course_id,
                question_id,
                option_id: option.id,
            });
        }
        if option.option.trim().is_empty() {
            return Err(ValidationError::EmptyOptionText {
                course_id,
                question_id,
                option_id: option.id,
            });
        }
    }

    match question.correct_count() {
        1 => Ok(()),
        count => Err(ValidationError::CorrectOptionCount {
            course_id,
            question_id,
            count,
        }),
    }
}
