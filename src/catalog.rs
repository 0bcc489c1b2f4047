use std::collections::HashMap;
use std::path::Path;

use crate::data;
use crate::error::{LoadError, NotFoundError, ValidationError};
use crate::models::{Course, Question};
use crate::validate::validate_courses;

/// Validated, read-only quiz content.
///
/// The only way to build a `Catalog` is through [`Catalog::new`] (or the
/// loaders that call it), so every instance satisfies the content
/// invariants. Accessors return shared references; callers that want to
/// modify a course work on a clone.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    index: HashMap<u32, usize>,
}

impl Catalog {
    /// Validate `courses` and build a catalog from them.
    pub fn new(courses: Vec<Course>) -> Result<Self, ValidationError> {
        if let Err(err) = validate_courses(&courses) {
            tracing::warn!(%err, "quiz content rejected");
            return Err(err);
        }

        let index = courses
            .iter()
            .enumerate()
            .map(|(position, course)| (course.id, position))
            .collect();

        let catalog = Self { courses, index };
        tracing::info!(
            courses = catalog.len(),
            questions = catalog.question_count(),
            "quiz catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse and validate content in the bundled JSON format.
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        let courses = data::parse_courses(content)?;
        Ok(Self::new(courses)?)
    }

    /// Read, parse and validate a content file.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let content = data::read_content(path)?;
        Self::from_json_str(&content)
    }

    /// All courses in source order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course(&self, course_id: u32) -> Result<&Course, NotFoundError> {
        self.index
            .get(&course_id)
            .map(|&position| &self.courses[position])
            .ok_or(NotFoundError::Course { course_id })
    }

    pub fn question(&self, course_id: u32, question_id: u32) -> Result<&Question, NotFoundError> {
        self.course(course_id)?
            .question(question_id)
            .ok_or(NotFoundError::Question {
                course_id,
                question_id,
            })
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Always false for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Total number of questions across all courses.
    pub fn question_count(&self) -> usize {
        self.courses.iter().map(Course::len).sum()
    }

    /// Serialize the catalog back into the content format.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.courses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = r#"[
        {
            "id": 2,
            "questions": [
                {
                    "id": 1,
                    "question": "इंटरव्यू के लिए कैसे कपड़े पहनने चाहिए?",
                    "options": [
                        { "id": 1, "option": "साफ़ और औपचारिक", "correct": true },
                        { "id": 2, "option": "जो भी मिल जाए", "correct": false }
                    ]
                }
            ]
        },
        {
            "id": 1,
            "questions": [
                {
                    "id": 5,
                    "question": "हमें किससे पहले मिलना चाहिए?",
                    "options": [
                        { "id": 1, "option": "रिसेप्शन पर", "correct": false },
                        { "id": 2, "option": "सीधे मैनेजर से", "correct": false },
                        { "id": 3, "option": "रिसेप्शन पर अपना परिचय देकर", "correct": true }
                    ]
                }
            ]
        }
    ]"#;

    #[test]
    fn test_courses_keep_source_order() {
        let catalog = Catalog::from_json_str(CONTENT).unwrap();
        let ids: Vec<u32> = catalog.courses().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.question_count(), 2);
    }

    #[test]
    fn test_course_lookup() {
        let catalog = Catalog::from_json_str(CONTENT).unwrap();
        assert_eq!(catalog.course(1).unwrap().questions[0].id, 5);
        assert_eq!(
            catalog.course(3).unwrap_err(),
            NotFoundError::Course { course_id: 3 }
        );
    }

    #[test]
    fn test_question_lookup() {
        let catalog = Catalog::from_json_str(CONTENT).unwrap();
        let question = catalog.question(1, 5).unwrap();
        assert_eq!(question.correct_option().map(|o| o.id), Some(3));

        assert_eq!(
            catalog.question(1, 1).unwrap_err(),
            NotFoundError::Question {
                course_id: 1,
                question_id: 1
            }
        );
        assert_eq!(
            catalog.question(7, 1).unwrap_err(),
            NotFoundError::Course { course_id: 7 }
        );
    }

    #[test]
    fn test_invalid_content_yields_no_catalog() {
        let content = CONTENT.replace(r#""option": "जो भी मिल जाए", "correct": false"#, r#""option": "जो भी मिल जाए", "correct": true"#);
        match Catalog::from_json_str(&content) {
            Err(LoadError::Validation(err)) => {
                assert_eq!(
                    err,
                    ValidationError::CorrectOptionCount {
                        course_id: 2,
                        question_id: 1,
                        count: 2
                    }
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_export_reloads_identically() {
        let catalog = Catalog::from_json_str(CONTENT).unwrap();
        let exported = catalog.to_json_pretty().unwrap();
        let reloaded = Catalog::from_json_str(&exported).unwrap();
        assert_eq!(catalog.courses(), reloaded.courses());
    }
}
