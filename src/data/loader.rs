use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::models::Course;

/// Interview etiquette courses shipped with the crate.
pub(crate) const BUNDLED_CONTENT: &str = include_str!("courses.json");

pub(crate) fn read_content<P: AsRef<Path>>(path: P) -> Result<String, LoadError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading quiz content");

    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn parse_courses(content: &str) -> Result<Vec<Course>, LoadError> {
    Ok(serde_json::from_str(content)?)
}
