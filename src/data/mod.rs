mod loader;

pub(crate) use loader::{BUNDLED_CONTENT, parse_courses, read_content};
