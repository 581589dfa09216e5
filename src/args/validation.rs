use std::{fs, path::PathBuf};

use crate::model::CourseInfo;

/// # Errors
///
/// Will return `Err` if the file is not readable, is not json, or does not
/// describe a full 18 hole card.
pub fn check_readable_course_file(file: &str) -> Result<CourseInfo, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The course file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("The course file '{file}': {e}"))?;
    let course: CourseInfo = serde_json::from_str(&contents)
        .map_err(|e| format!("The course file '{file}' is not in the correct format: {e}"))?;
    course.validate().map_err(|e| e.to_string())?;
    Ok(course)
}
