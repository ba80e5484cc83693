//! Class label file loading.

use crate::core::ClassifierError;
use std::path::Path;

/// Reads a class label file, one label per line.
///
/// Surrounding whitespace is trimmed and blank lines are skipped, so line
/// `i` of the non-blank content names class `i`.
///
/// # Errors
///
/// Returns a `ClassifierError::ConfigError` if the file cannot be read.
///
/// # Example
///
/// ```rust,no_run
/// use diatom_classifier::utils::read_class_names;
/// use std::path::Path;
///
/// let labels = read_class_names(Path::new("config/diatoms.txt"))?;
/// # Ok::<(), diatom_classifier::core::ClassifierError>(())
/// ```
pub fn read_class_names(path: &Path) -> Result<Vec<String>, ClassifierError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ClassifierError::config_error(format!(
            "Failed to read class names from '{}': {}",
            path.display(),
            e
        ))
    })?;
    Ok(parse_class_names(&content))
}

fn parse_class_names(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
