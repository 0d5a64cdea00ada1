//! Copy-friendly rendering of the missing-number list
//!
//! The analyzer returns missing values as data; this module turns them into
//! the single string users paste elsewhere. The size cap protects the
//! presentation layer from unbounded output, not the engine.

use crate::analyzer::AnalysisResult;

/// Largest missing list rendered verbatim; beyond this a summary is returned
pub const COPY_LIST_LIMIT: usize = 1000;

/// Renders the missing values as one comma-separated string
///
/// Returns a fixed message when nothing is missing, and a summary (instead
/// of a huge string) when more than [`COPY_LIST_LIMIT`] values are missing.
///
/// # Example
/// ```
/// use laguna::analyzer::analyze;
/// use laguna::report::format_missing_for_copy;
///
/// let result = analyze("1, 2, 4, 7");
/// assert_eq!(format_missing_for_copy(&result), "3, 5, 6");
/// ```
pub fn format_missing_for_copy(result: &AnalysisResult) -> String {
    if result.missing_values.is_empty() {
        return "No missing numbers".to_string();
    }

    if result.missing_values.len() > COPY_LIST_LIMIT {
        return format!(
            "{} numbers are missing; re-run the analysis on smaller sub-ranges to list them",
            result.missing_values.len()
        );
    }

    result
        .missing_values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}
