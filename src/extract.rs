//! Number token extraction from raw text
//!
//! A token is a maximal match of an optional minus sign followed by decimal
//! digits. Every other character acts as a separator, so comma-separated,
//! newline-separated, and mixed inputs all tokenize the same way.

use regex::Regex;
use std::sync::OnceLock;

/// Pattern for a signed decimal integer token
const NUMBER_PATTERN: &str = r"-?\d+";

fn number_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(NUMBER_PATTERN).expect("number pattern is valid"))
}

/// Extracts every integer token from `text`, in order of appearance
///
/// Duplicates are preserved. Tokens whose digit run does not fit in `i64`
/// are skipped instead of failing the whole scan.
///
/// # Example
/// ```
/// use laguna::extract::extract_numbers;
///
/// let numbers = extract_numbers("1, 2,\n-3\n2");
/// assert_eq!(numbers, vec![1, 2, -3, 2]);
/// ```
pub fn extract_numbers(text: &str) -> Vec<i64> {
    let mut numbers = Vec::new();

    for token in number_regex().find_iter(text) {
        match token.as_str().parse::<i64>() {
            Ok(value) => numbers.push(value),
            Err(_) => {
                // Digit run wider than i64. Skip it, keep scanning.
                tracing::debug!("skipping out-of-range token: {}", token.as_str());
            }
        }
    }

    tracing::debug!("extracted {} number tokens", numbers.len());
    numbers
}
