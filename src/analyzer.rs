//! Top-level sequence analysis pipeline
//!
//! One entry point, three phases: extract the numbers, count duplicates,
//! run the gap engine. Every call rebuilds its working data from scratch, so
//! repeated or concurrent calls cannot observe each other.
//!
//! The public contract never lets an internal fault escape: errors and even
//! panics inside the pipeline come back as a failure [`AnalysisResult`], not
//! as something the caller has to catch.

use crate::duplicates::{find_duplicates, DuplicateRecord};
use crate::extract::extract_numbers;
use crate::gaps::{analyze_gaps, GapConfig, GapRecord};
use crate::stats::{compute_stats, SequenceStats};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::BTreeSet;
use std::panic::{catch_unwind, AssertUnwindSafe};
use thiserror::Error;

/// Errors for the analysis pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no numbers found in the input")]
    NoNumbersFound,

    #[error("range too large: {span} values between min and max exceeds the limit of {limit}; split the input into smaller ranges")]
    RangeTooLarge { span: u128, limit: u64 },

    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

/// Inclusive range of observed values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRange {
    pub min: i64,
    pub max: i64,
}

/// Immutable snapshot of one analysis run
///
/// Constructed once per [`SequenceAnalyzer::analyze`] call and returned to
/// the caller; it owns no external resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// False when the run hit a terminal condition
    pub success: bool,
    /// Descriptive failure text, present only when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Unique observed values, sorted ascending
    pub distinct_values: Vec<i64>,
    /// Missing values, sorted ascending.
    ///
    /// When a gap wider than [`GapConfig::max_gap_for_dense_scan`] is
    /// present, its interior is deliberately not enumerated here: the list
    /// is then NOT a complete complement of `[min, max]`. The skipped gaps
    /// are reported in `large_gaps` instead.
    pub missing_values: Vec<i64>,
    /// Values occurring more than once, sorted by value
    pub duplicates: Vec<DuplicateRecord>,
    /// Observed min/max, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<SequenceRange>,
    /// Summary statistics, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<SequenceStats>,
    /// Gaps wider than the dense-scan threshold
    pub large_gaps: Vec<GapRecord>,
}

impl AnalysisResult {
    /// Failure snapshot: `success = false`, data fields empty
    fn failure(error: &AnalysisError) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            distinct_values: Vec::new(),
            missing_values: Vec::new(),
            duplicates: Vec::new(),
            range: None,
            statistics: None,
            large_gaps: Vec::new(),
        }
    }
}

/// Sequence analyzer holding the gap-engine limits
///
/// The struct carries configuration only. All per-call working data lives in
/// locals of [`SequenceAnalyzer::analyze`], so a single analyzer can be
/// shared freely across calls and threads.
#[derive(Debug, Clone, Default)]
pub struct SequenceAnalyzer {
    config: GapConfig,
}

impl SequenceAnalyzer {
    /// Create an analyzer with the default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom gap-engine limits
    pub fn with_config(config: GapConfig) -> Self {
        Self { config }
    }

    /// The limits this analyzer runs with
    pub fn config(&self) -> &GapConfig {
        &self.config
    }

    /// Analyze a block of text and return the result snapshot
    ///
    /// Never panics and never returns `Err`: terminal conditions
    /// ([`AnalysisError::NoNumbersFound`], [`AnalysisError::RangeTooLarge`])
    /// and internal faults all surface as `success = false` with a
    /// descriptive `error`.
    ///
    /// # Example
    /// ```
    /// use laguna::analyzer::SequenceAnalyzer;
    ///
    /// let result = SequenceAnalyzer::new().analyze("1, 2, 4");
    /// assert!(result.success);
    /// assert_eq!(result.distinct_values, vec![1, 2, 4]);
    /// assert_eq!(result.missing_values, vec![3]);
    /// ```
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        match catch_unwind(AssertUnwindSafe(|| self.run(text))) {
            Ok(Ok(result)) => result,
            Ok(Err(error)) => AnalysisResult::failure(&error),
            Err(payload) => {
                AnalysisResult::failure(&AnalysisError::Unexpected(panic_message(&payload)))
            }
        }
    }

    /// The actual pipeline; all working data is local to the call
    fn run(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let numbers = extract_numbers(text);
        if numbers.is_empty() {
            return Err(AnalysisError::NoNumbersFound);
        }

        let distinct: Vec<i64> = numbers
            .iter()
            .copied()
            .collect::<BTreeSet<i64>>()
            .into_iter()
            .collect();

        let duplicates = find_duplicates(&numbers);
        let gap_analysis = analyze_gaps(&distinct, &self.config)?;
        let statistics = compute_stats(numbers.len(), distinct.len(), &duplicates, &gap_analysis);

        Ok(AnalysisResult {
            success: true,
            error: None,
            distinct_values: distinct,
            missing_values: gap_analysis.missing,
            duplicates,
            range: Some(SequenceRange {
                min: gap_analysis.min,
                max: gap_analysis.max,
            }),
            statistics: Some(statistics),
            large_gaps: gap_analysis.large_gaps,
        })
    }
}

/// Analyze with the default limits
///
/// # Example
/// ```
/// let result = laguna::analyzer::analyze("7");
/// assert!(result.success);
/// assert_eq!(result.distinct_values, vec![7]);
/// ```
pub fn analyze(text: &str) -> AnalysisResult {
    SequenceAnalyzer::new().analyze(text)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "internal panic".to_string()
    }
}
