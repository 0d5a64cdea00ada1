//! Summary statistics derived from a completed analysis
//!
//! Pure derivation: every field is a function of data the pipeline already
//! computed, with no extra scanning.

use crate::duplicates::DuplicateRecord;
use crate::gaps::GapAnalysis;
use serde::{Deserialize, Serialize};

/// Scalar summaries for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceStats {
    /// Tokens extracted from the input, duplicates included
    pub total_numbers: u64,
    /// Count of distinct values
    pub distinct_count: u64,
    /// Count of values that appear more than once
    pub duplicate_count: u64,
    /// Count of reported missing values
    pub missing_count: u64,
    /// `max - min + 1`
    pub expected_range_size: u64,
    /// `distinct / expected_range_size * 100`, rounded to 2 decimals
    pub completeness_percent: f64,
    /// True when at least one gap exceeded the dense-scan threshold
    pub has_large_gaps: bool,
    /// Count of gaps above the threshold
    pub large_gap_count: u64,
}

/// Builds the statistics block from the pipeline outputs
pub fn compute_stats(
    total_numbers: usize,
    distinct_count: usize,
    duplicates: &[DuplicateRecord],
    gap_analysis: &GapAnalysis,
) -> SequenceStats {
    SequenceStats {
        total_numbers: total_numbers as u64,
        distinct_count: distinct_count as u64,
        duplicate_count: duplicates.len() as u64,
        missing_count: gap_analysis.missing.len() as u64,
        expected_range_size: gap_analysis.span,
        completeness_percent: completeness_percent(distinct_count as u64, gap_analysis.span),
        has_large_gaps: !gap_analysis.large_gaps.is_empty(),
        large_gap_count: gap_analysis.large_gaps.len() as u64,
    }
}

/// Percentage of the expected range that is actually present, rounded to
/// 2 decimals; 0 when the expected size is 0
fn completeness_percent(distinct_count: u64, expected_range_size: u64) -> f64 {
    if expected_range_size == 0 {
        return 0.0;
    }
    let percent = distinct_count as f64 / expected_range_size as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gaps::{analyze_gaps, GapConfig};

    fn gap_analysis(distinct: &[i64]) -> GapAnalysis {
        analyze_gaps(distinct, &GapConfig::default()).unwrap()
    }

    #[test]
    fn test_single_value_is_fully_complete() {
        let analysis = gap_analysis(&[5]);
        let stats = compute_stats(1, 1, &[], &analysis);
        assert_eq!(stats.total_numbers, 1);
        assert_eq!(stats.distinct_count, 1);
        assert_eq!(stats.expected_range_size, 1);
        assert_eq!(stats.completeness_percent, 100.0);
        assert!(!stats.has_large_gaps);
    }

    #[test]
    fn test_completeness_rounds_to_two_decimals() {
        // 12 distinct over a 22-wide range: 54.5454...% -> 54.55
        let analysis = gap_analysis(&[1, 2, 3, 5, 7, 8, 9, 12, 15, 18, 20, 22]);
        let stats = compute_stats(15, 12, &[], &analysis);
        assert_eq!(stats.completeness_percent, 54.55);
    }

    #[test]
    fn test_zero_expected_size_defined_as_zero() {
        assert_eq!(completeness_percent(0, 0), 0.0);
    }

    #[test]
    fn test_duplicate_and_missing_counts() {
        let analysis = gap_analysis(&[1, 2, 4]);
        let duplicates = vec![DuplicateRecord { value: 2, count: 3 }];
        let stats = compute_stats(5, 3, &duplicates, &analysis);
        assert_eq!(stats.duplicate_count, 1);
        assert_eq!(stats.missing_count, 1);
    }

    #[test]
    fn test_large_gap_flag_and_count() {
        let config = GapConfig {
            max_gap_for_dense_scan: 10,
            max_total_range: 50_000,
        };
        let analysis = analyze_gaps(&[1, 2, 5000, 10_000], &config).unwrap();
        let stats = compute_stats(4, 4, &[], &analysis);
        assert!(stats.has_large_gaps);
        assert_eq!(stats.large_gap_count, 2);
    }
}
