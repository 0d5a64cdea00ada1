//! Gap engine: range sizing, large-gap detection, and bounded missing-number
//! computation
//!
//! Naive missing-number detection enumerates the whole `[min, max]` span,
//! which is O(range) in time and memory no matter how sparse the data is.
//! Two values a billion apart would sink it. This engine bounds the work
//! twice over:
//!
//! - A hard ceiling on the total span (`max_total_range`) refuses pathological
//!   inputs before any enumeration starts.
//! - When the span passes the ceiling but adjacent values are separated by a
//!   gap larger than `max_gap_for_dense_scan`, only the locally dense blocks
//!   are enumerated (block mode); the interior of each large gap is reported
//!   as a single [`GapRecord`] instead of individual missing numbers.
//!
//! Large gaps usually mean the input mixes disjoint ranges (two unrelated ID
//! blocks in one file), so the records double as a hint to the caller.

use crate::analyzer::AnalysisError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default largest gap that is still exhaustively enumerated
pub const DEFAULT_MAX_GAP_FOR_DENSE_SCAN: u64 = 1000;

/// Default ceiling on `max - min + 1` before a run is refused
pub const DEFAULT_MAX_TOTAL_RANGE: u64 = 50_000;

/// Tunable limits for the gap engine
#[derive(Debug, Clone, Copy)]
pub struct GapConfig {
    /// Gaps strictly larger than this are recorded but never enumerated
    pub max_gap_for_dense_scan: u64,
    /// Runs whose total span exceeds this are refused outright
    pub max_total_range: u64,
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            max_gap_for_dense_scan: DEFAULT_MAX_GAP_FOR_DENSE_SCAN,
            max_total_range: DEFAULT_MAX_TOTAL_RANGE,
        }
    }
}

/// Two sorted-adjacent distinct values with the count of integers missing
/// strictly between them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapRecord {
    /// Last value before the gap
    pub block_start: i64,
    /// First value after the gap
    pub block_end: i64,
    /// `block_end - block_start - 1`
    pub gap_size: u64,
}

/// Which strategy produced the missing list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Every integer in `[min, max]` was checked
    Dense,
    /// Only gaps at or below the threshold were enumerated
    Block,
}

/// Output of the gap engine for one run
#[derive(Debug, Clone)]
pub struct GapAnalysis {
    /// Smallest observed value
    pub min: i64,
    /// Largest observed value
    pub max: i64,
    /// `max - min + 1`, guaranteed `<= max_total_range`
    pub span: u64,
    /// Missing values, sorted ascending (block mode skips large-gap interiors)
    pub missing: Vec<i64>,
    /// Gaps above the threshold, in ascending order of position
    pub large_gaps: Vec<GapRecord>,
    /// Strategy used for `missing`
    pub mode: ScanMode,
}

/// Computes the observed range, large gaps, and missing values for a sorted
/// slice of distinct values
///
/// The range ceiling is checked before any enumeration, so worst-case work is
/// deterministic: O(span) in dense mode, O(sum of small gaps) in block mode.
pub fn analyze_gaps(distinct: &[i64], config: &GapConfig) -> Result<GapAnalysis, AnalysisError> {
    let (min, max) = match (distinct.first(), distinct.last()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => return Err(AnalysisError::NoNumbersFound),
    };

    // Span arithmetic in i128: min/max may sit at the i64 extremes.
    let span = (max as i128) - (min as i128) + 1;
    if span > config.max_total_range as i128 {
        return Err(AnalysisError::RangeTooLarge {
            span: span as u128,
            limit: config.max_total_range,
        });
    }
    let span = span as u64;

    let large_gaps: Vec<GapRecord> = distinct
        .windows(2)
        .filter_map(|pair| {
            let gap = gap_between(pair[0], pair[1]);
            (gap > config.max_gap_for_dense_scan).then(|| GapRecord {
                block_start: pair[0],
                block_end: pair[1],
                gap_size: gap,
            })
        })
        .collect();

    let (mode, missing) = if large_gaps.is_empty() {
        (ScanMode::Dense, missing_in_range(distinct, min, max))
    } else {
        (
            ScanMode::Block,
            missing_in_blocks(distinct, config.max_gap_for_dense_scan),
        )
    };

    tracing::debug!(
        "gap scan ({:?}): span {}, {} missing, {} large gaps",
        mode,
        span,
        missing.len(),
        large_gaps.len()
    );

    Ok(GapAnalysis {
        min,
        max,
        span,
        missing,
        large_gaps,
        mode,
    })
}

/// Count of integers strictly between two values
fn gap_between(prev: i64, next: i64) -> u64 {
    ((next as i128) - (prev as i128) - 1) as u64
}

/// Dense mode: enumerate the whole inclusive range and report absentees
fn missing_in_range(distinct: &[i64], min: i64, max: i64) -> Vec<i64> {
    let present: HashSet<i64> = distinct.iter().copied().collect();

    let mut missing = Vec::new();
    for value in min..=max {
        if !present.contains(&value) {
            missing.push(value);
        }
    }
    missing
}

/// Block mode: enumerate only the interiors of gaps at or below the
/// threshold; larger gaps stay unexpanded
fn missing_in_blocks(distinct: &[i64], max_gap: u64) -> Vec<i64> {
    let mut missing = Vec::new();
    for pair in distinct.windows(2) {
        let gap = gap_between(pair[0], pair[1]);
        if gap == 0 || gap > max_gap {
            continue;
        }
        for value in (pair[0] + 1)..pair[1] {
            missing.push(value);
        }
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_gap: u64, max_range: u64) -> GapConfig {
        GapConfig {
            max_gap_for_dense_scan: max_gap,
            max_total_range: max_range,
        }
    }

    #[test]
    fn test_dense_mode_small_holes() {
        let analysis = analyze_gaps(&[1, 2, 3, 5, 7], &GapConfig::default()).unwrap();
        assert_eq!(analysis.mode, ScanMode::Dense);
        assert_eq!(analysis.missing, vec![4, 6]);
        assert!(analysis.large_gaps.is_empty());
        assert_eq!(analysis.span, 7);
    }

    #[test]
    fn test_single_value_has_no_gaps() {
        let analysis = analyze_gaps(&[5], &GapConfig::default()).unwrap();
        assert_eq!((analysis.min, analysis.max), (5, 5));
        assert_eq!(analysis.span, 1);
        assert!(analysis.missing.is_empty());
        assert!(analysis.large_gaps.is_empty());
    }

    #[test]
    fn test_contiguous_run_has_no_missing() {
        let analysis = analyze_gaps(&[10, 11, 12, 13], &GapConfig::default()).unwrap();
        assert!(analysis.missing.is_empty());
    }

    #[test]
    fn test_empty_slice_is_rejected() {
        let err = analyze_gaps(&[], &GapConfig::default()).unwrap_err();
        assert_eq!(err, AnalysisError::NoNumbersFound);
    }

    #[test]
    fn test_block_mode_skips_large_gap_interior() {
        // One isolated outlier far from a dense cluster
        let analysis = analyze_gaps(&[1, 2, 3, 1_000_000], &config(1000, 2_000_000)).unwrap();
        assert_eq!(analysis.mode, ScanMode::Block);
        assert!(analysis.missing.is_empty());
        assert_eq!(
            analysis.large_gaps,
            vec![GapRecord {
                block_start: 3,
                block_end: 1_000_000,
                gap_size: 999_996,
            }]
        );
    }

    #[test]
    fn test_block_mode_still_enumerates_small_gaps() {
        let analysis = analyze_gaps(&[1, 3, 5000], &config(10, 10_000)).unwrap();
        assert_eq!(analysis.mode, ScanMode::Block);
        assert_eq!(analysis.missing, vec![2]);
        assert_eq!(analysis.large_gaps.len(), 1);
        assert_eq!(analysis.large_gaps[0].gap_size, 4996);
    }

    #[test]
    fn test_gap_equal_to_threshold_is_enumerated() {
        // Gap of exactly max_gap is not "large"
        let analysis = analyze_gaps(&[0, 4], &config(3, 100)).unwrap();
        assert_eq!(analysis.mode, ScanMode::Dense);
        assert_eq!(analysis.missing, vec![1, 2, 3]);
        assert!(analysis.large_gaps.is_empty());
    }

    #[test]
    fn test_gap_one_above_threshold_is_large() {
        let analysis = analyze_gaps(&[0, 5], &config(3, 100)).unwrap();
        assert_eq!(analysis.mode, ScanMode::Block);
        assert!(analysis.missing.is_empty());
        assert_eq!(analysis.large_gaps[0].gap_size, 4);
    }

    #[test]
    fn test_range_ceiling_rejects_before_enumeration() {
        let err = analyze_gaps(&[0, 100_000], &GapConfig::default()).unwrap_err();
        match err {
            AnalysisError::RangeTooLarge { span, limit } => {
                assert_eq!(span, 100_001);
                assert_eq!(limit, DEFAULT_MAX_TOTAL_RANGE);
            }
            other => panic!("expected RangeTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_span_equal_to_ceiling_passes() {
        let analysis = analyze_gaps(&[1, 50_000], &config(50_000, 50_000)).unwrap();
        assert_eq!(analysis.span, 50_000);
        assert_eq!(analysis.missing.len(), 49_998);
    }

    #[test]
    fn test_negative_range_crossing_zero() {
        let analysis = analyze_gaps(&[-2, 0, 1], &GapConfig::default()).unwrap();
        assert_eq!(analysis.missing, vec![-1]);
        assert_eq!((analysis.min, analysis.max), (-2, 1));
        assert_eq!(analysis.span, 4);
    }

    #[test]
    fn test_i64_extremes_do_not_overflow_the_guard() {
        let err = analyze_gaps(&[i64::MIN, i64::MAX], &GapConfig::default()).unwrap_err();
        match err {
            AnalysisError::RangeTooLarge { span, .. } => assert_eq!(span, 1u128 << 64),
            other => panic!("expected RangeTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_multiple_large_gaps_reported_in_order() {
        let analysis = analyze_gaps(&[0, 2000, 4000], &config(100, 10_000)).unwrap();
        let starts: Vec<i64> = analysis.large_gaps.iter().map(|g| g.block_start).collect();
        assert_eq!(starts, vec![0, 2000]);
        assert_eq!(analysis.large_gaps[0].gap_size, 1999);
    }
}
