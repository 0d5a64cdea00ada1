//! Human-readable text report
//!
//! Aligned label/value lines followed by the detail sections; sections with
//! nothing to show are omitted. The missing-number line reuses the copy
//! formatter, so oversized lists collapse to the same summary message
//! everywhere.

use crate::analyzer::AnalysisResult;
use crate::report::format_missing_for_copy;

/// Renders the full report for one analysis run
pub fn render_report(result: &AnalysisResult) -> String {
    let mut out = String::new();

    if !result.success {
        let reason = result.error.as_deref().unwrap_or("unknown error");
        out.push_str(&format!("Analysis failed: {}\n", reason));
        return out;
    }

    out.push_str("=== Sequence Analysis ===\n\n");

    if let Some(range) = &result.range {
        out.push_str(&format!(
            "{:<22} {} .. {}\n",
            "Range:", range.min, range.max
        ));
    }

    if let Some(stats) = &result.statistics {
        out.push_str(&format!(
            "{:<22} {}\n",
            "Numbers in input:", stats.total_numbers
        ));
        out.push_str(&format!(
            "{:<22} {}\n",
            "Distinct values:", stats.distinct_count
        ));
        out.push_str(&format!(
            "{:<22} {}\n",
            "Duplicated values:", stats.duplicate_count
        ));
        out.push_str(&format!(
            "{:<22} {}\n",
            "Missing values:", stats.missing_count
        ));
        out.push_str(&format!(
            "{:<22} {}\n",
            "Expected range size:", stats.expected_range_size
        ));
        out.push_str(&format!(
            "{:<22} {:.2}%\n",
            "Completeness:", stats.completeness_percent
        ));
    }

    if !result.missing_values.is_empty() {
        out.push_str("\nMissing numbers:\n");
        out.push_str(&format!("  {}\n", format_missing_for_copy(result)));
    }

    if !result.duplicates.is_empty() {
        out.push_str("\nDuplicates:\n");
        out.push_str(&format!("{:>12} {:>9}\n", "value", "count"));
        for record in &result.duplicates {
            out.push_str(&format!("{:>12} {:>9}\n", record.value, record.count));
        }
    }

    if !result.large_gaps.is_empty() {
        out.push_str("\nLarge gaps (the input may contain disjoint ranges):\n");
        out.push_str(&format!(
            "{:>14} {:>14} {:>12}\n",
            "after", "before", "missing"
        ));
        for gap in &result.large_gaps {
            out.push_str(&format!(
                "{:>14} {:>14} {:>12}\n",
                gap.block_start, gap.block_end, gap.gap_size
            ));
        }
    }

    out
}
