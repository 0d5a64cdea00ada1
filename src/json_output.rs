//! JSON output format for analysis results

use crate::analyzer::{AnalysisResult, SequenceRange};
use crate::duplicates::DuplicateRecord;
use crate::gaps::GapRecord;
use crate::stats::SequenceStats;
use serde::{Deserialize, Serialize};

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Whether the run produced data
    pub success: bool,
    /// Failure text (only when `success` is false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Unique observed values, sorted ascending
    pub distinct_values: Vec<i64>,
    /// Missing values, sorted ascending (large-gap interiors excluded)
    pub missing_values: Vec<i64>,
    /// Values occurring more than once
    pub duplicates: Vec<DuplicateRecord>,
    /// Observed min/max (only on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<SequenceRange>,
    /// Summary statistics (only on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<SequenceStats>,
    /// Gaps wider than the dense-scan threshold
    pub large_gaps: Vec<GapRecord>,
}

impl JsonOutput {
    /// Build the JSON document for an analysis result
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "laguna-json-v1".to_string(),
            success: result.success,
            error: result.error.clone(),
            distinct_values: result.distinct_values.clone(),
            missing_values: result.missing_values.clone(),
            duplicates: result.duplicates.clone(),
            range: result.range,
            statistics: result.statistics.clone(),
            large_gaps: result.large_gaps.clone(),
        }
    }

    /// Serialize with pretty indentation
    pub fn to_string_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;

    #[test]
    fn test_success_document_round_trips() {
        let output = JsonOutput::from_result(&analyze("1, 2, 4, 4"));
        let json = output.to_string_pretty().unwrap();

        let parsed: JsonOutput = serde_json::from_str(&json).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.format, "laguna-json-v1");
        assert_eq!(parsed.distinct_values, vec![1, 2, 4]);
        assert_eq!(parsed.missing_values, vec![3]);
        assert_eq!(parsed.duplicates.len(), 1);
        assert_eq!(parsed.range, Some(SequenceRange { min: 1, max: 4 }));
    }

    #[test]
    fn test_failure_document_omits_optional_fields() {
        let output = JsonOutput::from_result(&analyze("abc"));
        let json = output.to_string_pretty().unwrap();

        assert!(json.contains("\"success\": false"));
        assert!(json.contains("\"error\""));
        assert!(!json.contains("\"range\""));
        assert!(!json.contains("\"statistics\""));
    }

    #[test]
    fn test_version_matches_crate() {
        let output = JsonOutput::from_result(&analyze("1"));
        assert_eq!(output.version, env!("CARGO_PKG_VERSION"));
    }
}
