//! Laguna - integer sequence gap and duplicate analyzer
//!
//! This library takes free-form text containing integers (comma-separated,
//! newline-separated, or mixed) and reports the distinct values, the values
//! missing from the contiguous min..max range, the duplicated values with
//! their counts, and summary statistics.
//!
//! Missing-number detection is bounded twice: a hard ceiling on the total
//! range refuses pathological inputs up front, and gaps wider than a
//! threshold are reported as records instead of being enumerated, so a pair
//! of values a billion apart cannot exhaust memory or time. See
//! [`gaps`] for the details and [`analyzer::AnalysisResult::missing_values`]
//! for the resulting caveat on the missing list.

pub mod analyzer;
pub mod cli;
pub mod duplicates;
pub mod extract;
pub mod gaps;
pub mod json_output;
pub mod report;
pub mod stats;
pub mod text_output;
