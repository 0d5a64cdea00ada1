//! CLI argument parsing for Laguna

use crate::gaps::{DEFAULT_MAX_GAP_FOR_DENSE_SCAN, DEFAULT_MAX_TOTAL_RANGE};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Default input size ceiling (5 MiB)
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 5 * 1024 * 1024;

/// Output format for analysis reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "laguna")]
#[command(version)]
#[command(about = "Find missing and duplicated numbers in integer sequences", long_about = None)]
pub struct Cli {
    /// Input file with the number sequence; reads stdin when omitted or "-"
    pub input: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Largest gap between adjacent values that is still enumerated
    #[arg(
        long = "max-gap",
        value_name = "N",
        default_value_t = DEFAULT_MAX_GAP_FOR_DENSE_SCAN
    )]
    pub max_gap: u64,

    /// Refuse inputs whose total range (max - min + 1) exceeds this
    #[arg(
        long = "max-range",
        value_name = "N",
        default_value_t = DEFAULT_MAX_TOTAL_RANGE
    )]
    pub max_range: u64,

    /// Print only the comma-separated missing list, ready to paste
    #[arg(long = "copy-list")]
    pub copy_list: bool,

    /// Reject inputs larger than this many bytes
    #[arg(
        long = "max-input-bytes",
        value_name = "BYTES",
        default_value_t = DEFAULT_MAX_INPUT_BYTES
    )]
    pub max_input_bytes: u64,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
