use anyhow::{bail, Context, Result};
use clap::Parser;
use laguna::analyzer::SequenceAnalyzer;
use laguna::cli::{Cli, OutputFormat};
use laguna::gaps::GapConfig;
use laguna::json_output::JsonOutput;
use laguna::report::format_missing_for_copy;
use laguna::text_output::render_report;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Read the raw input as text, from a file or stdin
///
/// Enforces the collaborator-side constraints: the size ceiling and UTF-8
/// decoding. The engine itself never touches I/O.
fn read_input(path: Option<&Path>, max_bytes: u64) -> Result<String> {
    let bytes = match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut buffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    if bytes.len() as u64 > max_bytes {
        bail!(
            "input is {} bytes, above the limit of {} (raise it with --max-input-bytes)",
            bytes.len(),
            max_bytes
        );
    }

    String::from_utf8(bytes).context("input is not valid UTF-8 text")
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    let text = read_input(args.input.as_deref(), args.max_input_bytes)?;

    let config = GapConfig {
        max_gap_for_dense_scan: args.max_gap,
        max_total_range: args.max_range,
    };
    let result = SequenceAnalyzer::with_config(config).analyze(&text);

    if args.copy_list {
        if let Some(error) = &result.error {
            bail!("analysis failed: {}", error);
        }
        println!("{}", format_missing_for_copy(&result));
        return Ok(());
    }

    match args.format {
        OutputFormat::Json => {
            println!("{}", JsonOutput::from_result(&result).to_string_pretty()?);
        }
        OutputFormat::Text => {
            if result.success {
                print!("{}", render_report(&result));
            } else if let Some(error) = &result.error {
                eprintln!("laguna: {}", error);
            }
        }
    }

    if !result.success {
        std::process::exit(1);
    }
    Ok(())
}
