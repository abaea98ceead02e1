//! Check command implementation.
//!
//! Compares the stored declaration hash with the installed declaration
//! without writing anything.

use super::report_failure;
use crate::formatters::{format_output, pretty};
use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use slack_codegen::{CheckReport, check};
use slack_codegen_core::CodegenConfig;
use slack_codegen_core::cli::{ExitCode, OutputFormat};
use tracing::info;

#[derive(Serialize)]
struct GenerationRecord {
    generated_at: DateTime<Utc>,
}

/// Runs the staleness check and prints the outcome.
///
/// # Errors
///
/// Returns an error if the report cannot be formatted.
pub async fn run(config: &CodegenConfig, format: OutputFormat) -> Result<ExitCode> {
    info!(metadata = %config.metadata_path.display(), "checking generated code");

    let report = match check(config).await {
        Ok(report) => report,
        Err(err) => {
            let stale = err.is_out_of_date();
            let code = report_failure(err);
            if stale {
                eprintln!("{} run `slack-codegen` to regenerate", "hint:".yellow().bold());
            }
            return Ok(code);
        }
    };

    let output = match format {
        OutputFormat::Pretty => pretty_report(&report)?,
        OutputFormat::Json | OutputFormat::Text => format_output(&report, format)?,
    };
    println!("{output}");

    Ok(ExitCode::SUCCESS)
}

/// One-line human confirmation of a passing check.
#[must_use]
pub fn summary(report: &CheckReport) -> String {
    format!(
        "{} Generated code is up to date (@slack/web-api {}, hash {})",
        "✓".green().bold(),
        report.slack_web_api_version,
        report.methods_file_hash
    )
}

/// Summary line followed by when the output was generated.
///
/// # Errors
///
/// Returns an error if the record cannot be serialized.
pub fn pretty_report(report: &CheckReport) -> Result<String> {
    let record = GenerationRecord {
        generated_at: report.generated_at,
    };
    Ok(format!("{}\n{}", summary(report), pretty::format(&record)?))
}
