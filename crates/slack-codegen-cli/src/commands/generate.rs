//! Generate command implementation.
//!
//! Regenerates every service module, the index and the metadata record.

use super::report_failure;
use crate::formatters::{format_output, pretty};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use slack_codegen::{GenerateReport, generate};
use slack_codegen_core::CodegenConfig;
use slack_codegen_core::cli::{ExitCode, OutputFormat};
use std::path::PathBuf;
use tracing::info;

#[derive(Serialize)]
struct WrittenFiles<'a> {
    files: &'a [PathBuf],
    metadata: &'a PathBuf,
}

/// Runs generation and prints the report.
///
/// # Errors
///
/// Returns an error if the report cannot be formatted.
pub async fn run(config: &CodegenConfig, format: OutputFormat) -> Result<ExitCode> {
    info!(input = %config.input_path.display(), "generating services");

    let report = match generate(config).await {
        Ok(report) => report,
        Err(err) => return Ok(report_failure(err)),
    };

    let output = match format {
        OutputFormat::Pretty => pretty_report(&report)?,
        OutputFormat::Json | OutputFormat::Text => format_output(&report, format)?,
    };
    println!("{output}");

    Ok(ExitCode::SUCCESS)
}

/// One-line human summary of a generation run.
#[must_use]
pub fn summary(report: &GenerateReport) -> String {
    format!(
        "{} Generated {} services ({} methods) from @slack/web-api {} into {}",
        "✓".green().bold(),
        report.namespace_count,
        report.method_count,
        report.slack_web_api_version.bold(),
        report.output_dir.display()
    )
}

/// Summary line followed by every written path.
///
/// # Errors
///
/// Returns an error if the file list cannot be serialized.
pub fn pretty_report(report: &GenerateReport) -> Result<String> {
    let written = WrittenFiles {
        files: &report.files,
        metadata: &report.metadata_path,
    };
    Ok(format!("{}\n{}", summary(report), pretty::format(&written)?))
}
