//! Command implementations.
//!
//! Each command prints its report to stdout, its diagnostics to stderr, and
//! returns the exit code for the process.

pub mod check;
pub mod generate;

use crate::config::Settings;
use anyhow::Result;
use colored::Colorize;
use slack_codegen_core::Error;
use slack_codegen_core::cli::ExitCode;

/// Runs the mode selected by `settings`.
///
/// # Errors
///
/// Returns an error only if a successful report cannot be formatted.
pub async fn run(settings: &Settings) -> Result<ExitCode> {
    if settings.check {
        check::run(&settings.codegen, settings.format).await
    } else {
        generate::run(&settings.codegen, settings.format).await
    }
}

/// Prints a pipeline failure to stderr and maps it to an exit code.
pub(crate) fn report_failure(err: Error) -> ExitCode {
    let code = ExitCode::from(&err);
    eprintln!("{} {:#}", "error:".red().bold(), anyhow::Error::new(err));
    code
}
