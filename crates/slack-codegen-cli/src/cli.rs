//! CLI argument definitions and parsing.
//!
//! Every path flag can also be supplied through a `SLACK_CODEGEN_*`
//! environment variable; explicit flags win over the environment.

use clap::Parser;
use std::path::PathBuf;

/// Generate Effect services for the Slack Web API.
///
/// Reads the `Methods` declaration shipped with `@slack/web-api` and writes
/// one service module per namespace plus an index. With `--check`, verifies
/// that the generated code still matches the installed declaration.
#[derive(Parser, Debug)]
#[command(name = "slack-codegen")]
#[command(version, about, long_about = None)]
#[command(author = "Effect Slack Team")]
pub struct Cli {
    /// Verify the generated code is up to date instead of regenerating
    #[arg(long)]
    pub check: bool,

    /// Project root; relative paths resolve against it
    #[arg(long, env = "SLACK_CODEGEN_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Path to the `Methods` declaration (`methods.d.ts`)
    #[arg(long, env = "SLACK_CODEGEN_INPUT")]
    pub input: Option<PathBuf>,

    /// Path to the `@slack/web-api` package.json
    #[arg(long, env = "SLACK_CODEGEN_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Directory receiving the generated modules
    #[arg(long, env = "SLACK_CODEGEN_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Path of the generation metadata record
    #[arg(long, env = "SLACK_CODEGEN_METADATA")]
    pub metadata: Option<PathBuf>,

    /// Configuration file, relative to the root (defaults to
    /// `slack-codegen.toml` in the root if present)
    #[arg(long, env = "SLACK_CODEGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (json, text, pretty)
    #[arg(long = "format", env = "SLACK_CODEGEN_FORMAT")]
    pub format: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,
}
