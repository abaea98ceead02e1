//! Slack codegen CLI.
//!
//! Generates Effect service modules from the installed `@slack/web-api`
//! `Methods` declaration, or checks that previously generated modules are
//! still current.
//!
//! # Examples
//!
//! ```bash
//! # Regenerate src/generated/ from node_modules
//! slack-codegen
//!
//! # Fail in CI when the SDK was upgraded without regenerating
//! slack-codegen --check
//!
//! # Custom layout, machine-readable report
//! slack-codegen --root ../app --output src/slack --format json
//! ```

use anyhow::Result;
use clap::Parser;
use slack_codegen_cli::{Cli, Settings, commands};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let settings = Settings::resolve(&cli).await?;

    let exit_code = commands::run(&settings).await?;

    std::process::exit(exit_code.as_i32());
}

/// Initializes logging infrastructure.
///
/// `RUST_LOG` selects the filter unless `--verbose` forces debug level.
/// Logs go to stderr so reports on stdout stay machine-readable.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}
