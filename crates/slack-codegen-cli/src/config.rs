//! Settings resolution.
//!
//! Layers, lowest precedence first:
//! 1. defaults derived from `--root`
//! 2. `slack-codegen.toml` in the root, or the file named by `--config`
//!    (a relative `--config` path resolves against the root)
//! 3. `SLACK_CODEGEN_*` environment variables and explicit flags
//!
//! # Examples
//!
//! ```toml
//! # slack-codegen.toml
//! input = "vendor/methods.d.ts"
//! output = "src/slack/generated"
//! format = "text"
//! ```

use crate::cli::Cli;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use slack_codegen_core::cli::OutputFormat;
use slack_codegen_core::{CodegenConfig, METADATA_FILE_NAME};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Name of the configuration file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "slack-codegen.toml";

/// Contents of a configuration file.
///
/// Every key is optional; relative paths resolve against the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Path to the `Methods` declaration
    pub input: Option<PathBuf>,

    /// Path to the `@slack/web-api` package.json
    pub manifest: Option<PathBuf>,

    /// Output directory
    pub output: Option<PathBuf>,

    /// Metadata record path
    pub metadata: Option<PathBuf>,

    /// Default output format (json, text, pretty)
    pub format: Option<String>,
}

impl FileConfig {
    /// Loads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub async fn load(path: &Path) -> Result<Self> {
        Self::load_optional(path)
            .await?
            .with_context(|| format!("config file not found: {}", path.display()))
    }

    /// Loads a configuration file, returning `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not
    /// valid TOML.
    pub async fn load_optional(path: &Path) -> Result<Option<Self>> {
        let raw = match fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read config file: {}", path.display()));
            }
        };
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), "loaded configuration file");
        Ok(Some(config))
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Paths used by the pipeline
    pub codegen: CodegenConfig,
    /// Report format
    pub format: OutputFormat,
    /// Whether to check instead of generate
    pub check: bool,
}

impl Settings {
    /// Resolves settings from parsed arguments and the optional config file.
    ///
    /// An explicit `--config` must exist; the implicit root file is only
    /// used when present. Both resolve against `--root`.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be loaded or the format is
    /// not recognized.
    pub async fn resolve(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(&cli.root.join(path)).await?,
            None => FileConfig::load_optional(&cli.root.join(CONFIG_FILE_NAME))
                .await?
                .unwrap_or_default(),
        };

        Self::from_layers(cli, &file)
    }

    /// Merges arguments over file values over root defaults.
    ///
    /// When only the output directory is overridden, the metadata record
    /// moves with it.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected format is not recognized.
    pub fn from_layers(cli: &Cli, file: &FileConfig) -> Result<Self> {
        let mut codegen = CodegenConfig::from_root(&cli.root);

        if let Some(input) = cli.input.as_ref().or(file.input.as_ref()) {
            codegen = codegen.with_input_path(input);
        }
        if let Some(manifest) = cli.manifest.as_ref().or(file.manifest.as_ref()) {
            codegen = codegen.with_manifest_path(manifest);
        }
        if let Some(output) = cli.output.as_ref().or(file.output.as_ref()) {
            codegen = codegen.with_output_dir(output);
            codegen.metadata_path = codegen.output_dir.join(METADATA_FILE_NAME);
        }
        if let Some(metadata) = cli.metadata.as_ref().or(file.metadata.as_ref()) {
            codegen = codegen.with_metadata_path(metadata);
        }

        let format = cli
            .format
            .as_deref()
            .or(file.format.as_deref())
            .map(str::parse::<OutputFormat>)
            .transpose()
            .map_err(anyhow::Error::msg)?
            .unwrap_or_default();

        Ok(Self {
            codegen,
            format,
            check: cli.check,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("slack-codegen").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_from_root() {
        let settings = Settings::from_layers(&cli(&["--root", "/app"]), &FileConfig::default())
            .unwrap();
        assert_eq!(settings.codegen, CodegenConfig::from_root("/app"));
        assert_eq!(settings.format, OutputFormat::Pretty);
        assert!(!settings.check);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = FileConfig {
            input: Some(PathBuf::from("vendor/methods.d.ts")),
            format: Some("text".to_string()),
            ..FileConfig::default()
        };

        let settings = Settings::from_layers(&cli(&["--root", "/app"]), &file).unwrap();
        assert_eq!(
            settings.codegen.input_path,
            Path::new("/app/vendor/methods.d.ts")
        );
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig {
            output: Some(PathBuf::from("from-file")),
            format: Some("text".to_string()),
            ..FileConfig::default()
        };

        let settings = Settings::from_layers(
            &cli(&["--root", "/app", "--output", "from-flag", "--format", "json"]),
            &file,
        )
        .unwrap();
        assert_eq!(settings.codegen.output_dir, Path::new("/app/from-flag"));
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_metadata_follows_output_dir() {
        let settings = Settings::from_layers(
            &cli(&["--root", "/app", "--output", "gen"]),
            &FileConfig::default(),
        )
        .unwrap();
        assert_eq!(
            settings.codegen.metadata_path,
            Path::new("/app/gen/_metadata.json")
        );

        let explicit = Settings::from_layers(
            &cli(&["--root", "/app", "--output", "gen", "--metadata", "meta.json"]),
            &FileConfig::default(),
        )
        .unwrap();
        assert_eq!(explicit.codegen.metadata_path, Path::new("/app/meta.json"));
    }

    #[test]
    fn test_invalid_format() {
        let result = Settings::from_layers(&cli(&["--format", "yaml"]), &FileConfig::default());
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_resolve_reads_implicit_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "output = \"generated\"\nformat = \"json\"\n",
        )
        .unwrap();

        let root = dir.path().to_str().unwrap();
        let settings = Settings::resolve(&cli(&["--root", root])).await.unwrap();
        assert_eq!(settings.codegen.output_dir, dir.path().join("generated"));
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[tokio::test]
    async fn test_resolve_without_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();

        let settings = Settings::resolve(&cli(&["--root", root])).await.unwrap();
        assert_eq!(settings.codegen, CodegenConfig::from_root(dir.path()));
    }

    #[tokio::test]
    async fn test_explicit_config_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = Settings::resolve(&cli(&["--config", missing.to_str().unwrap()]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[tokio::test]
    async fn test_relative_config_resolves_against_root() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("ci")).unwrap();
        std::fs::write(dir.path().join("ci/codegen.toml"), "output = \"lib/slack\"\n").unwrap();

        let root = dir.path().to_str().unwrap();
        let settings = Settings::resolve(&cli(&["--root", root, "--config", "ci/codegen.toml"]))
            .await
            .unwrap();
        assert_eq!(settings.codegen.output_dir, dir.path().join("lib/slack"));
    }

    #[tokio::test]
    async fn test_unknown_key_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "outptu = \"typo\"\n").unwrap();

        let err = FileConfig::load(&path).await.unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config file"));
    }
}
