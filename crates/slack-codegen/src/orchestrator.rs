//! Filesystem entry points: `generate` and `check`.
//!
//! Every failure surfaces as a [`slack_codegen_core::Error`] variant carrying
//! the path involved.
//!
//! # Examples
//!
//! ```no_run
//! use slack_codegen::{check, generate};
//! use slack_codegen_core::CodegenConfig;
//!
//! # async fn example() -> slack_codegen_core::Result<()> {
//! let config = CodegenConfig::from_root(".");
//!
//! let report = generate(&config).await?;
//! println!("{} namespaces, {} methods", report.namespace_count, report.method_count);
//!
//! check(&config).await?;
//! # Ok(())
//! # }
//! ```

use crate::checksum::compute_hash;
use crate::render::ServiceGenerator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slack_codegen_core::{CodegenConfig, Error, Metadata, Result, count_methods};
use slack_codegen_parser::parse_methods_file;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Outcome of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    /// Number of top-level namespaces (service files)
    pub namespace_count: usize,
    /// Total number of methods
    pub method_count: usize,
    /// Version of `@slack/web-api` the declaration came from
    pub slack_web_api_version: String,
    /// Hash of the declaration stored in the metadata
    pub methods_file_hash: String,
    /// Directory the files were written to
    pub output_dir: PathBuf,
    /// Every generated file, in write order
    pub files: Vec<PathBuf>,
    /// Where the metadata record was written
    pub metadata_path: PathBuf,
}

/// Outcome of a successful staleness check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Hash shared by the declaration and the metadata record
    pub methods_file_hash: String,
    /// Version recorded at generation time
    pub slack_web_api_version: String,
    /// When the output was generated
    pub generated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct PackageManifest {
    version: String,
}

/// Regenerates every service module and the metadata record.
///
/// Files are written one after another; the first failed write aborts the
/// run and the metadata record is only written once every file succeeded.
///
/// # Errors
///
/// Returns the manifest, input, parse, template, directory or write error
/// that stopped the run.
pub async fn generate(config: &CodegenConfig) -> Result<GenerateReport> {
    let version = read_manifest_version(&config.manifest_path).await?;
    let source = read_input(&config.input_path).await?;

    let namespaces = parse_methods_file(&source)?;
    let method_count = count_methods(&namespaces);
    let hash = compute_hash(&source);
    info!(
        namespaces = namespaces.len(),
        methods = method_count,
        version = %version,
        "parsed methods declaration"
    );

    let code = ServiceGenerator::new()?.generate_all_files(&namespaces)?;

    fs::create_dir_all(&config.output_dir)
        .await
        .map_err(|source| Error::OutputDirectoryUncreatable {
            path: config.output_dir.clone(),
            source,
        })?;

    let mut files = Vec::with_capacity(code.file_count());
    for file in code.files() {
        let path = config.output_dir.join(file.path());
        fs::write(&path, file.content())
            .await
            .map_err(|source| Error::WriteFailed {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), bytes = file.content().len(), "wrote file");
        files.push(path);
    }

    let metadata = Metadata::new(&version, &hash, method_count);
    write_metadata(&config.metadata_path, &metadata).await?;
    info!(
        files = files.len(),
        output = %config.output_dir.display(),
        "generation complete"
    );

    Ok(GenerateReport {
        namespace_count: namespaces.len(),
        method_count,
        slack_web_api_version: version,
        methods_file_hash: hash,
        output_dir: config.output_dir.clone(),
        files,
        metadata_path: config.metadata_path.clone(),
    })
}

/// Verifies that the generated output matches the current declaration.
///
/// Only hashes the declaration; nothing is parsed or written.
///
/// # Errors
///
/// Returns an input or metadata error if either file cannot be read, or
/// [`Error::OutOfDate`] with both hashes if they differ.
pub async fn check(config: &CodegenConfig) -> Result<CheckReport> {
    let source = read_input(&config.input_path).await?;
    let current_hash = compute_hash(&source);
    let metadata = read_metadata(&config.metadata_path).await?;

    verify_hash(&metadata, &current_hash)?;
    info!(hash = %current_hash, "generated code is up to date");

    Ok(CheckReport {
        methods_file_hash: current_hash,
        slack_web_api_version: metadata.slack_web_api_version,
        generated_at: metadata.generated_at,
    })
}

/// Compares the stored hash with the current one.
///
/// # Errors
///
/// Returns [`Error::OutOfDate`] carrying both hashes on mismatch.
pub fn verify_hash(metadata: &Metadata, current_hash: &str) -> Result<()> {
    if metadata.methods_file_hash == current_hash {
        return Ok(());
    }

    Err(Error::OutOfDate {
        stored_hash: metadata.methods_file_hash.clone(),
        current_hash: current_hash.to_string(),
    })
}

async fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).await.map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            Error::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::InputUnreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

async fn read_manifest_version(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).await.map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            Error::ManifestNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::ManifestUnreadable {
                path: path.to_path_buf(),
                source: Box::new(source),
            }
        }
    })?;

    let manifest: PackageManifest =
        serde_json::from_str(&raw).map_err(|source| Error::ManifestUnreadable {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;

    Ok(manifest.version)
}

async fn read_metadata(path: &Path) -> Result<Metadata> {
    let raw = fs::read_to_string(path).await.map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            Error::MetadataNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::MetadataUnreadable {
                path: path.to_path_buf(),
                source: Box::new(source),
            }
        }
    })?;

    serde_json::from_str(&raw).map_err(|source| Error::MetadataUnreadable {
        path: path.to_path_buf(),
        source: Box::new(source),
    })
}

async fn write_metadata(path: &Path, metadata: &Metadata) -> Result<()> {
    let mut json = serde_json::to_string_pretty(metadata).map_err(|e| Error::WriteFailed {
        path: path.to_path_buf(),
        source: io::Error::other(e),
    })?;
    json.push('\n');

    fs::write(path, json)
        .await
        .map_err(|source| Error::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), "wrote metadata");

    Ok(())
}
