//! Error types for the Slack service generator.
//!
//! Every failure the pipeline can produce is one of the variants below. Each
//! variant carries enough context (a path, an underlying cause, or both
//! hashes) to diagnose the problem without re-running.
//!
//! # Examples
//!
//! ```
//! use slack_codegen_core::{Error, Result};
//!
//! fn ensure_fresh(stored: &str, current: &str) -> Result<()> {
//!     if stored != current {
//!         return Err(Error::OutOfDate {
//!             stored_hash: stored.to_string(),
//!             current_hash: current.to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = ensure_fresh("abc", "def").unwrap_err();
//! assert!(err.is_out_of_date());
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the generator.
///
/// The set is closed: parsing, rendering, and orchestration never surface
/// anything outside of it.
#[derive(Error, Debug)]
pub enum Error {
    /// The method declaration file does not exist.
    #[error("methods declaration not found: {}", path.display())]
    InputNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The method declaration file exists but could not be read.
    #[error("failed to read methods declaration {}", path.display())]
    InputUnreadable {
        /// Path of the declaration file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The wrapped library's package manifest does not exist.
    #[error("package manifest not found: {}", path.display())]
    ManifestNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The package manifest could not be read or carries no version.
    #[error("failed to read package manifest {}", path.display())]
    ManifestUnreadable {
        /// Path of the manifest
        path: PathBuf,
        /// Underlying cause (I/O, JSON, or missing field)
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The output directory could not be created.
    #[error("failed to create output directory {}", path.display())]
    OutputDirectoryUncreatable {
        /// Directory that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A generated file or the metadata record could not be written.
    #[error("failed to write {}", path.display())]
    WriteFailed {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The declaration contains no class named `Methods`.
    #[error("Methods class not found: {message}")]
    MethodsClassNotFound {
        /// Diagnostic detail
        message: String,
    },

    /// A built-in output template failed to register or render.
    #[error("template error: {message}")]
    TemplateFailed {
        /// Diagnostic detail
        message: String,
        /// Underlying template engine error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No metadata record exists from a previous generation.
    #[error("generation metadata not found: {}", path.display())]
    MetadataNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The metadata record exists but could not be read or decoded.
    #[error("failed to read generation metadata {}", path.display())]
    MetadataUnreadable {
        /// Path of the metadata record
        path: PathBuf,
        /// Underlying cause (I/O or JSON)
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The declaration changed since the last generation.
    #[error("generated code is out of date (stored hash: {stored_hash}, current hash: {current_hash})")]
    OutOfDate {
        /// Hash recorded in the metadata
        stored_hash: String,
        /// Hash of the declaration as it is now
        current_hash: String,
    },
}

impl Error {
    /// Returns `true` if a required input (declaration, manifest, or
    /// metadata) does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use slack_codegen_core::Error;
    ///
    /// let err = Error::InputNotFound { path: "methods.d.ts".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::InputNotFound { .. }
                | Self::ManifestNotFound { .. }
                | Self::MetadataNotFound { .. }
        )
    }

    /// Returns `true` if writing the generated output failed.
    #[must_use]
    pub const fn is_write_error(&self) -> bool {
        matches!(
            self,
            Self::OutputDirectoryUncreatable { .. } | Self::WriteFailed { .. }
        )
    }

    /// Returns `true` if the declaration lacks the `Methods` class.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::MethodsClassNotFound { .. })
    }

    /// Returns `true` if a built-in template could not be used.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateFailed { .. })
    }

    /// Returns `true` if this is a staleness failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use slack_codegen_core::Error;
    ///
    /// let err = Error::OutOfDate {
    ///     stored_hash: "a".repeat(64),
    ///     current_hash: "b".repeat(64),
    /// };
    /// assert!(err.is_out_of_date());
    /// assert!(!err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_out_of_date(&self) -> bool {
        matches!(self, Self::OutOfDate { .. })
    }
}

/// Result type alias used throughout the generator.
pub type Result<T> = std::result::Result<T, Error>;
