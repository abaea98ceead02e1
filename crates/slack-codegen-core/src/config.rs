//! Run configuration for the generator.
//!
//! [`CodegenConfig`] is plain data: every path the pipeline touches,
//! resolved up front. Defaults are laid out relative to a project root.
//!
//! # Examples
//!
//! ```
//! use slack_codegen_core::CodegenConfig;
//! use std::path::Path;
//!
//! let config = CodegenConfig::from_root("/work/app");
//! assert_eq!(
//!     config.input_path,
//!     Path::new("/work/app/node_modules/@slack/web-api/dist/methods.d.ts")
//! );
//!
//! let custom = CodegenConfig::from_root("/work/app").with_output_dir("/tmp/out");
//! assert_eq!(custom.metadata_path, Path::new("/work/app/src/generated/_metadata.json"));
//! ```

use std::path::{Path, PathBuf};

/// Location of the wrapped library inside a project, relative to the root.
pub const SLACK_WEB_API_PACKAGE_DIR: &str = "node_modules/@slack/web-api";

/// Declaration file relative to the package directory.
pub const METHODS_DECLARATION_FILE: &str = "dist/methods.d.ts";

/// Default output directory relative to the root.
pub const DEFAULT_OUTPUT_DIR: &str = "src/generated";

/// File name of the metadata record.
pub const METADATA_FILE_NAME: &str = "_metadata.json";

/// Paths used by a generation or check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Project root; relative defaults are resolved against it
    pub root_dir: PathBuf,

    /// TypeScript declaration containing the `Methods` class
    pub input_path: PathBuf,

    /// `package.json` of the wrapped library
    pub manifest_path: PathBuf,

    /// Directory receiving the generated service modules
    pub output_dir: PathBuf,

    /// Metadata record written after generation
    pub metadata_path: PathBuf,
}

impl CodegenConfig {
    /// Builds the default layout for a project root.
    #[must_use]
    pub fn from_root(root_dir: impl AsRef<Path>) -> Self {
        let root_dir = root_dir.as_ref().to_path_buf();
        let package_dir = root_dir.join(SLACK_WEB_API_PACKAGE_DIR);
        let output_dir = root_dir.join(DEFAULT_OUTPUT_DIR);

        Self {
            input_path: package_dir.join(METHODS_DECLARATION_FILE),
            manifest_path: package_dir.join("package.json"),
            metadata_path: output_dir.join(METADATA_FILE_NAME),
            output_dir,
            root_dir,
        }
    }

    /// Overrides the declaration path. Relative paths resolve against the root.
    #[must_use]
    pub fn with_input_path(mut self, path: impl AsRef<Path>) -> Self {
        self.input_path = self.resolve(path);
        self
    }

    /// Overrides the manifest path. Relative paths resolve against the root.
    #[must_use]
    pub fn with_manifest_path(mut self, path: impl AsRef<Path>) -> Self {
        self.manifest_path = self.resolve(path);
        self
    }

    /// Overrides the output directory. Relative paths resolve against the root.
    ///
    /// The metadata path is left untouched.
    #[must_use]
    pub fn with_output_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.output_dir = self.resolve(path);
        self
    }

    /// Overrides the metadata path. Relative paths resolve against the root.
    #[must_use]
    pub fn with_metadata_path(mut self, path: impl AsRef<Path>) -> Self {
        self.metadata_path = self.resolve(path);
        self
    }

    fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root_dir.join(path)
        }
    }
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self::from_root(".")
    }
}
