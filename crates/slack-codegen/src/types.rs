//! Render-time artifacts.
//!
//! # Examples
//!
//! ```
//! use slack_codegen::{GeneratedCode, GeneratedFile};
//!
//! let mut code = GeneratedCode::new();
//! code.add_file(GeneratedFile::new("index.ts", "export {}\n"));
//!
//! assert_eq!(code.file_count(), 1);
//! assert_eq!(code.files().next().map(GeneratedFile::path), Some("index.ts"));
//! ```

use serde::{Deserialize, Serialize};

/// Ordered batch of files produced by one rendering pass.
///
/// Service files come first in namespace order; `index.ts` is always last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCode {
    /// Files in write order
    pub files: Vec<GeneratedFile>,
}

impl GeneratedCode {
    /// Creates an empty batch.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Appends a file to the batch.
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Returns the number of files.
    #[inline]
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns an iterator over the files in write order.
    #[inline]
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    /// Looks up a file by name.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|file| file.path == path)
    }
}

impl Default for GeneratedCode {
    fn default() -> Self {
        Self::new()
    }
}

/// A single generated module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// File name relative to the output directory
    pub path: String,
    /// Full file content
    pub content: String,
}

impl GeneratedFile {
    /// Creates a file from a name and its content.
    #[must_use]
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Returns the file name.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the file content.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A rendered method wrapper.
///
/// `var_name` differs from `export_name` only for methods nested below the
/// service's own namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMethod {
    /// Source text declaring the wrapper
    pub implementation: String,
    /// Local identifier inside the generated module
    pub var_name: String,
    /// Key on the returned service object
    pub export_name: String,
}

impl GeneratedMethod {
    /// Returns `true` if the return object can use shorthand for this method.
    #[inline]
    #[must_use]
    pub fn is_shorthand(&self) -> bool {
        self.var_name == self.export_name
    }
}
