//! CLI-specific types.
//!
//! Strong types for the command-line surface: how reports are printed and
//! which status the process exits with.
//!
//! # Examples
//!
//! ```
//! use slack_codegen_core::cli::{ExitCode, OutputFormat};
//!
//! let format: OutputFormat = "json".parse().unwrap();
//! assert_eq!(format.as_str(), "json");
//!
//! assert!(ExitCode::SUCCESS.is_success());
//! assert_eq!(ExitCode::OUT_OF_DATE.as_i32(), 3);
//! ```

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// CLI output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// JSON output for machine parsing
    Json,
    /// Compact single-line output for scripts
    Text,
    /// Colored output for human reading
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Returns the string representation of the format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            "pretty" => Ok(Self::Pretty),
            _ => Err(format!(
                "invalid output format: '{s}' (expected: json, text, or pretty)"
            )),
        }
    }
}

/// Process exit code with semantic meaning.
///
/// Success is 0; every failure is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Successful run (exit code 0).
    pub const SUCCESS: Self = Self(0);

    /// General failure, including write errors (exit code 1).
    pub const ERROR: Self = Self(1);

    /// A required input is missing or malformed (exit code 2).
    pub const INVALID_INPUT: Self = Self(2);

    /// Generated code no longer matches the declaration (exit code 3).
    pub const OUT_OF_DATE: Self = Self(3);

    /// Creates an exit code from an integer value.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        Self(code)
    }

    /// Returns the exit code as an integer.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Checks if the exit code represents success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::OutOfDate { .. } => Self::OUT_OF_DATE,
            Error::InputNotFound { .. }
            | Error::InputUnreadable { .. }
            | Error::ManifestNotFound { .. }
            | Error::ManifestUnreadable { .. }
            | Error::MethodsClassNotFound { .. }
            | Error::MetadataNotFound { .. }
            | Error::MetadataUnreadable { .. } => Self::INVALID_INPUT,
            Error::OutputDirectoryUncreatable { .. }
            | Error::WriteFailed { .. }
            | Error::TemplateFailed { .. } => Self::ERROR,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
