//! Output formatters for CLI reports.
//!
//! Provides consistent formatting for JSON, text, and pretty output modes.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use slack_codegen_core::cli::OutputFormat;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use slack_codegen_cli::formatters::format_output;
/// use slack_codegen_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     namespaces: usize,
///     version: String,
/// }
///
/// let summary = Summary {
///     namespaces: 42,
///     version: "7.9.1".to_string(),
/// };
///
/// let output = format_output(&summary, OutputFormat::Json)?;
/// assert!(output.contains("\"namespaces\""));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as pretty-printed JSON.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Format data as compact JSON.
    pub fn format_compact<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, json};

    /// Format data as a single line, suitable for piping.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        json::format_compact(data)
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use serde_json::Value;

    /// Format data as colorized `key: value` lines.
    ///
    /// Nested objects are indented; arrays list one item per line.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        format_value(&value, 0, &mut out);
        Ok(out.trim_end().to_string())
    }

    fn format_value(value: &Value, indent: usize, out: &mut String) {
        let pad = "  ".repeat(indent);

        match value {
            Value::Object(obj) => {
                for (key, val) in obj {
                    match val {
                        Value::Object(_) | Value::Array(_) => {
                            out.push_str(&format!("{pad}{}:\n", key.blue().bold()));
                            format_value(val, indent + 1, out);
                        }
                        _ => {
                            out.push_str(&format!("{pad}{}: {}\n", key.blue().bold(), scalar(val)));
                        }
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    match item {
                        Value::Object(_) | Value::Array(_) => format_value(item, indent + 1, out),
                        _ => out.push_str(&format!("{pad}- {}\n", scalar(item))),
                    }
                }
            }
            _ => {
                out.push_str(&format!("{pad}{}\n", scalar(value)));
            }
        }
    }

    fn scalar(value: &Value) -> String {
        match value {
            Value::Null => "null".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) => s.green().to_string(),
            Value::Array(_) | Value::Object(_) => value.to_string(),
        }
    }
}
