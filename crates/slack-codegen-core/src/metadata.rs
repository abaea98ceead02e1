//! Persisted generation record.
//!
//! Written after every successful generation and consulted by the
//! staleness check. Serialized as JSON with exactly four camelCase keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of the last generation run.
///
/// # Examples
///
/// ```
/// use slack_codegen_core::Metadata;
///
/// let metadata = Metadata::new("7.9.1", "ab".repeat(32), 270);
/// let json = serde_json::to_value(&metadata).unwrap();
/// assert_eq!(json["slackWebApiVersion"], "7.9.1");
/// assert_eq!(json["methodCount"], 270);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// When the output was generated
    pub generated_at: DateTime<Utc>,

    /// Version of the wrapped library the declaration came from
    pub slack_web_api_version: String,

    /// Content hash of the declaration at generation time
    pub methods_file_hash: String,

    /// Total number of methods across all namespaces
    pub method_count: usize,
}

impl Metadata {
    /// Creates a record stamped with the current time.
    #[must_use]
    pub fn new(
        slack_web_api_version: impl Into<String>,
        methods_file_hash: impl Into<String>,
        method_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            slack_web_api_version: slack_web_api_version.into(),
            methods_file_hash: methods_file_hash.into(),
            method_count,
        }
    }
}
