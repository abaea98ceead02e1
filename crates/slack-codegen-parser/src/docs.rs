//! `JSDoc` mining for method members.
//!
//! Only two facts are pulled out of a member's documentation:
//! - `@description` - free text up to the next tag or the end of the comment
//! - `@deprecated` - presence only
//!
//! # `JSDoc` Format
//!
//! ```typescript
//! /**
//!  * @description Sends a message to a channel.
//!  * @see {@link https://api.slack.com/methods/chat.postMessage `chat.postMessage` API reference}.
//!  */
//! postMessage: MethodWithRequiredArgument<ChatPostMessageArguments, ChatPostMessageResponse>;
//! ```

use regex::Regex;
use std::sync::LazyLock;

// Pre-compiled regexes (compiled once, reused)
static DOC_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*\*[\s\S]*?\*/").expect("valid regex"));
static DESCRIPTION_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@description\b").expect("valid regex"));
// `{@link ...}` is inline, so a tag must follow whitespace
static NEXT_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s@\w").expect("valid regex"));
static LINE_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\*+").expect("valid regex"));
static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Documentation facts extracted from a member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocInfo {
    /// Normalized `@description` payload
    pub description: Option<String>,

    /// Whether `@deprecated` appears in the comment
    pub deprecated: bool,
}

/// Extracts description and deprecation from a member's source text.
///
/// `text` is the member including its leading comments. The first `/** */`
/// block is inspected; other comments are ignored.
///
/// # Examples
///
/// ```
/// use slack_codegen_parser::extract_doc_info;
///
/// let text = r"/**
///  * @description Lists scheduled messages.
///  * @deprecated Use something else.
///  */
/// list: MethodWithOptionalArgument<A, B>";
///
/// let info = extract_doc_info(text);
/// assert_eq!(info.description.as_deref(), Some("Lists scheduled messages."));
/// assert!(info.deprecated);
/// ```
#[must_use]
pub fn extract_doc_info(text: &str) -> DocInfo {
    let Some(block) = DOC_BLOCK_REGEX.find(text).map(|m| m.as_str()) else {
        return DocInfo::default();
    };

    let inner = block.trim_start_matches("/**").trim_end_matches("*/");

    let description = DESCRIPTION_TAG_REGEX.find(inner).and_then(|tag| {
        let rest = &inner[tag.end()..];
        let end = NEXT_TAG_REGEX.find(rest).map_or(rest.len(), |m| m.start());
        normalize(&rest[..end])
    });

    DocInfo {
        description,
        deprecated: block.contains("@deprecated"),
    }
}

/// Folds comment-line asterisks and whitespace runs into single spaces.
fn normalize(raw: &str) -> Option<String> {
    let without_stars = LINE_PREFIX_REGEX.replace_all(raw, " ");
    let collapsed = WHITESPACE_REGEX.replace_all(&without_stars, " ");
    let trimmed = collapsed.trim();

    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
