//! Parsed method-surface model.
//!
//! The parser produces a tree of [`NamespaceInfo`] values whose leaves are
//! [`MethodInfo`] values. The tree is built once and never mutated; the
//! renderer only reads it.
//!
//! # Examples
//!
//! ```
//! use slack_codegen_core::{MethodInfo, NamespaceInfo, TypeText, count_methods};
//!
//! let chat = NamespaceInfo {
//!     name: "chat".to_string(),
//!     methods: vec![MethodInfo {
//!         name: "postMessage".to_string(),
//!         api_path: "chat.postMessage".to_string(),
//!         args_type: TypeText::new("ChatPostMessageArguments"),
//!         response_type: TypeText::new("ChatPostMessageResponse"),
//!         is_optional_args: false,
//!         description: None,
//!         deprecated: false,
//!     }],
//!     sub_namespaces: vec![],
//! };
//!
//! assert_eq!(count_methods(&[chat]), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque type-expression text (newtype over String).
///
/// Argument and response types are carried through the pipeline exactly as
/// they appear in the declaration. They are never resolved or validated.
///
/// # Examples
///
/// ```
/// use slack_codegen_core::TypeText;
///
/// let ty = TypeText::new("ChatPostMessageArguments");
/// assert_eq!(ty.as_str(), "ChatPostMessageArguments");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeText(String);

impl TypeText {
    /// Wraps a type expression.
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the type expression as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `TypeText` and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TypeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeText {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TypeText {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A single callable API operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodInfo {
    /// Bare identifier as declared in its namespace (e.g. `list`)
    pub name: String,

    /// Dotted path from the root namespace (e.g. `chat.scheduledMessages.list`).
    ///
    /// Computed once during parsing.
    pub api_path: String,

    /// First type argument of the method descriptor
    pub args_type: TypeText,

    /// Second type argument of the method descriptor
    pub response_type: TypeText,

    /// Whether the call may be made without arguments
    pub is_optional_args: bool,

    /// Text of the `@description` tag, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the documentation carries `@deprecated`
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
}

/// A named grouping of methods and nested namespaces.
///
/// Both sequences keep declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceInfo {
    /// Bare identifier (e.g. `chat` or `scheduledMessages`)
    pub name: String,

    /// Methods declared directly in this namespace
    pub methods: Vec<MethodInfo>,

    /// Nested namespaces
    pub sub_namespaces: Vec<NamespaceInfo>,
}

impl NamespaceInfo {
    /// Creates an empty namespace.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            sub_namespaces: Vec::new(),
        }
    }

    /// Returns `true` if the namespace holds no methods and no sub-namespaces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty() && self.sub_namespaces.is_empty()
    }

    /// Total number of methods in this namespace and all descendants.
    #[must_use]
    pub fn method_count(&self) -> usize {
        self.methods.len() + count_methods(&self.sub_namespaces)
    }

    /// Iterates over every method in the subtree, depth-first.
    ///
    /// A namespace's own methods come before those of its children, and
    /// children are visited in declaration order.
    pub fn all_methods(&self) -> Box<dyn Iterator<Item = &MethodInfo> + '_> {
        Box::new(
            self.methods
                .iter()
                .chain(self.sub_namespaces.iter().flat_map(Self::all_methods)),
        )
    }
}

/// Counts every method across a forest of namespaces.
#[must_use]
pub fn count_methods(namespaces: &[NamespaceInfo]) -> usize {
    namespaces.iter().map(NamespaceInfo::method_count).sum()
}
