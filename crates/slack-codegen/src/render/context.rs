//! Template contexts.
//!
//! Everything that needs ordering, de-duplication or recursion (the import
//! block, the implementation list, the return object) is computed before
//! it reaches a template.

use serde::{Deserialize, Serialize};

/// Context for the per-method wrapper template.
///
/// # Examples
///
/// ```
/// use slack_codegen::render::MethodContext;
///
/// let context = MethodContext {
///     var_name: "postMessage".to_string(),
///     optional_args: false,
///     args_type: "ChatPostMessageArguments".to_string(),
///     client_path: "client.chat.postMessage".to_string(),
///     span_name: "ChatService.postMessage".to_string(),
///     span_attribute: "slack.method".to_string(),
///     api_path: "chat.postMessage".to_string(),
///     description: None,
///     deprecated: false,
/// };
///
/// assert_eq!(context.client_path, "client.chat.postMessage");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodContext {
    /// Local identifier the wrapper is declared as
    pub var_name: String,
    /// Whether the argument parameter is optional
    pub optional_args: bool,
    /// Argument type, verbatim
    pub args_type: String,
    /// Expression reaching the SDK call
    pub client_path: String,
    /// Fully qualified span name
    pub span_name: String,
    /// Span attribute key carrying the API path
    pub span_attribute: String,
    /// Dotted API path
    pub api_path: String,
    /// Description with comment terminators escaped
    pub description: Option<String>,
    /// Whether to emit `@deprecated`
    pub deprecated: bool,
}

/// Context for a service module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceContext {
    /// PascalCase service class name
    pub service_name: String,
    /// Key the service registers under
    pub service_key: String,
    /// Identifier bound to the SDK client
    pub client_root: String,
    /// Sorted, de-duplicated type names for the `import type` block
    pub type_imports: Vec<String>,
    /// Package the types are imported from
    pub types_package: String,
    /// Rendered wrappers, depth-first
    pub implementations: Vec<String>,
    /// Object literal returned by the service
    pub return_object: String,
}

/// Context for the index barrel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexContext {
    /// Service class names in namespace order
    pub services: Vec<String>,
}
