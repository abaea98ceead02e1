//! Identifier helpers for generated TypeScript.
//!
//! The same casing function is used for service names, nested-path prefixes
//! and index entries, so all three always agree.

/// Identifiers that cannot be used verbatim as exposed method names.
pub const RESERVED_WORDS: [&str; 7] = [
    "delete", "import", "export", "default", "class", "function", "return",
];

/// Converts a dotted, snake or kebab name to `PascalCase`.
///
/// Splits on `.`, `_` and `-`, upper-cases the first character of each
/// segment and concatenates the segments.
///
/// # Examples
///
/// ```
/// use slack_codegen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("chat.postMessage"), "ChatPostMessage");
/// assert_eq!(to_pascal_case("admin.apps_approved.list"), "AdminAppsApprovedList");
/// assert_eq!(to_pascal_case("a.b.c"), "ABC");
/// ```
#[must_use]
pub fn to_pascal_case(input: &str) -> String {
    input.split(['.', '_', '-']).map(capitalize).collect()
}

/// Upper-cases the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Returns `true` if `name` is one of [`RESERVED_WORDS`].
#[inline]
#[must_use]
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Appends `_` to reserved words.
///
/// # Examples
///
/// ```
/// use slack_codegen::naming::safe_method_name;
///
/// assert_eq!(safe_method_name("delete"), "delete_");
/// assert_eq!(safe_method_name("list"), "list");
/// ```
#[must_use]
pub fn safe_method_name(name: &str) -> String {
    if is_reserved_word(name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}

/// Local variable name for a method inside a generated service.
///
/// `ancestors` are the namespaces between the service's own namespace and the
/// method. Methods directly on the service keep their safe name; nested ones
/// are prefixed with the `PascalCase` ancestor path.
///
/// # Examples
///
/// ```
/// use slack_codegen::naming::unique_method_var_name;
///
/// assert_eq!(unique_method_var_name(&[], "delete"), "delete_");
/// assert_eq!(unique_method_var_name(&["apps", "approved"], "list"), "AppsApprovedList");
/// assert_eq!(unique_method_var_name(&["permissions"], "delete"), "PermissionsDelete_");
/// ```
#[must_use]
pub fn unique_method_var_name(ancestors: &[&str], name: &str) -> String {
    let safe = safe_method_name(name);
    if ancestors.is_empty() {
        return safe;
    }

    to_pascal_case(&ancestors.join(".")) + &capitalize(&safe)
}

/// Class name of the service generated for a top-level namespace.
///
/// # Examples
///
/// ```
/// use slack_codegen::naming::service_name;
///
/// assert_eq!(service_name("chat"), "ChatService");
/// ```
#[must_use]
pub fn service_name(namespace: &str) -> String {
    format!("{}Service", to_pascal_case(namespace))
}
