//! Extraction of the namespace tree from the `Methods` declaration.
//!
//! The declaration is parsed with tree-sitter's TypeScript grammar. The first
//! class named `Methods` anywhere in the file is the root; each of its members
//! whose type is an object literal becomes a top-level namespace. Inside a
//! namespace, properties typed `MethodWith{Required,Optional}Argument<A, R>`
//! become methods and properties typed as object literals recurse.

use crate::docs::extract_doc_info;
use slack_codegen_core::{Error, MethodInfo, NamespaceInfo, Result, TypeText};
use tracing::{debug, trace};
use tree_sitter::{Node, Parser, Tree};

/// Name of the class holding the method surface.
pub const METHODS_CLASS_NAME: &str = "Methods";

/// Top-level members that never become namespaces.
pub const SKIPPED_MEMBERS: [&str; 2] = ["apiCall", "filesUploadV2"];

const REQUIRED_ARGUMENT_MARKER: &str = "MethodWithRequiredArgument";
const OPTIONAL_ARGUMENT_MARKER: &str = "MethodWithOptionalArgument";

const CLASS_KINDS: [&str; 3] = ["class_declaration", "abstract_class_declaration", "class"];

/// Parses a declaration file into its top-level namespaces.
///
/// Namespaces are returned in source order. Top-level namespaces are kept
/// even when they hold nothing; empty nested namespaces are dropped.
///
/// # Errors
///
/// Returns [`Error::MethodsClassNotFound`] if the source contains no class
/// named `Methods`, or if the TypeScript grammar cannot be loaded.
///
/// # Examples
///
/// ```
/// use slack_codegen_parser::parse_methods_file;
///
/// let err = parse_methods_file("export declare class Other {}").unwrap_err();
/// assert!(err.is_parse_error());
/// ```
pub fn parse_methods_file(source: &str) -> Result<Vec<NamespaceInfo>> {
    let tree = parse_tree(source)?;

    let class = find_class(tree.root_node(), source, METHODS_CLASS_NAME).ok_or_else(|| {
        Error::MethodsClassNotFound {
            message: format!(
                "no class named `{METHODS_CLASS_NAME}` in {} bytes of input",
                source.len()
            ),
        }
    })?;

    let Some(body) = class.child_by_field_name("body") else {
        return Ok(Vec::new());
    };

    let mut namespaces = Vec::new();
    for member in named_children(body) {
        if member.kind() != "public_field_definition" {
            continue;
        }
        let Some(name) = member_name(member, source) else {
            continue;
        };
        if SKIPPED_MEMBERS.contains(&name) {
            trace!(member = name, "skipping non-namespace member");
            continue;
        }

        match annotated_type(member) {
            Some(literal) if literal.kind() == "object_type" => {
                namespaces.push(parse_namespace(literal, name, name, source));
            }
            _ => trace!(member = name, "member is not a namespace object"),
        }
    }

    debug!(
        namespaces = namespaces.len(),
        "parsed {METHODS_CLASS_NAME} declaration"
    );

    Ok(namespaces)
}

fn parse_tree(source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
        .map_err(|e| Error::MethodsClassNotFound {
            message: format!("TypeScript grammar could not be loaded: {e}"),
        })?;

    parser
        .parse(source, None)
        .ok_or_else(|| Error::MethodsClassNotFound {
            message: "declaration produced no syntax tree".to_string(),
        })
}

/// Depth-first search for the first class declaration with `name`.
fn find_class<'tree>(node: Node<'tree>, source: &str, name: &str) -> Option<Node<'tree>> {
    if CLASS_KINDS.contains(&node.kind())
        && node
            .child_by_field_name("name")
            .is_some_and(|ident| text(ident, source) == name)
    {
        return Some(node);
    }

    named_children(node)
        .into_iter()
        .find_map(|child| find_class(child, source, name))
}

/// Builds a namespace from an object type literal.
///
/// `path` is the dotted API path of the literal itself, e.g. `admin.apps`.
fn parse_namespace(literal: Node<'_>, name: &str, path: &str, source: &str) -> NamespaceInfo {
    let mut namespace = NamespaceInfo::new(name);

    for member in named_children(literal) {
        if member.kind() != "property_signature" {
            continue;
        }
        let Some(property) = member_name(member, source) else {
            continue;
        };
        let Some(ty) = annotated_type(member) else {
            continue;
        };

        match ty.kind() {
            "generic_type" => {
                if let Some(method) = parse_method(member, ty, property, path, source) {
                    namespace.methods.push(method);
                }
            }
            "object_type" => {
                let nested_path = format!("{path}.{property}");
                let nested = parse_namespace(ty, property, &nested_path, source);
                if nested.is_empty() {
                    trace!(path = %nested_path, "dropping empty nested namespace");
                } else {
                    namespace.sub_namespaces.push(nested);
                }
            }
            _ => {}
        }
    }

    namespace
}

fn parse_method(
    member: Node<'_>,
    generic: Node<'_>,
    name: &str,
    path: &str,
    source: &str,
) -> Option<MethodInfo> {
    let marker = text(generic.child_by_field_name("name")?, source);
    let is_optional_args = if marker.starts_with(OPTIONAL_ARGUMENT_MARKER) {
        true
    } else if marker.starts_with(REQUIRED_ARGUMENT_MARKER) {
        false
    } else {
        return None;
    };

    let arguments: Vec<Node<'_>> = named_children(generic.child_by_field_name("type_arguments")?)
        .into_iter()
        .filter(|arg| !arg.is_extra() && arg.kind() != "comment")
        .collect();
    let [args_type, response_type] = arguments.as_slice() else {
        trace!(method = name, count = arguments.len(), "unexpected type argument count");
        return None;
    };

    let docs = extract_doc_info(with_leading_comments(member, source));

    Some(MethodInfo {
        name: name.to_string(),
        api_path: format!("{path}.{name}"),
        args_type: TypeText::new(text(*args_type, source)),
        response_type: TypeText::new(text(*response_type, source)),
        is_optional_args,
        description: docs.description,
        deprecated: docs.deprecated,
    })
}

fn member_name<'src>(member: Node<'_>, source: &'src str) -> Option<&'src str> {
    member
        .child_by_field_name("name")
        .map(|name| text(name, source))
}

/// Returns the type node inside a member's `: Type` annotation.
fn annotated_type(member: Node<'_>) -> Option<Node<'_>> {
    let annotation = member.child_by_field_name("type")?;
    named_children(annotation)
        .into_iter()
        .find(|child| !child.is_extra() && child.kind() != "comment")
}

/// Source text of a node extended backwards over its adjacent comments.
fn with_leading_comments<'src>(node: Node<'_>, source: &'src str) -> &'src str {
    let mut start = node.start_byte();
    let mut previous = node.prev_sibling();
    while let Some(sibling) = previous {
        if sibling.kind() != "comment" {
            break;
        }
        start = sibling.start_byte();
        previous = sibling.prev_sibling();
    }

    source.get(start..node.end_byte()).unwrap_or_default()
}

fn text<'src>(node: Node<'_>, source: &'src str) -> &'src str {
    source.get(node.byte_range()).unwrap_or_default()
}

fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}
