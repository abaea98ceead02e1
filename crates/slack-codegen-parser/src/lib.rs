//! Slack Web API declaration parsing.
//!
//! Reads the TypeScript declaration of the SDK's `Methods` class and turns
//! its nested namespace objects into a [`NamespaceInfo`] tree that the
//! renderer consumes.
//!
//! # Examples
//!
//! ```
//! use slack_codegen_parser::parse_methods_file;
//!
//! let source = r"
//! export declare class Methods {
//!     readonly auth: {
//!         test: MethodWithOptionalArgument<AuthTestArguments, AuthTestResponse>;
//!     };
//! }
//! ";
//!
//! let namespaces = parse_methods_file(source).unwrap();
//! assert_eq!(namespaces[0].name, "auth");
//! assert!(namespaces[0].methods[0].is_optional_args);
//! ```
//!
//! [`NamespaceInfo`]: slack_codegen_core::NamespaceInfo

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod docs;
mod parser;

pub use docs::{DocInfo, extract_doc_info};
pub use parser::{METHODS_CLASS_NAME, SKIPPED_MEMBERS, parse_methods_file};
