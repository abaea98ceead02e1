//! Core types, configuration, and errors for the Slack service generator.
//!
//! This crate provides the foundational types shared by the parser, the
//! renderer, and the command-line front end.
//!
//! # Architecture
//!
//! The core consists of:
//! - The parsed method-surface model (`NamespaceInfo`, `MethodInfo`, `TypeText`)
//! - The persisted generation record (`Metadata`)
//! - Pure-data run configuration (`CodegenConfig`)
//! - A closed error taxonomy covering every pipeline failure
//! - CLI exit codes and output formats

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod metadata;
mod types;

pub mod cli;

pub use config::{
    CodegenConfig, DEFAULT_OUTPUT_DIR, METADATA_FILE_NAME, METHODS_DECLARATION_FILE,
    SLACK_WEB_API_PACKAGE_DIR,
};
pub use error::{Error, Result};
pub use metadata::Metadata;
pub use types::{MethodInfo, NamespaceInfo, TypeText, count_methods};
