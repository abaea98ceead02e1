//! Slack codegen CLI library.
//!
//! Exposes argument parsing, settings resolution, commands and formatters
//! so they can be tested without spawning the binary.

#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod formatters;

pub use cli::Cli;
pub use config::{FileConfig, Settings};
