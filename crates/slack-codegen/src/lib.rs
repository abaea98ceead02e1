//! Effect service generation for the Slack Web API.
//!
//! Turns the `Methods` declaration shipped with `@slack/web-api` into one
//! `Effect.Service` module per top-level namespace plus an `index.ts` barrel,
//! and records a content hash so stale output can be detected later.
//!
//! # Architecture
//!
//! - [`naming`] - casing, reserved words, variable name synthesis
//! - [`checksum`] - content hash of the declaration
//! - [`template_engine`] - Handlebars templates for the emitted TypeScript
//! - [`render`] - deterministic rendering of a namespace tree into files
//! - [`orchestrator`] - `generate` and `check` over the filesystem
//!
//! # Examples
//!
//! ```
//! use slack_codegen::render::ServiceGenerator;
//! use slack_codegen_parser::parse_methods_file;
//!
//! let source = r"
//! export declare class Methods {
//!     readonly chat: {
//!         postMessage: MethodWithRequiredArgument<ChatPostMessageArguments, ChatPostMessageResponse>;
//!     };
//! }
//! ";
//!
//! let namespaces = parse_methods_file(source).unwrap();
//! let code = ServiceGenerator::new()?.generate_all_files(&namespaces)?;
//!
//! assert_eq!(code.file_count(), 2);
//! assert_eq!(code.files[0].path, "ChatService.ts");
//! assert_eq!(code.files[1].path, "index.ts");
//! # Ok::<(), slack_codegen_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod checksum;
pub mod naming;
pub mod orchestrator;
pub mod render;
pub mod template_engine;
pub mod types;

pub use checksum::compute_hash;
pub use render::ServiceGenerator;
pub use orchestrator::{CheckReport, GenerateReport, check, generate};
pub use types::{GeneratedCode, GeneratedFile, GeneratedMethod};
