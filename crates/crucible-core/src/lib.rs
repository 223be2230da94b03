//! Core engine for Crucible, an isolated snippet transpilation service.
//!
//! Crucible turns small sources written in browser-adjacent dialects
//! (markdown, templates, SCSS, JavaScript) into browser-native HTML, CSS
//! and JavaScript. This crate provides:
//! - Registry tables mapping extensions to MIME types, canonical
//!   languages and output kinds
//! - Language compilers behind a single `Compiler` trait
//! - The IPC frame protocol between dispatcher and worker
//! - The process-isolated dispatcher
//!
//! Two entry points, two failure policies:
//! - [`Language::compile`] runs a compiler in-process and returns its
//!   rejection on malformed input.
//! - [`Dispatcher::run`] runs the same compiler in a killable worker
//!   process with a hard deadline, and always resolves with a string —
//!   failures fold into empty or partial output.

pub mod dispatch;
pub mod error;
pub mod ipc;
pub mod language;
pub mod registry;

pub use dispatch::{DispatchOutcome, Dispatcher, Disposition};
pub use error::{Error, Result};
pub use language::{Compiler, Language};
pub use registry::{OutputKind, canonical_language, mime_for_extension, output_kind};
