//! Go syntax tree and printer used by `gosynth`.
//!
//! # Module Organization
//!
//! - [`ast`] - Syntax node types (files, declarations, statements, expressions)
//! - [`imports`] - Canonical import ordering
//! - [`printer`] - The [`Printer`] trait and the gofmt-style [`GoPrinter`]
//! - [`config`] - [`PrintConfig`] and [`Indent`]

pub mod ast;
mod code_builder;
pub mod config;
pub mod imports;
pub mod printer;

pub use code_builder::CodeBuilder;
pub use config::{Indent, PrintConfig};
pub use imports::{sort_import_specs, sort_imports};
pub use printer::{GoPrinter, PrintError, Printer};
