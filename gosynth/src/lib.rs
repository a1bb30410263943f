//! Fluent builders for synthesizing Go source files.
//!
//! Calling code assembles literals, expressions and statements bottom-up,
//! adds declarations and imports to a [`File`], groups files in a
//! [`Package`] and finally writes every file through a
//! [`Printer`](gosynth_syntax::Printer).
//!
//! # Module Organization
//!
//! - [`expr`] - Expression roles ([`ValueExpr`], [`Assignable`], [`Literal`])
//! - [`literal`] - Identifiers, basic and composite literals
//! - [`types`] - Type references
//! - [`stmt`] - Blocks, assignments, returns and calls
//! - [`decl`] - `var`/`const`/`type`/`func` declarations
//! - [`import`] - Import specs
//! - [`file`] - Files and their symbol tables
//! - [`package`] - Packages and export
//! - [`diagnostic`] - Soft-failure reporting
//!
//! # Example
//!
//! ```
//! use gosynth::{BasicLit, File, GenDecl, GoPrinter, ImportSpec, PrintConfig, ValueSpec};
//!
//! let mut file = File::new("main");
//! file.with_import_doc(["Standard formatting."])
//!     .add_import(ImportSpec::new("fmt"))
//!     .add_decl(GenDecl::var().value(ValueSpec::new(["x"]).values(&[&BasicLit::int(5)])));
//!
//! let text = file.render(&GoPrinter, &PrintConfig::default()).unwrap();
//! assert!(text.contains("///Standard formatting.\nimport (\n\t\"fmt\"\n)\n"));
//! assert!(text.ends_with("var x = 5\n"));
//! ```

pub mod decl;
pub mod diagnostic;
mod error;
pub mod expr;
pub mod file;
pub mod import;
pub mod literal;
pub mod package;
pub mod stmt;
pub mod types;

pub use decl::{Decl, FuncDecl, GenDecl, ValueSpec};
pub use diagnostic::{Diagnostic, DiagnosticCollector, DiagnosticSink, LogSink, Severity};
pub use error::{Error, Result};
pub use expr::{Assignable, Literal, ValueExpr};
pub use file::{File, Symbol};
pub use gosynth_syntax::{GoPrinter, Indent, PrintConfig, PrintError, Printer, ast};
pub use import::ImportSpec;
pub use literal::{BasicLit, FieldValue, Ident, MapLit, SliceLit, StructLit};
pub use package::Package;
pub use stmt::{Assign, Block, Call, Return, Statement};
pub use types::TypeRef;
