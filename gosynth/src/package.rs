//! Packages: named collections of files sharing a package clause.

use std::{fs::OpenOptions, io::Write, path::Path};

use gosynth_syntax::{GoPrinter, PrintConfig, Printer};
use indexmap::{IndexMap, map::Entry};

use crate::{
    diagnostic::{Diagnostic, DiagnosticSink, LogSink},
    error::{Error, Result},
    file::File,
    literal::Ident,
};

/// A Go package under construction.
///
/// Not meant to be shared between threads; one builder owns a package for
/// its whole build-then-export lifetime.
///
/// ```
/// use gosynth::{BasicLit, GenDecl, Package, ValueSpec};
///
/// let mut pkg = Package::new("config");
/// pkg.new_file("defaults.go")
///     .add_decl(GenDecl::var().value(ValueSpec::new(["Port"]).values(&[&BasicLit::int(8080)])));
///
/// let port = pkg.defined_object("Port").unwrap();
/// assert_eq!(port.symbol().unwrap().file(), Some("defaults.go"));
/// ```
pub struct Package {
    name: String,
    files: IndexMap<String, File>,
    sink: Box<dyn DiagnosticSink>,
}

impl Package {
    /// Create an empty package. Diagnostics go to the `log` facade.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: IndexMap::new(),
            sink: Box::new(LogSink),
        }
    }

    /// Send diagnostics to `sink` instead of the log.
    pub fn with_diagnostics(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a file in this package. A file already registered under
    /// `name` is replaced.
    pub fn new_file(&mut self, name: impl Into<String>) -> &mut File {
        let name = name.into();
        let file = File::named(name.clone(), self.name.clone());
        match self.files.entry(name) {
            Entry::Occupied(mut entry) => {
                entry.insert(file);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(file),
        }
    }

    pub fn file(&self, name: &str) -> Option<&File> {
        self.files.get(name)
    }

    pub fn file_mut(&mut self, name: &str) -> Option<&mut File> {
        self.files.get_mut(name)
    }

    pub fn files(&self) -> impl Iterator<Item = (&str, &File)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up a binding in any file of the package.
    ///
    /// A miss is reported as a warning listing every known object.
    pub fn defined_object(&self, name: &str) -> Option<Ident> {
        let found = self.files.values().find_map(|f| f.defined_object(name));
        if found.is_none() {
            let defined = self.list_objects();
            self.sink.report(
                Diagnostic::warning(format!(
                    "unknown object `{name}`. Defined objects are:\n\t{}",
                    defined.join("\n\t")
                ))
                .at(format!("package {}", self.name)),
            );
        }
        found
    }

    /// Every object defined in the package, file by file.
    pub fn list_objects(&self) -> Vec<String> {
        self.files.values().flat_map(File::list_objects).collect()
    }

    /// Print every file into `out_dir` with the default Go printer.
    pub fn write_files(&self, out_dir: impl AsRef<Path>, config: &PrintConfig) -> Result<()> {
        self.write_files_with(&GoPrinter, out_dir, config)
    }

    /// Print every file into `out_dir`, one file at a time.
    ///
    /// Stops at the first failure. Files written before it stay on disk.
    pub fn write_files_with(
        &self,
        printer: &dyn Printer,
        out_dir: impl AsRef<Path>,
        config: &PrintConfig,
    ) -> Result<()> {
        let out_dir = out_dir.as_ref();
        for (name, file) in &self.files {
            log::info!("exporting file {}", name);
            let path = out_dir.join(name);

            let mut out = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&path)
                .map_err(|source| {
                    Box::new(Error::Open {
                        file: name.clone(),
                        path: path.clone(),
                        source,
                    })
                })?;

            let text = file.render(printer, config).map_err(|source| {
                Box::new(Error::Print {
                    file: name.clone(),
                    source,
                })
            })?;

            out.write_all(text.as_bytes()).map_err(|source| {
                Box::new(Error::Write {
                    file: name.clone(),
                    path: path.clone(),
                    source,
                })
            })?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Package")
            .field("name", &self.name)
            .field("files", &self.files)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        decl::{GenDecl, ValueSpec},
        diagnostic::{DiagnosticCollector, Severity},
        expr::ValueExpr,
        literal::BasicLit,
    };

    fn var(name: &str) -> GenDecl {
        GenDecl::var().value(ValueSpec::new([name]).values(&[&BasicLit::int(1)]))
    }

    #[test]
    fn test_new_file_binds_package_name() {
        let mut pkg = Package::new("server");
        let file = pkg.new_file("a.go");
        assert_eq!(file.package(), "server");
        assert_eq!(file.name(), Some("a.go"));
    }

    #[test]
    fn test_new_file_replaces_same_name() {
        let mut pkg = Package::new("main");
        pkg.new_file("a.go").add_decl(var("old"));
        pkg.new_file("a.go");

        assert_eq!(pkg.files().count(), 1);
        assert!(pkg.file("a.go").unwrap().list_objects().is_empty());
    }

    #[test]
    fn test_lookup_across_files() {
        let collector = DiagnosticCollector::new();
        let mut pkg = Package::new("main").with_diagnostics(collector.clone());
        pkg.new_file("a.go").add_decl(var("a"));
        pkg.new_file("b.go").add_decl(var("b"));

        let b = pkg.defined_object("b").unwrap();
        assert_eq!(b.render().unwrap(), "b");
        assert_eq!(b.symbol().unwrap().file(), Some("b.go"));
        assert_eq!(pkg.list_objects(), ["a", "b"]);
        assert!(collector.is_empty());
    }

    #[test]
    fn test_lookup_miss_reports_known_objects() {
        let collector = DiagnosticCollector::new();
        let mut pkg = Package::new("main").with_diagnostics(collector.clone());
        pkg.new_file("a.go").add_decl(var("a"));
        pkg.file_mut("a.go").unwrap().add_decl(var("b"));

        assert!(pkg.defined_object("missing").is_none());

        let diags = collector.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert_eq!(
            diags[0].message,
            "unknown object `missing`. Defined objects are:\n\ta\n\tb"
        );
        assert_eq!(diags[0].location.as_deref(), Some("package main"));
    }

    #[test]
    fn test_debug_lists_name() {
        let pkg = Package::new("main");
        assert!(format!("{pkg:?}").contains("\"main\""));
    }
}
