//! Source files and their file-scoped symbol tables.

use gosynth_syntax::{
    PrintConfig, PrintError, Printer,
    ast::{self, CommentGroup, DeclTok, Spec},
    sort_import_specs,
};
use indexmap::IndexMap;

use crate::{
    decl::Decl,
    error::{Error, Result},
    import::ImportSpec,
    literal::Ident,
};

/// A name bound at file scope by a `var` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    name: String,
    file: Option<String>,
    decl: usize,
}

impl Symbol {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the file the symbol is defined in, for files owned by a
    /// [`Package`](crate::Package).
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

/// A Go source file under construction.
///
/// Owns at most one import block, which is always printed first and always
/// parenthesized, the remaining declarations in insertion order, and the
/// symbol table of names bound by `var` declarations.
///
/// ```
/// use gosynth::{BasicLit, File, GenDecl, ImportSpec, ValueSpec};
///
/// let mut file = File::new("main");
/// file.add_import(ImportSpec::new("fmt"))
///     .add_decl(GenDecl::var().value(ValueSpec::new(["x"]).values(&[&BasicLit::int(5)])));
///
/// assert_eq!(file.defined_object("x").unwrap().name(), "x");
/// assert!(file.defined_object("y").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct File {
    name: Option<String>,
    package: String,
    import_decl: Option<ast::GenDecl>,
    import_doc: Option<CommentGroup>,
    decls: Vec<ast::Decl>,
    objects: IndexMap<String, Symbol>,
}

impl File {
    /// Create a standalone file in package `package`.
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            name: None,
            package: package.into(),
            import_decl: None,
            import_doc: None,
            decls: Vec::new(),
            objects: IndexMap::new(),
        }
    }

    pub(crate) fn named(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(package)
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    // =========================================================================
    // Symbols
    // =========================================================================

    /// Look up a file-scoped binding.
    pub fn defined_object(&self, name: &str) -> Option<Ident> {
        self.objects.get(name).map(Ident::bound)
    }

    /// The declaration that binds `name`.
    pub fn binding(&self, name: &str) -> Option<&ast::Decl> {
        self.objects.get(name).and_then(|s| self.decls.get(s.decl))
    }

    /// Names defined in this file, in definition order.
    pub fn list_objects(&self) -> Vec<String> {
        self.objects.keys().cloned().collect()
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    /// Append a declaration.
    ///
    /// # Panics
    ///
    /// If a `var` declaration holds a spec other than a value spec. Use
    /// [`File::try_add_decl`] to get the error instead.
    pub fn add_decl(&mut self, decl: impl Into<Decl>) -> &mut Self {
        if let Err(err) = self.try_add_decl(decl) {
            panic!("{err}");
        }
        self
    }

    /// Append a declaration, registering every name a `var` declaration
    /// binds. Qualified names (`pkg.Name`) refer to other scopes and are not
    /// registered.
    ///
    /// A malformed `var` declaration is rejected as a whole; nothing is added.
    pub fn try_add_decl(&mut self, decl: impl Into<Decl>) -> Result<&mut Self> {
        let node = decl.into().into_node();

        match &node {
            ast::Decl::Gen(g) if g.tok == DeclTok::Var => self.define_objects(&g.specs)?,
            _ => {}
        }

        self.decls.push(node);
        Ok(self)
    }

    fn define_objects(&mut self, specs: &[Spec]) -> Result<()> {
        let names = var_names(specs)?;
        let index = self.decls.len();
        for name in names.into_iter().filter(|n| !n.contains('.')) {
            self.objects.insert(
                name.clone(),
                Symbol {
                    name,
                    file: self.name.clone(),
                    decl: index,
                },
            );
        }
        Ok(())
    }

    // =========================================================================
    // Imports
    // =========================================================================

    /// Attach comment lines to the import block, each prefixed with `///`.
    ///
    /// The comment is kept until the block exists if no import was added yet.
    pub fn with_import_doc(
        &mut self,
        lines: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> &mut Self {
        let doc = CommentGroup::new(
            lines
                .into_iter()
                .map(|l| format!("///{}", l.as_ref()))
                .collect(),
        );
        if let Some(decl) = &mut self.import_decl {
            decl.doc = Some(doc.clone());
        }
        self.import_doc = Some(doc);
        self
    }

    /// Append an import to the import block, creating the block if needed.
    pub fn add_import(&mut self, import: ImportSpec) -> &mut Self {
        let doc = &self.import_doc;
        let decl = self.import_decl.get_or_insert_with(|| {
            let mut decl = ast::GenDecl::new(DeclTok::Import);
            decl.lparen = true;
            decl.doc = doc.clone();
            decl
        });
        decl.specs.push(import.into_spec());
        self
    }

    /// Append several imports, then put the block in canonical order.
    pub fn add_imports(&mut self, imports: impl IntoIterator<Item = ImportSpec>) -> &mut Self {
        for import in imports {
            self.add_import(import);
        }
        if let Some(decl) = &mut self.import_decl {
            sort_import_specs(&mut decl.specs);
        }
        self
    }

    /// Import paths in block order.
    pub fn imports(&self) -> Vec<&str> {
        self.import_decl
            .iter()
            .flat_map(|d| &d.specs)
            .filter_map(|s| match s {
                Spec::Import(i) => Some(i.path.as_str()),
                _ => None,
            })
            .collect()
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Build the syntax tree for this file.
    pub fn to_ast(&self) -> ast::File {
        let mut file = ast::File::new(self.package.clone());
        file.decls.extend(self.import_decl.clone().map(ast::Decl::Gen));
        file.decls.extend(self.decls.iter().cloned());
        file
    }

    pub fn render(
        &self,
        printer: &dyn Printer,
        config: &PrintConfig,
    ) -> std::result::Result<String, PrintError> {
        printer.render(&self.to_ast(), config)
    }
}

fn var_names(specs: &[Spec]) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for spec in specs {
        match spec {
            Spec::Value(v) => names.extend(v.names.iter().cloned()),
            Spec::Import(_) => return Err(Box::new(Error::MalformedVarDecl { found: "import" })),
            Spec::Type(_) => return Err(Box::new(Error::MalformedVarDecl { found: "type" })),
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use gosynth_syntax::{GoPrinter, Indent};

    use super::*;
    use crate::{
        decl::{FuncDecl, GenDecl, ValueSpec},
        expr::ValueExpr,
        literal::BasicLit,
        stmt::Return,
        types::TypeRef,
    };

    fn var(names: &[&str]) -> GenDecl {
        GenDecl::var().value(ValueSpec::new(names.iter().copied()).typed(TypeRef::named("int")))
    }

    fn render(file: &File) -> String {
        file.render(&GoPrinter, &PrintConfig::new(Indent::Spaces(4)))
            .unwrap()
    }

    #[test]
    fn test_var_names_are_registered() {
        let mut file = File::new("main");
        file.add_decl(var(&["a", "b"])).add_decl(var(&["c"]));

        assert_eq!(file.list_objects(), ["a", "b", "c"]);
        for name in ["a", "b", "c"] {
            let ident = file.defined_object(name).unwrap();
            assert_eq!(ident.render().unwrap(), name);
            assert_eq!(ident.symbol().unwrap().name(), name);
        }
    }

    #[test]
    fn test_qualified_names_are_not_registered() {
        let mut file = File::new("main");
        file.add_decl(var(&["os.Args", "local"]));

        assert!(file.defined_object("os.Args").is_none());
        assert!(file.defined_object("local").is_some());
    }

    #[test]
    fn test_binding_points_at_declaration() {
        let mut file = File::new("main");
        file.add_decl(FuncDecl::new("f")).add_decl(var(&["x"]));

        assert!(matches!(
            file.binding("x"),
            Some(ast::Decl::Gen(g)) if g.tok == DeclTok::Var
        ));
        assert!(file.binding("f").is_none());
    }

    #[test]
    fn test_const_and_type_decls_bind_nothing() {
        let mut file = File::new("main");
        file.add_decl(
            GenDecl::const_().value(ValueSpec::new(["Max"]).values(&[&BasicLit::int(3)])),
        )
        .add_decl(GenDecl::type_().type_spec("ID", TypeRef::named("string")));

        assert!(file.list_objects().is_empty());
    }

    #[test]
    fn test_malformed_var_decl_is_rejected_whole() {
        let mut file = File::new("main");
        let decl = GenDecl::var()
            .value(ValueSpec::new(["ok"]))
            .type_spec("T", TypeRef::named("int"));

        let err = file.try_add_decl(decl).unwrap_err();
        assert!(matches!(*err, Error::MalformedVarDecl { found: "type" }));
        assert!(file.defined_object("ok").is_none());
        assert_eq!(render(&file), "package main\n");
    }

    #[test]
    #[should_panic(expected = "non value spec")]
    fn test_add_decl_panics_on_malformed_var_decl() {
        let mut file = File::new("main");
        file.add_decl(GenDecl::var().type_spec("T", TypeRef::named("int")));
    }

    #[test]
    fn test_single_import_is_parenthesized() {
        let mut file = File::new("main");
        file.add_import(ImportSpec::new("fmt"));
        assert_eq!(render(&file), "package main\n\nimport (\n    \"fmt\"\n)\n");
    }

    #[test]
    fn test_add_import_keeps_call_order() {
        let mut file = File::new("main");
        file.add_import(ImportSpec::new("os"))
            .add_import(ImportSpec::new("fmt"));
        assert_eq!(file.imports(), ["os", "fmt"]);
    }

    #[test]
    fn test_add_imports_sorts_whole_block() {
        let mut file = File::new("main");
        file.add_import(ImportSpec::new("strings"));
        file.add_imports([
            ImportSpec::new("os"),
            ImportSpec::new("fmt"),
            ImportSpec::new("os"),
        ]);
        assert_eq!(file.imports(), ["fmt", "os", "strings"]);

        file.add_imports(Vec::new());
        assert_eq!(file.imports(), ["fmt", "os", "strings"]);
    }

    #[test]
    fn test_import_block_comes_first() {
        let mut file = File::new("main");
        file.add_decl(var(&["x"]));
        file.add_import(ImportSpec::new("fmt").alias("f"));

        assert_eq!(
            render(&file),
            "package main\n\nimport (\n    f \"fmt\"\n)\n\nvar x int\n"
        );
    }

    #[test]
    fn test_import_doc_before_block_exists() {
        let mut file = File::new("main");
        file.with_import_doc(["first", "second"]);
        file.add_import(ImportSpec::new("fmt"));

        assert_eq!(
            render(&file),
            "package main\n\n///first\n///second\nimport (\n    \"fmt\"\n)\n"
        );
    }

    #[test]
    fn test_import_doc_after_block_exists() {
        let mut file = File::new("main");
        file.add_import(ImportSpec::new("fmt"));
        file.with_import_doc(["late"]);

        assert!(render(&file).contains("///late\nimport (\n"));
    }

    #[test]
    fn test_import_doc_without_imports_renders_nothing() {
        let mut file = File::new("main");
        file.with_import_doc(["unused"]);
        assert_eq!(render(&file), "package main\n");
    }

    #[test]
    fn test_func_decl_renders() {
        let mut file = File::new("main");
        file.add_decl(
            FuncDecl::new("answer")
                .result(TypeRef::named("int"))
                .statement(Return::new(BasicLit::int(42))),
        );
        assert_eq!(
            render(&file),
            "package main\n\nfunc answer() int {\n    return 42\n}\n"
        );
    }
}
