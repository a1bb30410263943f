//! Declaration builders.

use gosynth_syntax::ast::{self, CommentGroup, DeclTok, Field, Spec, TypeSpec};

use crate::{
    expr::{ValueExpr, value_nodes},
    stmt::Statement,
    types::TypeRef,
};

/// A top-level declaration ready to be added to a [`File`](crate::File).
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Gen(GenDecl),
    Func(FuncDecl),
}

impl Decl {
    pub fn into_node(self) -> ast::Decl {
        match self {
            Decl::Gen(g) => ast::Decl::Gen(g.node),
            Decl::Func(f) => ast::Decl::Func(f.node),
        }
    }
}

impl From<GenDecl> for Decl {
    fn from(decl: GenDecl) -> Self {
        Decl::Gen(decl)
    }
}

impl From<FuncDecl> for Decl {
    fn from(decl: FuncDecl) -> Self {
        Decl::Func(decl)
    }
}

fn doc_group(lines: impl IntoIterator<Item = impl Into<String>>) -> CommentGroup {
    CommentGroup::new(lines.into_iter().map(Into::into).collect())
}

/// A `var`, `const` or `type` declaration.
///
/// ```
/// use gosynth::{BasicLit, GenDecl, ValueSpec};
///
/// let decl = GenDecl::var().value(ValueSpec::new(["x"]).values(&[&BasicLit::int(5)]));
/// assert_eq!(decl.specs().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenDecl {
    node: ast::GenDecl,
}

impl GenDecl {
    pub fn var() -> Self {
        Self::with_tok(DeclTok::Var)
    }

    pub fn const_() -> Self {
        Self::with_tok(DeclTok::Const)
    }

    pub fn type_() -> Self {
        Self::with_tok(DeclTok::Type)
    }

    fn with_tok(tok: DeclTok) -> Self {
        Self {
            node: ast::GenDecl::new(tok),
        }
    }

    /// Add a raw spec. No check is made that it fits the keyword.
    pub fn spec(mut self, spec: Spec) -> Self {
        self.node.specs.push(spec);
        self
    }

    pub fn value(self, spec: ValueSpec) -> Self {
        self.spec(Spec::Value(spec.node))
    }

    pub fn type_spec(self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.spec(Spec::Type(TypeSpec {
            name: name.into(),
            ty: ty.into_node(),
        }))
    }

    /// Always print the specs inside parentheses.
    pub fn grouped(mut self) -> Self {
        self.node.lparen = true;
        self
    }

    /// Attach comment lines. Each line must carry its own `//` marker.
    pub fn doc(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.node.doc = Some(doc_group(lines));
        self
    }

    pub fn tok(&self) -> DeclTok {
        self.node.tok
    }

    pub fn specs(&self) -> &[Spec] {
        &self.node.specs
    }
}

/// Names with an optional type and values: `a, b int = 1, 2`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSpec {
    node: ast::ValueSpec,
}

impl ValueSpec {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            node: ast::ValueSpec {
                names: names.into_iter().map(Into::into).collect(),
                ty: None,
                values: Vec::new(),
            },
        }
    }

    pub fn typed(mut self, ty: TypeRef) -> Self {
        self.node.ty = Some(ty.into_node());
        self
    }

    pub fn values(mut self, values: &[&dyn ValueExpr]) -> Self {
        self.node.values.extend(value_nodes(values));
        self
    }

    pub fn names(&self) -> &[String] {
        &self.node.names
    }
}

/// A function or method declaration.
///
/// ```
/// use gosynth::{BasicLit, FuncDecl, Return, TypeRef};
///
/// let f = FuncDecl::new("answer")
///     .result(TypeRef::named("int"))
///     .statement(Return::new(BasicLit::int(42)));
/// assert_eq!(f.name(), "answer");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    node: ast::FuncDecl,
}

impl FuncDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            node: ast::FuncDecl {
                doc: None,
                recv: None,
                name: name.into(),
                params: Vec::new(),
                results: Vec::new(),
                body: Vec::new(),
            },
        }
    }

    /// Make this a method on `ty`, bound to `name` inside the body.
    pub fn receiver(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.node.recv = Some(Field {
            name: Some(name.into()),
            ty: ty.into_node(),
        });
        self
    }

    pub fn param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.node.params.push(Field {
            name: Some(name.into()),
            ty: ty.into_node(),
        });
        self
    }

    /// Add an unnamed result.
    pub fn result(mut self, ty: TypeRef) -> Self {
        self.node.results.push(Field {
            name: None,
            ty: ty.into_node(),
        });
        self
    }

    pub fn statement(mut self, stmt: impl Statement) -> Self {
        self.node.body.push(stmt.stmt_node());
        self
    }

    pub fn doc(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.node.doc = Some(doc_group(lines));
        self
    }

    pub fn name(&self) -> &str {
        &self.node.name
    }
}
