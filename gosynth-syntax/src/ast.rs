//! Go syntax tree.
//!
//! These are plain data nodes. They carry no positions and perform no
//! validation; the [`printer`](crate::printer) checks structural
//! well-formedness when it renders them.

/// Kind of a basic literal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitKind {
    /// Predeclared identifiers used as values (`nil`, `true`, `false`).
    Ident,
    Int,
    Float,
    String,
}

/// A literal of basic type. `value` is the exact source text.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicLit {
    pub kind: LitKind,
    pub value: String,
}

impl BasicLit {
    pub fn new(kind: LitKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// A type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A named type, possibly package-qualified (`int`, `http.Client`).
    Named(String),
    /// `[]T`
    Slice(Box<TypeExpr>),
    /// `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// `*T`
    Pointer(Box<TypeExpr>),
}

/// A composite literal: `T{a, b}` or `{a, b}` when the type is elided.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositeLit {
    pub ty: Option<TypeExpr>,
    pub elts: Vec<Expr>,
}

/// A call expression.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub fun: Box<Expr>,
    pub args: Vec<Expr>,
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(String),
    BasicLit(BasicLit),
    Composite(CompositeLit),
    Call(CallExpr),
    /// `x.sel`
    Selector { x: Box<Expr>, sel: String },
    /// `key: value` inside a composite literal.
    KeyValue { key: Box<Expr>, value: Box<Expr> },
    /// A type used in expression position, e.g. the argument of `make`.
    Type(TypeExpr),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }
}

/// Assignment operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignTok {
    /// `:=`
    Define,
    /// `=`
    Assign,
}

impl AssignTok {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Define => ":=",
            Self::Assign => "=",
        }
    }
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(Vec<Stmt>),
    Assign {
        lhs: Vec<Expr>,
        tok: AssignTok,
        rhs: Vec<Expr>,
    },
    Return(Vec<Expr>),
    /// An expression evaluated for its side effects.
    Expr(Expr),
}

/// A comment group. Each entry is a complete comment line including its
/// marker (`// ...`, `/// ...`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentGroup {
    pub list: Vec<String>,
}

impl CommentGroup {
    pub fn new(list: Vec<String>) -> Self {
        Self { list }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Local package name (`f "fmt"`, `_ "embed"`).
    pub name: Option<String>,
    /// Unquoted import path.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueSpec {
    pub names: Vec<String>,
    pub ty: Option<TypeExpr>,
    pub values: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub name: String,
    pub ty: TypeExpr,
}

/// A single spec inside a general declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Spec {
    Import(ImportSpec),
    Value(ValueSpec),
    Type(TypeSpec),
}

/// Keyword of a general declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclTok {
    Import,
    Const,
    Type,
    Var,
}

impl DeclTok {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Const => "const",
            Self::Type => "type",
            Self::Var => "var",
        }
    }
}

/// A general declaration (`import`, `const`, `type` or `var`).
#[derive(Debug, Clone, PartialEq)]
pub struct GenDecl {
    pub doc: Option<CommentGroup>,
    pub tok: DeclTok,
    /// Render the specs inside parentheses even when there is only one.
    pub lparen: bool,
    pub specs: Vec<Spec>,
}

impl GenDecl {
    pub fn new(tok: DeclTok) -> Self {
        Self {
            doc: None,
            tok,
            lparen: false,
            specs: Vec::new(),
        }
    }
}

/// A parameter, result or receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: Option<String>,
    pub ty: TypeExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub doc: Option<CommentGroup>,
    pub recv: Option<Field>,
    pub name: String,
    pub params: Vec<Field>,
    pub results: Vec<Field>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Gen(GenDecl),
    Func(FuncDecl),
}

/// A source file: package clause followed by top-level declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub package: String,
    pub decls: Vec<Decl>,
}

impl File {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            decls: Vec::new(),
        }
    }

    /// Iterate over every import spec in the file.
    pub fn imports(&self) -> impl Iterator<Item = &ImportSpec> {
        self.decls
            .iter()
            .filter_map(|d| match d {
                Decl::Gen(g) if g.tok == DeclTok::Import => Some(&g.specs),
                _ => None,
            })
            .flatten()
            .filter_map(|s| match s {
                Spec::Import(i) => Some(i),
                _ => None,
            })
    }
}
