//! Type references.

use gosynth_syntax::ast::{Expr, TypeExpr};

use crate::expr::ValueExpr;

/// A reference to a Go type.
///
/// ```
/// use gosynth::TypeRef;
///
/// let ty = TypeRef::map(TypeRef::named("string"), TypeRef::slice(TypeRef::named("int")));
/// assert_eq!(ty.to_string(), "map[string][]int");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    node: TypeExpr,
}

impl TypeRef {
    /// A named type such as `int` or `Config`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            node: TypeExpr::Named(name.into()),
        }
    }

    /// A type from another package: `pkg.Name`.
    pub fn qualified(package: &str, name: &str) -> Self {
        Self::named(format!("{package}.{name}"))
    }

    pub fn slice(elem: TypeRef) -> Self {
        Self {
            node: TypeExpr::Slice(Box::new(elem.node)),
        }
    }

    pub fn map(key: TypeRef, value: TypeRef) -> Self {
        Self {
            node: TypeExpr::Map {
                key: Box::new(key.node),
                value: Box::new(value.node),
            },
        }
    }

    pub fn pointer(elem: TypeRef) -> Self {
        Self {
            node: TypeExpr::Pointer(Box::new(elem.node)),
        }
    }

    pub fn node(&self) -> &TypeExpr {
        &self.node
    }

    pub fn into_node(self) -> TypeExpr {
        self.node
    }
}

/// Types appear in expression position as arguments to builtins like `make`.
impl ValueExpr for TypeRef {
    fn value_node(&self) -> Expr {
        Expr::Type(self.node.clone())
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match gosynth_syntax::printer::type_to_string(&self.node) {
            Ok(s) => f.write_str(&s),
            Err(_) => f.write_str("<invalid type>"),
        }
    }
}
