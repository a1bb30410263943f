//! Literal builders: identifiers, basic literals and composite literals.

use gosynth_syntax::ast::{self, CompositeLit, Expr, LitKind};

use crate::{
    expr::{Assignable, Literal, ValueExpr, value_nodes},
    file::Symbol,
    types::TypeRef,
};

/// An identifier, optionally bound to the symbol it was resolved from.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    name: String,
    symbol: Option<Symbol>,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: None,
        }
    }

    pub(crate) fn bound(symbol: &Symbol) -> Self {
        Self {
            name: symbol.name().to_string(),
            symbol: Some(symbol.clone()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The file-level binding this identifier was looked up from, if any.
    pub fn symbol(&self) -> Option<&Symbol> {
        self.symbol.as_ref()
    }
}

impl ValueExpr for Ident {
    fn value_node(&self) -> Expr {
        Expr::Ident(self.name.clone())
    }
}

impl Assignable for Ident {
    fn target_node(&self) -> Expr {
        Expr::Ident(self.name.clone())
    }
}

impl Literal for Ident {}

/// A basic literal: `nil`, booleans, numbers and strings.
///
/// Strings are always emitted in raw (backquoted) form.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicLit {
    node: ast::BasicLit,
}

impl BasicLit {
    fn new(kind: LitKind, value: impl Into<String>) -> Self {
        Self {
            node: ast::BasicLit::new(kind, value),
        }
    }

    pub fn nil() -> Self {
        Self::new(LitKind::Ident, "nil")
    }

    pub fn true_() -> Self {
        Self::bool(true)
    }

    pub fn false_() -> Self {
        Self::bool(false)
    }

    pub fn empty_string() -> Self {
        Self::string("")
    }

    pub fn bool(v: bool) -> Self {
        Self::new(LitKind::Ident, v.to_string())
    }

    pub fn int(v: i64) -> Self {
        Self::new(LitKind::Int, v.to_string())
    }

    pub fn uint(v: u64) -> Self {
        Self::new(LitKind::Int, v.to_string())
    }

    /// Floats are written with six decimal places.
    pub fn float(v: f64) -> Self {
        Self::new(LitKind::Float, format!("{v:.6}"))
    }

    pub fn string(v: &str) -> Self {
        Self::new(LitKind::String, format!("`{v}`"))
    }

    /// Same as [`BasicLit::string`]; every string literal is backquoted.
    pub fn backquote_string(v: &str) -> Self {
        Self::string(v)
    }

    pub fn kind(&self) -> LitKind {
        self.node.kind
    }

    /// The literal's source text.
    pub fn value(&self) -> &str {
        &self.node.value
    }
}

impl ValueExpr for BasicLit {
    fn value_node(&self) -> Expr {
        Expr::BasicLit(self.node.clone())
    }
}

impl Literal for BasicLit {}

macro_rules! composite_roles {
    ($ty:ty) => {
        impl ValueExpr for $ty {
            fn value_node(&self) -> Expr {
                Expr::Composite(self.node.clone())
            }
        }

        impl Assignable for $ty {
            fn target_node(&self) -> Expr {
                Expr::Composite(self.node.clone())
            }
        }

        impl Literal for $ty {}
    };
}

/// A slice literal. Elements keep their insertion order.
///
/// ```
/// use gosynth::{BasicLit, SliceLit, TypeRef, ValueExpr};
///
/// let lit = SliceLit::typed(TypeRef::slice(TypeRef::named("int")))
///     .push(BasicLit::int(1))
///     .append(&[&BasicLit::int(2), &BasicLit::int(3)]);
/// assert_eq!(lit.render().unwrap(), "[]int{1, 2, 3}");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SliceLit {
    node: CompositeLit,
}

impl SliceLit {
    /// An untyped slice literal (`{...}`), for use inside typed composites.
    pub fn new() -> Self {
        Self::default()
    }

    /// A slice literal of the full type `ty`, e.g. `TypeRef::slice(..)`.
    pub fn typed(ty: TypeRef) -> Self {
        Self {
            node: CompositeLit {
                ty: Some(ty.into_node()),
                elts: Vec::new(),
            },
        }
    }

    pub fn push(mut self, value: impl ValueExpr) -> Self {
        self.node.elts.push(value.value_node());
        self
    }

    pub fn append(mut self, values: &[&dyn ValueExpr]) -> Self {
        self.node.elts.extend(value_nodes(values));
        self
    }

    pub fn len(&self) -> usize {
        self.node.elts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node.elts.is_empty()
    }
}

composite_roles!(SliceLit);

/// A map literal.
///
/// Entries added one at a time keep their call order. Entries added in bulk
/// follow the iteration order of the source collection, which for a
/// `HashMap` differs from run to run.
#[derive(Debug, Clone, PartialEq)]
pub struct MapLit {
    node: CompositeLit,
}

impl MapLit {
    /// A `map[key]value{...}` literal.
    pub fn new(key: TypeRef, value: TypeRef) -> Self {
        Self::typed(TypeRef::map(key, value))
    }

    /// A literal of a named map type.
    pub fn typed(ty: TypeRef) -> Self {
        Self {
            node: CompositeLit {
                ty: Some(ty.into_node()),
                elts: Vec::new(),
            },
        }
    }

    pub fn add_entry(mut self, key: impl Literal, value: impl ValueExpr) -> Self {
        self.node.elts.push(Expr::KeyValue {
            key: Box::new(key.literal_node()),
            value: Box::new(value.value_node()),
        });
        self
    }

    pub fn add_entries<K, V>(self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Literal,
        V: ValueExpr,
    {
        entries
            .into_iter()
            .fold(self, |lit, (k, v)| lit.add_entry(k, v))
    }

    pub fn len(&self) -> usize {
        self.node.elts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node.elts.is_empty()
    }
}

composite_roles!(MapLit);

/// A struct literal. Fields keep their insertion order.
///
/// Named and positional fields may be mixed; nothing checks them against the
/// struct type's declaration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructLit {
    node: CompositeLit,
}

impl StructLit {
    /// An untyped struct literal (`{...}`).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn typed(ty: TypeRef) -> Self {
        Self {
            node: CompositeLit {
                ty: Some(ty.into_node()),
                elts: Vec::new(),
            },
        }
    }

    pub fn add_field(mut self, field: FieldValue) -> Self {
        self.node.elts.push(field.node);
        self
    }

    /// Add fields in order, skipping `None` entries.
    pub fn add_fields<F>(self, fields: impl IntoIterator<Item = F>) -> Self
    where
        F: Into<Option<FieldValue>>,
    {
        fields
            .into_iter()
            .filter_map(Into::<Option<FieldValue>>::into)
            .fold(self, StructLit::add_field)
    }

    pub fn len(&self) -> usize {
        self.node.elts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node.elts.is_empty()
    }
}

composite_roles!(StructLit);

/// A field value inside a struct literal.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    node: Expr,
}

impl FieldValue {
    /// `name: value`
    pub fn named(name: impl Into<String>, value: impl ValueExpr) -> Self {
        Self {
            node: Expr::KeyValue {
                key: Box::new(Expr::Ident(name.into())),
                value: Box::new(value.value_node()),
            },
        }
    }

    /// A bare value matched to fields by position.
    pub fn positional(value: impl Literal) -> Self {
        Self {
            node: value.literal_node(),
        }
    }
}

impl ValueExpr for FieldValue {
    fn value_node(&self) -> Expr {
        self.node.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap};

    use super::*;

    #[test]
    fn test_scalars() {
        assert_eq!(BasicLit::nil().render().unwrap(), "nil");
        assert_eq!(BasicLit::true_().render().unwrap(), "true");
        assert_eq!(BasicLit::false_().render().unwrap(), "false");
        assert_eq!(BasicLit::int(-42).render().unwrap(), "-42");
        assert_eq!(BasicLit::uint(u64::MAX).render().unwrap(), "18446744073709551615");
        assert_eq!(BasicLit::float(1.5).render().unwrap(), "1.500000");
    }

    #[test]
    fn test_strings_are_backquoted() {
        assert_eq!(BasicLit::string("a\"b").render().unwrap(), "`a\"b`");
        assert_eq!(BasicLit::empty_string().render().unwrap(), "``");
        assert_eq!(BasicLit::backquote_string("x"), BasicLit::string("x"));
        assert_eq!(BasicLit::string("x").kind(), LitKind::String);
    }

    #[test]
    fn test_ident_roles() {
        let id = Ident::new("count");
        assert_eq!(id.render().unwrap(), "count");
        assert_eq!(id.render_target().unwrap(), "count");
        assert!(id.symbol().is_none());
    }

    #[test]
    fn test_slice_preserves_order() {
        let lit = SliceLit::typed(TypeRef::slice(TypeRef::named("string")))
            .push(BasicLit::string("c"))
            .append(&[&BasicLit::string("a"), &Ident::new("b")]);
        assert_eq!(lit.len(), 3);
        assert_eq!(lit.render().unwrap(), "[]string{`c`, `a`, b}");
    }

    #[test]
    fn test_untyped_slice() {
        let lit = SliceLit::new().append(&[&BasicLit::int(1), &BasicLit::int(2)]);
        assert_eq!(lit.render().unwrap(), "{1, 2}");
    }

    #[test]
    fn test_map_single_entries_keep_call_order() {
        let lit = MapLit::new(TypeRef::named("string"), TypeRef::named("int"))
            .add_entry(BasicLit::string("z"), BasicLit::int(26))
            .add_entry(BasicLit::string("a"), BasicLit::int(1));
        assert_eq!(lit.render().unwrap(), "map[string]int{`z`: 26, `a`: 1}");
    }

    #[test]
    fn test_map_bulk_entries_appear_once_each() {
        let entries: HashMap<&str, i64> = HashMap::from([("a", 1), ("b", 2)]);
        let lit = MapLit::new(TypeRef::named("string"), TypeRef::named("int")).add_entries(
            entries
                .iter()
                .map(|(k, v)| (BasicLit::string(k), BasicLit::int(*v))),
        );

        let rendered = lit.render().unwrap();
        let body = rendered
            .strip_prefix("map[string]int{")
            .and_then(|s| s.strip_suffix('}'))
            .unwrap();
        let got: Vec<&str> = body.split(", ").collect();
        let set: BTreeSet<&str> = got.iter().copied().collect();

        assert_eq!(got.len(), 2);
        assert_eq!(set, BTreeSet::from(["`a`: 1", "`b`: 2"]));
    }

    #[test]
    fn test_typed_map() {
        let lit = MapLit::typed(TypeRef::named("Headers"))
            .add_entry(Ident::new("Accept"), BasicLit::string("*/*"));
        assert_eq!(lit.render().unwrap(), "Headers{Accept: `*/*`}");
    }

    #[test]
    fn test_struct_fields_mixed_and_ordered() {
        let lit = StructLit::typed(TypeRef::named("Point"))
            .add_field(FieldValue::named("X", BasicLit::int(1)))
            .add_fields([
                Some(FieldValue::positional(BasicLit::int(2))),
                None,
                Some(FieldValue::named("Z", Ident::new("z"))),
            ]);
        assert_eq!(lit.len(), 3);
        assert_eq!(lit.render().unwrap(), "Point{X: 1, 2, Z: z}");
    }

    #[test]
    fn test_composites_are_assignable() {
        let lit = StructLit::new().add_fields([FieldValue::named("A", BasicLit::nil())]);
        assert_eq!(lit.render_target().unwrap(), "{A: nil}");
    }
}
