//! Expression roles.
//!
//! Builders expose what they can be used for through two capabilities:
//!
//! - [`ValueExpr`] - the expression yields a value (right-hand side,
//!   argument, return value)
//! - [`Assignable`] - the expression can be written to (left-hand side)
//!
//! [`Literal`] narrows [`ValueExpr`] to the constant-like values accepted as
//! map keys and positional struct fields.

use gosynth_syntax::{PrintError, ast::Expr, printer::expr_to_string};

/// An expression usable wherever a value is read.
pub trait ValueExpr {
    fn value_node(&self) -> Expr;

    /// Render the expression as Go source.
    fn render(&self) -> Result<String, PrintError> {
        expr_to_string(&self.value_node())
    }
}

/// An expression usable as the target of an assignment.
pub trait Assignable {
    fn target_node(&self) -> Expr;

    /// Render the expression as it appears on the left-hand side.
    fn render_target(&self) -> Result<String, PrintError> {
        expr_to_string(&self.target_node())
    }
}

/// A literal value.
pub trait Literal: ValueExpr {
    fn literal_node(&self) -> Expr {
        self.value_node()
    }
}

impl<T: ValueExpr + ?Sized> ValueExpr for &T {
    fn value_node(&self) -> Expr {
        (**self).value_node()
    }
}

impl<T: Assignable + ?Sized> Assignable for &T {
    fn target_node(&self) -> Expr {
        (**self).target_node()
    }
}

impl<T: Literal + ?Sized> Literal for &T {}

impl<T: ValueExpr + ?Sized> ValueExpr for Box<T> {
    fn value_node(&self) -> Expr {
        (**self).value_node()
    }
}

impl<T: Literal + ?Sized> Literal for Box<T> {}

/// Collect the value nodes of a heterogeneous list.
pub(crate) fn value_nodes(values: &[&dyn ValueExpr]) -> Vec<Expr> {
    values.iter().map(|v| v.value_node()).collect()
}
