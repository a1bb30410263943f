//! Statement builders.

use gosynth_syntax::ast::{AssignTok, CallExpr, Expr, Stmt};

use crate::{
    expr::{Assignable, ValueExpr, value_nodes},
    types::TypeRef,
};

/// Something that can appear in a statement list.
pub trait Statement {
    fn stmt_node(&self) -> Stmt;
}

impl<T: Statement + ?Sized> Statement for &T {
    fn stmt_node(&self) -> Stmt {
        (**self).stmt_node()
    }
}

/// A braced statement list. Opens no scope of its own in the model.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(stmts: &[&dyn Statement]) -> Self {
        Self {
            stmts: stmts.iter().map(|s| s.stmt_node()).collect(),
        }
    }

    pub fn push(mut self, stmt: impl Statement) -> Self {
        self.stmts.push(stmt.stmt_node());
        self
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

impl Statement for Block {
    fn stmt_node(&self) -> Stmt {
        Stmt::Block(self.stmts.clone())
    }
}

/// A short variable declaration: `a, b := x, y`.
///
/// Every assignment introduces fresh bindings; re-assignment with `=` is not
/// modelled. Target and value counts are not checked against each other, so
/// `a, err := f()` is expressible.
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    lhs: Vec<Expr>,
    rhs: Vec<Expr>,
}

impl Assign {
    pub fn new(target: impl Assignable, value: impl ValueExpr) -> Self {
        Self {
            lhs: vec![target.target_node()],
            rhs: vec![value.value_node()],
        }
    }

    pub fn multi(targets: &[&dyn Assignable], values: &[&dyn ValueExpr]) -> Self {
        Self {
            lhs: targets.iter().map(|t| t.target_node()).collect(),
            rhs: value_nodes(values),
        }
    }
}

impl Statement for Assign {
    fn stmt_node(&self) -> Stmt {
        Stmt::Assign {
            lhs: self.lhs.clone(),
            tok: AssignTok::Define,
            rhs: self.rhs.clone(),
        }
    }
}

/// `return value`
#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    value: Expr,
}

impl Return {
    pub fn new(value: impl ValueExpr) -> Self {
        Self {
            value: value.value_node(),
        }
    }
}

impl Statement for Return {
    fn stmt_node(&self) -> Stmt {
        Stmt::Return(vec![self.value.clone()])
    }
}

/// A function or method call.
///
/// A call is a statement when its result is discarded and a value when it
/// is consumed.
///
/// ```
/// use gosynth::{BasicLit, Call, Ident, ValueExpr};
///
/// let recv = Ident::new("fmt");
/// let call = Call::new(Some(&recv), "Println").with_args(&[&BasicLit::string("hi")]);
/// assert_eq!(call.render().unwrap(), "fmt.Println(`hi`)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    node: CallExpr,
}

impl Call {
    /// Call `name`, or `receiver.name` when a receiver is given.
    pub fn new(receiver: Option<&dyn ValueExpr>, name: impl Into<String>) -> Self {
        let name = name.into();
        let fun = match receiver {
            Some(recv) => Expr::Selector {
                x: Box::new(recv.value_node()),
                sel: name,
            },
            None => Expr::Ident(name),
        };
        Self {
            node: CallExpr {
                fun: Box::new(fun),
                args: Vec::new(),
            },
        }
    }

    /// `make(ty)`
    pub fn make(ty: &TypeRef) -> Self {
        Self::new(None, "make").with_args(&[ty])
    }

    pub fn with_args(mut self, args: &[&dyn ValueExpr]) -> Self {
        self.node.args.extend(value_nodes(args));
        self
    }

    pub fn arg(mut self, arg: impl ValueExpr) -> Self {
        self.node.args.push(arg.value_node());
        self
    }
}

impl Statement for Call {
    fn stmt_node(&self) -> Stmt {
        Stmt::Expr(self.value_node())
    }
}

impl ValueExpr for Call {
    fn value_node(&self) -> Expr {
        Expr::Call(self.node.clone())
    }
}

#[cfg(test)]
mod tests {
    use gosynth_syntax::{CodeBuilder, printer::print_stmt};

    use super::*;
    use crate::literal::{BasicLit, Ident, MapLit};

    fn render(stmt: &impl Statement) -> String {
        let mut out = CodeBuilder::default();
        print_stmt(&mut out, &stmt.stmt_node()).unwrap();
        out.build()
    }

    #[test]
    fn test_assign_defines() {
        let stmt = Assign::new(Ident::new("x"), BasicLit::int(5));
        assert_eq!(render(&stmt), "x := 5\n");
    }

    #[test]
    fn test_multi_assign() {
        let stmt = Assign::multi(
            &[&Ident::new("a"), &Ident::new("b")],
            &[&BasicLit::int(1), &BasicLit::string("two")],
        );
        assert_eq!(render(&stmt), "a, b := 1, `two`\n");
    }

    #[test]
    fn test_multi_assign_from_call() {
        let open = Call::new(Some(&Ident::new("os")), "Open").arg(BasicLit::string("f"));
        let stmt = Assign::multi(&[&Ident::new("f"), &Ident::new("err")], &[&open]);
        assert_eq!(render(&stmt), "f, err := os.Open(`f`)\n");
    }

    #[test]
    fn test_return() {
        assert_eq!(render(&Return::new(BasicLit::nil())), "return nil\n");
    }

    #[test]
    fn test_call_as_statement_and_value() {
        let call = Call::new(None, "run").with_args(&[&Ident::new("ctx"), &BasicLit::true_()]);
        assert_eq!(render(&call), "run(ctx, true)\n");

        let stmt = Assign::new(Ident::new("ok"), call);
        assert_eq!(render(&stmt), "ok := run(ctx, true)\n");
    }

    #[test]
    fn test_make_call() {
        let ty = TypeRef::map(TypeRef::named("string"), TypeRef::named("int"));
        let call = Call::make(&ty).arg(BasicLit::int(8));
        assert_eq!(call.render().unwrap(), "make(map[string]int, 8)");
    }

    #[test]
    fn test_block_keeps_order() {
        let m = Ident::new("m");
        let block = Block::new(&[
            &Assign::new(&m, MapLit::new(TypeRef::named("string"), TypeRef::named("int"))),
            &Call::new(None, "use").arg(&m),
        ])
        .push(Return::new(&m));

        assert_eq!(block.len(), 3);
        assert_eq!(
            render(&block),
            "{\n\tm := map[string]int{}\n\tuse(m)\n\treturn m\n}\n"
        );
    }
}
