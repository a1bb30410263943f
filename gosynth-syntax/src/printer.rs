//! Rendering syntax trees to Go source text.

use thiserror::Error;

use crate::{
    ast::{Decl, Expr, Field, File, FuncDecl, GenDecl, Spec, Stmt, TypeExpr},
    code_builder::CodeBuilder,
    config::PrintConfig,
};

/// A tree that cannot be printed as valid Go.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrintError {
    #[error("file has no package name")]
    MissingPackage,
    #[error("empty identifier")]
    EmptyIdent,
    #[error("assignment has no {0}")]
    EmptyAssign(&'static str),
    #[error("import spec has an empty path")]
    EmptyImportPath,
    #[error("`{0}` declaration has no specs")]
    EmptyDecl(&'static str),
}

pub type Result<T> = std::result::Result<T, PrintError>;

/// Serializes a syntax tree to text.
pub trait Printer {
    fn render(&self, file: &File, config: &PrintConfig) -> Result<String>;
}

/// gofmt-style printer.
///
/// Each top-level declaration is preceded by a blank line, general
/// declarations with more than one spec (or with `lparen` set) are
/// parenthesized with one spec per line, and the output ends with a newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoPrinter;

impl Printer for GoPrinter {
    fn render(&self, file: &File, config: &PrintConfig) -> Result<String> {
        if file.package.is_empty() {
            return Err(PrintError::MissingPackage);
        }

        let mut out = CodeBuilder::from_config(config);
        out.push_line(&format!("package {}", file.package));
        for decl in &file.decls {
            out.push_blank();
            match decl {
                Decl::Gen(g) => print_gen_decl(&mut out, g)?,
                Decl::Func(f) => print_func_decl(&mut out, f)?,
            }
        }
        Ok(out.build())
    }
}

/// Render a single expression.
pub fn expr_to_string(expr: &Expr) -> Result<String> {
    Ok(match expr {
        Expr::Ident(name) => ident(name)?.to_string(),
        Expr::BasicLit(lit) => lit.value.clone(),
        Expr::Composite(lit) => {
            let ty = match &lit.ty {
                Some(ty) => type_to_string(ty)?,
                None => String::new(),
            };
            format!("{ty}{{{}}}", join_exprs(&lit.elts)?)
        }
        Expr::Call(call) => format!("{}({})", expr_to_string(&call.fun)?, join_exprs(&call.args)?),
        Expr::Selector { x, sel } => format!("{}.{}", expr_to_string(x)?, ident(sel)?),
        Expr::KeyValue { key, value } => {
            format!("{}: {}", expr_to_string(key)?, expr_to_string(value)?)
        }
        Expr::Type(ty) => type_to_string(ty)?,
    })
}

/// Render a type expression.
pub fn type_to_string(ty: &TypeExpr) -> Result<String> {
    Ok(match ty {
        TypeExpr::Named(name) => ident(name)?.to_string(),
        TypeExpr::Slice(elem) => format!("[]{}", type_to_string(elem)?),
        TypeExpr::Map { key, value } => {
            format!("map[{}]{}", type_to_string(key)?, type_to_string(value)?)
        }
        TypeExpr::Pointer(elem) => format!("*{}", type_to_string(elem)?),
    })
}

/// Print a statement at the builder's current indentation.
pub fn print_stmt(out: &mut CodeBuilder, stmt: &Stmt) -> Result<()> {
    match stmt {
        Stmt::Block(stmts) => {
            out.push_line("{").push_indent();
            for s in stmts {
                print_stmt(out, s)?;
            }
            out.push_dedent().push_line("}");
        }
        Stmt::Assign { lhs, tok, rhs } => {
            if lhs.is_empty() {
                return Err(PrintError::EmptyAssign("targets"));
            }
            if rhs.is_empty() {
                return Err(PrintError::EmptyAssign("values"));
            }
            out.push_line(&format!(
                "{} {} {}",
                join_exprs(lhs)?,
                tok.as_str(),
                join_exprs(rhs)?
            ));
        }
        Stmt::Return(results) if results.is_empty() => {
            out.push_line("return");
        }
        Stmt::Return(results) => {
            out.push_line(&format!("return {}", join_exprs(results)?));
        }
        Stmt::Expr(expr) => {
            out.push_line(&expr_to_string(expr)?);
        }
    }
    Ok(())
}

fn print_gen_decl(out: &mut CodeBuilder, decl: &GenDecl) -> Result<()> {
    if let Some(doc) = &decl.doc {
        for line in &doc.list {
            out.push_line(line);
        }
    }

    let keyword = decl.tok.as_str();
    if decl.lparen || decl.specs.len() > 1 {
        out.push_line(&format!("{keyword} (")).push_indent();
        for spec in &decl.specs {
            out.push_line(&spec_to_string(spec)?);
        }
        out.push_dedent().push_line(")");
    } else {
        let spec = decl.specs.first().ok_or(PrintError::EmptyDecl(keyword))?;
        out.push_line(&format!("{keyword} {}", spec_to_string(spec)?));
    }
    Ok(())
}

fn print_func_decl(out: &mut CodeBuilder, decl: &FuncDecl) -> Result<()> {
    if let Some(doc) = &decl.doc {
        for line in &doc.list {
            out.push_line(line);
        }
    }

    let recv = match &decl.recv {
        Some(recv) => format!("({}) ", field_to_string(recv)?),
        None => String::new(),
    };
    let params = decl
        .params
        .iter()
        .map(field_to_string)
        .collect::<Result<Vec<_>>>()?
        .join(", ");
    let results = match decl.results.as_slice() {
        [] => String::new(),
        [Field { name: None, ty }] => format!(" {}", type_to_string(ty)?),
        fields => {
            let list = fields
                .iter()
                .map(field_to_string)
                .collect::<Result<Vec<_>>>()?;
            format!(" ({})", list.join(", "))
        }
    };

    out.push_line(&format!(
        "func {recv}{}({params}){results} {{",
        ident(&decl.name)?
    ));
    out.push_indent();
    for stmt in &decl.body {
        print_stmt(out, stmt)?;
    }
    out.push_dedent().push_line("}");
    Ok(())
}

fn spec_to_string(spec: &Spec) -> Result<String> {
    Ok(match spec {
        Spec::Import(import) => {
            if import.path.is_empty() {
                return Err(PrintError::EmptyImportPath);
            }
            match &import.name {
                Some(name) => format!("{} \"{}\"", ident(name)?, import.path),
                None => format!("\"{}\"", import.path),
            }
        }
        Spec::Value(value) => {
            let names = value
                .names
                .iter()
                .map(|n| ident(n))
                .collect::<Result<Vec<_>>>()?;
            if names.is_empty() {
                return Err(PrintError::EmptyIdent);
            }
            let mut line = names.join(", ");
            if let Some(ty) = &value.ty {
                line.push(' ');
                line.push_str(&type_to_string(ty)?);
            }
            if !value.values.is_empty() {
                line.push_str(" = ");
                line.push_str(&join_exprs(&value.values)?);
            }
            line
        }
        Spec::Type(spec) => format!("{} {}", ident(&spec.name)?, type_to_string(&spec.ty)?),
    })
}

fn field_to_string(field: &Field) -> Result<String> {
    let ty = type_to_string(&field.ty)?;
    Ok(match &field.name {
        Some(name) => format!("{} {ty}", ident(name)?),
        None => ty,
    })
}

fn join_exprs(exprs: &[Expr]) -> Result<String> {
    Ok(exprs
        .iter()
        .map(expr_to_string)
        .collect::<Result<Vec<_>>>()?
        .join(", "))
}

fn ident(name: &str) -> Result<&str> {
    if name.is_empty() {
        Err(PrintError::EmptyIdent)
    } else {
        Ok(name)
    }
}
