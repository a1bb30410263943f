//! Canonical import ordering.
//!
//! Specs are ordered by path, then by local name, and exact duplicates are
//! removed. Generated blocks carry no blank-line groups, so each import
//! declaration is sorted as a single run.

use std::cmp::Ordering;

use crate::ast::{Decl, DeclTok, File, ImportSpec, Spec};

/// Sort every import declaration of `file` in place.
pub fn sort_imports(file: &mut File) {
    for decl in &mut file.decls {
        match decl {
            Decl::Gen(g) if g.tok == DeclTok::Import => sort_import_specs(&mut g.specs),
            _ => {}
        }
    }
}

/// Sort and deduplicate a single import spec list in place.
///
/// Non-import specs are left where they are relative to each other and kept
/// after the imports.
pub fn sort_import_specs(specs: &mut Vec<Spec>) {
    specs.sort_by(compare_specs);
    specs.dedup_by(|a, b| match (a, b) {
        (Spec::Import(a), Spec::Import(b)) => a == b,
        _ => false,
    });
}

fn compare_specs(a: &Spec, b: &Spec) -> Ordering {
    match (a, b) {
        (Spec::Import(a), Spec::Import(b)) => compare_imports(a, b),
        (Spec::Import(_), _) => Ordering::Less,
        (_, Spec::Import(_)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

fn compare_imports(a: &ImportSpec, b: &ImportSpec) -> Ordering {
    a.path
        .cmp(&b.path)
        .then_with(|| a.name.as_deref().cmp(&b.name.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::GenDecl;

    fn import(path: &str) -> Spec {
        Spec::Import(ImportSpec {
            name: None,
            path: path.to_string(),
        })
    }

    fn aliased(name: &str, path: &str) -> Spec {
        Spec::Import(ImportSpec {
            name: Some(name.to_string()),
            path: path.to_string(),
        })
    }

    fn paths(specs: &[Spec]) -> Vec<String> {
        specs
            .iter()
            .map(|s| match s {
                Spec::Import(i) => match &i.name {
                    Some(n) => format!("{n} {}", i.path),
                    None => i.path.clone(),
                },
                _ => "<other>".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_sorts_by_path() {
        let mut specs = vec![import("os"), import("fmt"), import("net/http")];
        sort_import_specs(&mut specs);
        assert_eq!(paths(&specs), ["fmt", "net/http", "os"]);
    }

    #[test]
    fn test_alias_breaks_ties() {
        let mut specs = vec![aliased("b", "fmt"), import("fmt"), aliased("a", "fmt")];
        sort_import_specs(&mut specs);
        assert_eq!(paths(&specs), ["fmt", "a fmt", "b fmt"]);
    }

    #[test]
    fn test_removes_exact_duplicates() {
        let mut specs = vec![import("fmt"), import("os"), import("fmt"), aliased("f", "fmt")];
        sort_import_specs(&mut specs);
        assert_eq!(paths(&specs), ["fmt", "f fmt", "os"]);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let mut specs = vec![import("strings"), import("bytes"), import("io")];
        sort_import_specs(&mut specs);
        let once = specs.clone();
        sort_import_specs(&mut specs);
        assert_eq!(specs, once);
    }

    #[test]
    fn test_sort_imports_only_touches_import_decls() {
        let mut imports = GenDecl::new(DeclTok::Import);
        imports.specs = vec![import("os"), import("fmt")];

        let mut file = File::new("main");
        file.decls.push(Decl::Gen(imports));
        file.decls.push(Decl::Gen(GenDecl::new(DeclTok::Var)));

        sort_imports(&mut file);

        let sorted: Vec<&str> = file.imports().map(|i| i.path.as_str()).collect();
        assert_eq!(sorted, ["fmt", "os"]);
        assert!(matches!(&file.decls[1], Decl::Gen(g) if g.tok == DeclTok::Var));
    }
}
