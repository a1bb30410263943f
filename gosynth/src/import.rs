//! Import specifications.

use gosynth_syntax::ast;

/// A single import: `"net/http"` or `alias "net/http"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    node: ast::ImportSpec,
}

impl ImportSpec {
    /// Import `path`. The path is given without quotes.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            node: ast::ImportSpec {
                name: None,
                path: path.into(),
            },
        }
    }

    /// Bind the package under a local name (`_` and `.` included).
    pub fn alias(mut self, name: impl Into<String>) -> Self {
        self.node.name = Some(name.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.node.path
    }

    pub fn name(&self) -> Option<&str> {
        self.node.name.as_deref()
    }

    pub(crate) fn into_spec(self) -> ast::Spec {
        ast::Spec::Import(self.node)
    }
}
