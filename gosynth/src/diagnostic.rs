//! Diagnostics reported while building.
//!
//! Soft failures such as a symbol lookup miss do not stop construction; they
//! are reported to a [`DiagnosticSink`]. The default sink forwards to the
//! `log` facade, and [`DiagnosticCollector`] keeps them in memory.

use std::{cell::RefCell, rc::Rc};

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// What the diagnostic is about (e.g., "package main").
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            location: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

/// Receives diagnostics.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => log::warn!("{}", diagnostic),
            Severity::Info => log::info!("{}", diagnostic),
        }
    }
}

/// Keeps diagnostics in memory. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollector {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::warning("unknown object `x`").at("package main");
        assert_eq!(diag.to_string(), "warning: unknown object `x` (at package main)");
        assert_eq!(Diagnostic::info("done").to_string(), "info: done");
    }

    #[test]
    fn test_collector_clones_share_storage() {
        let collector = DiagnosticCollector::new();
        let handle = collector.clone();

        collector.report(Diagnostic::warning("first"));
        assert_eq!(handle.diagnostics().len(), 1);

        handle.clear();
        assert!(collector.is_empty());
    }

    #[test]
    fn test_diagnostic_serializes() {
        let diag = Diagnostic::warning("miss").at("package main");
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["severity"], "Warning");
        assert_eq!(json["message"], "miss");
        assert_eq!(json["location"], "package main");
    }

    #[test]
    fn test_log_sink_accepts_all_severities() {
        LogSink.report(Diagnostic::warning("w"));
        LogSink.report(Diagnostic::info("i"));
    }
}
