//! Collector for non-fatal problems found while scanning catalogs.
//!
//! A malformed template must never abort a scan, but its existence should
//! still be reportable. Scans push into a [`Diagnostics`] value; callers
//! decide whether to surface it (verbose mode) or drop it silently.

#[derive(Debug, Clone, Copy)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Diagnostic {
    /// The catalog root, template directory, or file the problem concerns.
    pub source: String,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push_error(&mut self, source: impl Into<String>, message: impl Into<String>) {
        let diagnostic =
            Diagnostic { source: source.into(), message: message.into(), severity: Severity::Error };
        self.errors.push(diagnostic);
    }

    pub fn push_warning(&mut self, source: impl Into<String>, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            source: source.into(),
            message: message.into(),
            severity: Severity::Warning,
        };
        self.warnings.push(diagnostic);
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    #[allow(dead_code)]
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn emit(&self) {
        for diagnostic in &self.errors {
            eprintln!("[ERROR] {}: {}", diagnostic.source, diagnostic.message);
        }
        for diagnostic in &self.warnings {
            eprintln!("[WARN] {}: {}", diagnostic.source, diagnostic.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_errors_and_warnings_separately() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.push_error("/catalog/broken", "template.yml: missing field `version`");
        diagnostics.push_warning("/catalog", "no template directories found");
        diagnostics.push_error("/catalog/worse", "unreadable template.yml");

        assert_eq!(diagnostics.error_count(), 2);
        assert_eq!(diagnostics.warning_count(), 1);
        assert!(diagnostics.has_errors());
        assert!(diagnostics.has_warnings());
        assert_eq!(diagnostics.errors()[0].source, "/catalog/broken");
    }

    #[test]
    fn fresh_collector_is_clean() {
        let diagnostics = Diagnostics::default();
        assert_eq!(diagnostics.error_count(), 0);
        assert!(!diagnostics.has_errors());
        assert!(!diagnostics.has_warnings());
    }
}
