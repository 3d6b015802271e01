//! The presentation type for scanner errors and extraction warnings.

use std::fmt;

use crate::{
    error::{Severity, error_code::ErrorCode, label::Label},
    span::Span,
};

/// A diagnostic message with source location information.
///
/// Carries a severity, an optional code, a message, any number of labelled
/// spans and optional help text. The CLI renders diagnostics through miette.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use wirebox_parser::error::{Diagnostic, ErrorCode};
    /// # use wirebox_parser::Span;
    ///
    /// let diag = Diagnostic::error("nesting too deep")
    ///     .with_code(ErrorCode::E003)
    ///     .with_label(Span::new(40..41), "block opened here");
    /// assert_eq!(diag.to_string(), "error[E003]: nesting too deep");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Returns the severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Returns the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns all labels.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Returns the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Sets the code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Adds a primary label.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Adds a secondary label.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Sets the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "error[E001]: message" or "warning: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_builder_chain() {
        let diag = Diagnostic::error("unterminated block")
            .with_code(ErrorCode::E002)
            .with_label(Span::new(30..30), "input ends here")
            .with_secondary_label(Span::new(0..1), "block opened here")
            .with_help("add the missing `]`");

        assert!(diag.severity().is_error());
        assert_eq!(diag.code(), Some(ErrorCode::E002));
        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(diag.labels()[1].is_secondary());
        assert_eq!(diag.help(), Some("add the missing `]`"));
    }

    #[test]
    fn test_diagnostic_display_without_code() {
        let diag = Diagnostic::warning("block body is not `color: text`");

        assert!(diag.severity().is_warning());
        assert_eq!(diag.to_string(), "warning: block body is not `color: text`");
    }

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = Diagnostic::warning("block body is not `color: text`").with_code(ErrorCode::W100);

        assert_eq!(
            diag.to_string(),
            "warning[W100]: block body is not `color: text`"
        );
    }
}
