//! Error adapter for converting WireboxError to miette diagnostics.
//!
//! This module provides the bridge between the library's error and
//! diagnostic types and miette's rich formatting used in the CLI. Scanner
//! failures and extraction warnings are both rendered with a source snippet.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use wirebox::WireboxError;
use wirebox_parser::error::{Diagnostic, Severity};

/// Adapter for a single wirebox diagnostic.
///
/// This adapter wraps a [`Diagnostic`] and implements [`MietteDiagnostic`]
/// to enable rich error formatting in the CLI.
pub struct DiagnosticAdapter<'a> {
    /// The wrapped diagnostic
    diag: Diagnostic,
    /// Source code for displaying snippets
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.diag.severity() {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Adapter for non-diagnostic [`WireboxError`] variants.
///
/// This adapter handles errors that don't have rich diagnostic information,
/// such as I/O and export errors.
pub struct ErrorAdapter<'a>(pub &'a WireboxError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            WireboxError::Io(_) => "wirebox::io",
            WireboxError::Parse { .. } => return None,
            WireboxError::Export(_) => "wirebox::export",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a single diagnostic or a non-diagnostic error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A rich diagnostic with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn severity(&self) -> Option<miette::Severity> {
        match self {
            Reportable::Diagnostic(d) => d.severity(),
            Reportable::Error(e) => e.severity(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a wirebox [`Span`](wirebox_parser::Span) to a miette [`SourceSpan`].
fn span_to_miette(span: wirebox_parser::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`WireboxError`] into a list of reportable errors.
///
/// A [`WireboxError::Parse`] becomes the scanner error's diagnostic, with
/// the source attached. Other variants are reported as plain errors.
pub fn to_reportables(err: &WireboxError) -> Vec<Reportable<'_>> {
    match err {
        WireboxError::Parse {
            err: scan_err,
            src,
        } => vec![Reportable::Diagnostic(DiagnosticAdapter::new(
            scan_err.to_diagnostic(),
            src,
        ))],
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

/// Convert extraction warnings into reportables over `src`.
pub fn warnings_to_reportables<'a>(
    warnings: &[Diagnostic],
    src: &'a str,
) -> Vec<Reportable<'a>> {
    warnings
        .iter()
        .map(|warning| Reportable::Diagnostic(DiagnosticAdapter::new(warning.clone(), src)))
        .collect()
}

/// Render a reportable with miette's graphical handler.
pub fn render_report(reportable: &Reportable<'_>) -> String {
    let reporter = miette::GraphicalReportHandler::new();
    let mut writer = String::new();
    if reporter.render_report(&mut writer, reportable).is_err() {
        // Writing to a String only fails if a Display impl fails.
        return reportable.to_string();
    }
    writer
}

#[cfg(test)]
mod tests {
    use wirebox_parser::{
        Span, State,
        error::{ErrorCode, ScanError},
    };

    use super::*;

    #[test]
    fn test_parse_error_becomes_diagnostic() {
        let scan_err = ScanError::Syntax {
            offset: 4,
            line: Some(1),
            state: State::Out,
            found: 'x',
        };
        let err = WireboxError::new_parse_error(scan_err, "    x[a]");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Diagnostic(d) => {
                assert_eq!(d.to_string(), "unexpected character");
                assert_eq!(d.code().map(|c| c.to_string()), Some("E001".to_string()));
                assert_eq!(d.severity(), Some(miette::Severity::Error));
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_non_parse_error() {
        let err = WireboxError::Io(std::io::Error::other("disk full"));

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "I/O error: disk full");
                assert_eq!(e.code().map(|c| c.to_string()), Some("wirebox::io".to_string()));
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_warnings_keep_severity() {
        let warnings = vec![
            Diagnostic::warning("unrecognized block body")
                .with_code(ErrorCode::W100)
                .with_label(Span::new(7..13), "drawn without color or text"),
        ];

        let reportables = warnings_to_reportables(&warnings, "[a: x [oops]]");

        assert_eq!(reportables.len(), 1);
        assert_eq!(reportables[0].severity(), Some(miette::Severity::Warning));
    }

    #[test]
    fn test_all_labels_returned() {
        let diag = Diagnostic::error("error with labels")
            .with_label(Span::new(0..5), "primary label")
            .with_secondary_label(Span::new(10..15), "secondary label");

        let adapter = DiagnosticAdapter::new(diag, "some source code");

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].label(), Some("primary label"));
        assert!(labels[0].primary());
        assert_eq!(labels[1].label(), Some("secondary label"));
        assert!(!labels[1].primary());
    }

    #[test]
    fn test_render_report_includes_snippet() {
        let diag = Diagnostic::error("unexpected character")
            .with_code(ErrorCode::E001)
            .with_label(Span::new(4..5), "not allowed here");
        let reportable = Reportable::Diagnostic(DiagnosticAdapter::new(diag, "[a] x"));

        let report = render_report(&reportable);
        assert!(report.contains("unexpected character"));
        assert!(report.contains("not allowed here"));
    }
}
