//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A message attached to a span of the source document.
///
/// The primary label marks where the problem is; secondary labels point at
/// related places, such as the opening bracket of a block that never closed.
///
/// ```text
/// error[E002]: unterminated block
///   --> frame.blk:1:1
///    |
///  1 | [lightgray: Frame
///    | - block opened here
///  ...
///  4 |     [goldenrod: OK Button
///    |                          ^ input ends here
/// ```
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Creates a primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Creates a secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Returns the labelled span.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` for a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Returns `true` for a secondary label.
    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}
