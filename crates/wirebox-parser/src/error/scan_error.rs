//! Structured scanner failures.

use thiserror::Error;

use crate::{
    error::{Diagnostic, ErrorCode},
    scanner::State,
    span::Span,
};

/// A failure raised by the scanner.
///
/// Every variant that points into the buffer carries the byte offset and,
/// when the offset lies inside the buffer, the 1-based line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A character appeared in a state where it is not permitted.
    #[error("unexpected character {found:?} at offset {offset} {state}")]
    Syntax {
        offset: usize,
        line: Option<usize>,
        state: State,
        found: char,
    },

    /// The input ended with blocks still open (strict mode only).
    #[error("input ends at offset {offset} with {open_blocks} unclosed block(s)")]
    UnterminatedBlock {
        offset: usize,
        line: Option<usize>,
        open_blocks: usize,
    },

    /// A block was opened deeper than the configured limit.
    #[error("block at offset {offset} is nested deeper than {limit} levels")]
    NestingTooDeep {
        offset: usize,
        line: Option<usize>,
        limit: usize,
    },

    /// The input contains no block (strict mode only).
    #[error("document contains no block")]
    EmptyDocument,
}

impl ScanError {
    /// Returns the byte offset the failure refers to.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Syntax { offset, .. }
            | Self::UnterminatedBlock { offset, .. }
            | Self::NestingTooDeep { offset, .. } => Some(*offset),
            Self::EmptyDocument => None,
        }
    }

    /// Returns the 1-based source line the failure refers to.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax { line, .. }
            | Self::UnterminatedBlock { line, .. }
            | Self::NestingTooDeep { line, .. } => *line,
            Self::EmptyDocument => None,
        }
    }

    /// Returns the diagnostic code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Syntax { .. } => ErrorCode::E001,
            Self::UnterminatedBlock { .. } => ErrorCode::E002,
            Self::NestingTooDeep { .. } => ErrorCode::E003,
            Self::EmptyDocument => ErrorCode::E004,
        }
    }

    /// Converts the failure into a labelled diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code().description()).with_code(self.code());
        match self {
            Self::Syntax {
                offset,
                state,
                found,
                ..
            } => {
                let help = match state {
                    State::Out => "a document starts with `[`; only spaces and tabs may precede it",
                    State::InBody | State::NewLine => "remove the character or escape the block",
                };
                diagnostic
                    .with_label(
                        Span::new(*offset..*offset + found.len_utf8()),
                        format!("{found:?} is not allowed {state}"),
                    )
                    .with_help(help)
            }
            Self::UnterminatedBlock {
                offset,
                open_blocks,
                ..
            } => diagnostic
                .with_label(
                    Span::new(*offset..*offset),
                    format!("input ends with {open_blocks} block(s) still open"),
                )
                .with_help("add the missing `]`"),
            Self::NestingTooDeep { offset, limit, .. } => diagnostic
                .with_label(
                    Span::new(*offset..*offset + 1),
                    format!("this block exceeds the nesting limit of {limit}"),
                )
                .with_help("flatten the document or raise `max_depth`"),
            Self::EmptyDocument => diagnostic.with_help("a document starts with `[`"),
        }
    }
}
