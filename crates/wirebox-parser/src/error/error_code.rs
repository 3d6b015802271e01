//! Error codes for the Wirebox diagnostic system.
//!
//! Codes are organized by phase:
//! - `E0xx` - Scanner errors
//! - `W1xx` - Extraction warnings

use std::fmt;

/// Codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Scanner Errors (E0xx)
    // =========================================================================
    /// Unexpected character.
    ///
    /// A character appeared in a state where it is not permitted, such as
    /// text or a newline before the outermost block.
    E001,

    /// Unterminated block.
    ///
    /// The input ended before a block was closed. Only reported in strict
    /// mode; the lenient scanner returns the partial tree instead.
    E002,

    /// Nesting too deep.
    ///
    /// Blocks are nested deeper than the configured maximum.
    E003,

    /// Empty document.
    ///
    /// The input contains no block at all. Only reported in strict mode.
    E004,

    // =========================================================================
    // Extraction Warnings (W1xx)
    // =========================================================================
    /// Unrecognized block body.
    ///
    /// A block body is not of the form `color: text`; the block is drawn
    /// without color or text.
    W100,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            ErrorCode::W100 => "W100",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unexpected character",
            ErrorCode::E002 => "unterminated block",
            ErrorCode::E003 => "nesting too deep",
            ErrorCode::E004 => "empty document",
            ErrorCode::W100 => "unrecognized block body",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::W100.to_string(), "W100");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E002.description(), "unterminated block");
        assert_eq!(ErrorCode::W100.description(), "unrecognized block body");
    }
}
