//! Parse error types
//!
//! A [`ParseError`] pairs an [`ErrorKind`] with the byte offset of the fault.
//! The parser never formats diagnostics itself; callers map the offset back to
//! a line and column with [`ParseError::location`].

use crate::parser::ast::SourceLocation;
use std::fmt;

/// Kinds of parse failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A `$(` or `${` never reached its matching closer
    UnterminatedReference,

    /// References nested deeper than the parser's configured bound
    NestingTooDeep,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnterminatedReference => write!(f, "unterminated variable reference"),
            ErrorKind::NestingTooDeep => write!(f, "references nested too deeply"),
        }
    }
}

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ErrorKind,
    /// Byte offset of the `$` that opened the offending reference
    pub offset: usize,
}

impl ParseError {
    pub fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// Map the error offset to a line and column in `input`
    pub fn location(&self, input: &[u8]) -> SourceLocation {
        SourceLocation::from_offset(input, self.offset)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error at offset {}: {}", self.offset, self.kind)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ParseError::new(ErrorKind::UnterminatedReference, 4);
        assert_eq!(
            err.to_string(),
            "Parse error at offset 4: unterminated variable reference"
        );
    }

    #[test]
    fn test_location() {
        let err = ParseError::new(ErrorKind::NestingTooDeep, 6);
        let loc = err.location(b"a = 1\nb$(c");
        assert_eq!(loc, SourceLocation::new(2, 1));
    }
}
