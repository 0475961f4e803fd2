//! Error types for xmlbind

use std::fmt;
use thiserror::Error;

/// Position in source input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in source input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }
}

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidToken,
    UnexpectedEof,
    MismatchedTag,
    DuplicateAttribute { name: String },
    InvalidEntity,
    InvalidUtf8,
    TypeCoercion { field: String, expected: String },
    UnknownField { name: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken => write!(f, "invalid token"),
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::MismatchedTag => write!(f, "mismatched closing tag"),
            Self::DuplicateAttribute { name } => {
                write!(f, "duplicate attribute: {name}")
            }
            Self::InvalidEntity => write!(f, "invalid xml entity"),
            Self::InvalidUtf8 => write!(f, "invalid utf-8"),
            Self::TypeCoercion { field, expected } => {
                write!(f, "cannot coerce value for field {field} into {expected}")
            }
            Self::UnknownField { name } => write!(f, "unknown field: {name}"),
        }
    }
}

/// Main error type for xmlbind
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create error at specific position
    pub fn at(kind: ErrorKind, offset: usize, line: u32, col: u32) -> Self {
        let pos = Pos::new(offset, line, col);
        Self::new(kind, Span::new(pos, pos))
    }

    /// Create a coercion error for a named field
    pub fn coercion(field: &str, expected: &str) -> Self {
        Self::new(
            ErrorKind::TypeCoercion {
                field: field.to_string(),
                expected: expected.to_string(),
            },
            Span::empty(),
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error at {}: {}", self.span.start, self.message)
    }
}

/// Result type alias for xmlbind
pub type Result<T> = std::result::Result<T, Error>;
