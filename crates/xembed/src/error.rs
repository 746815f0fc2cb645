//! Error types for xembed

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// Position in source markup
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

/// Span representing a range in source markup
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
    /// Path did not resolve to a readable file
    NotFound,
    /// Read, write, or directory-creation failure
    Io,
    /// Text content that is not valid base64
    MalformedPayload,
    /// Malformed markup
    InvalidToken,
    /// Input ended inside an element or attribute
    UnexpectedEof,
    /// Closing tag does not match the open element
    MismatchedTag,
    /// Attribute name repeated on one element
    DuplicateAttribute,
    /// ElementSpec without a tag name
    MissingTag,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::Io => write!(f, "i/o failure"),
            Self::MalformedPayload => write!(f, "malformed payload"),
            Self::InvalidToken => write!(f, "invalid token"),
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::MismatchedTag => write!(f, "mismatched closing tag"),
            Self::DuplicateAttribute => write!(f, "duplicate attribute"),
            Self::MissingTag => write!(f, "missing element tag"),
        }
    }
}

/// Main error type for xembed
#[derive(Error, Clone, Debug, PartialEq)]
#[error("error at {}: {}", .span.start, .message)]
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

    /// Create error at specific position
    pub fn at(kind: ErrorKind, offset: usize, line: u32, col: u32) -> Self {
        let pos = Pos::new(offset, line, col);
        Self::new(kind, Span::new(pos, pos))
    }

    /// Missing-file error for `path`
    pub fn not_found(path: &Path) -> Self {
        Self::with_message(
            ErrorKind::NotFound,
            Span::empty(),
            format!("file not found: {}", path.display()),
        )
    }

    /// Generic i/o error for `path`
    pub fn io(path: &Path, err: &std::io::Error) -> Self {
        Self::with_message(
            ErrorKind::Io,
            Span::empty(),
            format!("{}: {err}", path.display()),
        )
    }

    /// Invalid base64 content
    pub fn malformed_payload(detail: impl fmt::Display) -> Self {
        Self::with_message(
            ErrorKind::MalformedPayload,
            Span::empty(),
            format!("malformed payload: {detail}"),
        )
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
}

/// Result type alias for xembed
pub type Result<T> = std::result::Result<T, Error>;
