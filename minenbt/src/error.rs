//! Contains the Error and Result type used throughout the crate.

/// Various errors that can occur while decoding, encoding or compressing NBT.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The input ended part way through a tag.
    #[error("eof: unexpectedly ran out of input")]
    UnexpectedEof,

    /// A tag id outside of `0..=12` was found.
    #[error("invalid nbt tag value: {0}")]
    InvalidTagId(u8),

    /// A string was not valid modified UTF-8. Contains the offending bytes.
    #[error("invalid nbt string: nonunicode: {}", String::from_utf8_lossy(.0))]
    InvalidString(Vec<u8>),

    /// A payload is too long for the width of its length prefix.
    #[error("overflow: {0}")]
    Overflow(String),

    /// The structure of the data is wrong, for example a list with elements
    /// of mixed kinds.
    #[error("invalid nbt shape: {0}")]
    Shape(String),

    /// A gzip or zlib stream could not be inflated or deflated.
    #[error("compression error: {0}")]
    Compression(String),

    /// Nesting went deeper than the configured maximum.
    #[error("nesting depth exceeded maximum of {0}")]
    DepthExceeded(usize),

    #[error("io error: {0}")]
    Io(std::io::Error),
}

/// The kind of an [`Error`], without any of its data. Handy for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    UnexpectedEof,
    InvalidTagId,
    InvalidString,
    Overflow,
    Shape,
    Compression,
    DepthExceeded,
    Io,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnexpectedEof => ErrorKind::UnexpectedEof,
            Error::InvalidTagId(_) => ErrorKind::InvalidTagId,
            Error::InvalidString(_) => ErrorKind::InvalidString,
            Error::Overflow(_) => ErrorKind::Overflow,
            Error::Shape(_) => ErrorKind::Shape,
            Error::Compression(_) => ErrorKind::Compression,
            Error::DepthExceeded(_) => ErrorKind::DepthExceeded,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn overflow(msg: impl Into<String>) -> Error {
        Error::Overflow(msg.into())
    }

    pub(crate) fn shape(msg: impl Into<String>) -> Error {
        Error::Shape(msg.into())
    }

    pub(crate) fn compression(e: std::io::Error) -> Error {
        Error::Compression(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::UnexpectedEof,
            _ => Error::Io(e),
        }
    }
}
