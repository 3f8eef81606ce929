//! Error types used in the library.
//!
//! Each stage of generating a route for a file has an error enum, and each is wrapped by [ErrorKind].
//! Errors from the filesystem keep the [std::io::ErrorKind] of the failure, so all errors are `Clone` and `Eq`.
//!
//! A [GenerationError] pairs an [ErrorKind] with the path the error concerns.
//  Throughout the library err::{self} is used to prefix use of the types with `err::`.

use std::path::PathBuf;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Directory(DirectoryError),
    Read(ReadError),
    Parse(ParseError),
    Sample(SampleError),
    Write(WriteError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directory(e) => write!(f, "{e}"),
            Self::Read(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Sample(e) => write!(f, "{e}"),
            Self::Write(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when listing the directory of constraint-graph files.
///
/// These are fatal regardless of [FailurePolicy](crate::config::FailurePolicy).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DirectoryError {
    /// No directory was found.
    Missing,

    /// The directory could not be listed, or an entry of the directory could not be read.
    Listing(std::io::ErrorKind),
}

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "The directory does not exist."),
            Self::Listing(kind) => write!(f, "Failed to list the directory: {kind}."),
        }
    }
}

impl From<DirectoryError> for ErrorKind {
    fn from(e: DirectoryError) -> Self {
        ErrorKind::Directory(e)
    }
}

/// Errors when reading a constraint-graph file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReadError {
    /// The file could not be opened.
    FailedToOpen(std::io::ErrorKind),

    /// Some line of the file could not be read.
    /// Lines are counted from one.
    Line(usize, std::io::ErrorKind),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FailedToOpen(kind) => write!(f, "Failed to open file: {kind}."),
            Self::Line(line, kind) => write!(f, "Failed to read line {line}: {kind}."),
        }
    }
}

impl From<ReadError> for ErrorKind {
    fn from(e: ReadError) -> Self {
        ErrorKind::Read(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The last token of an atom mapping is not an integer.
    /// The line, counted from one, and the token.
    AtomMapping(usize, String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomMapping(line, token) => {
                write!(f, "Line {line}: expected an atom, found '{token}'.")
            }
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when drawing a route.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SampleError {
    /// No atoms were found, so no assumption may be drawn.
    EmptyPool,

    /// The probability of a positive assumption is not within [0, 1].
    InvalidLean,
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPool => write!(f, "No atom mappings were found."),
            Self::InvalidLean => write!(f, "The polarity lean is not a probability."),
        }
    }
}

impl From<SampleError> for ErrorKind {
    fn from(e: SampleError) -> Self {
        ErrorKind::Sample(e)
    }
}

/// Errors when writing a route.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WriteError {
    /// The file could not be created, or truncated.
    FailedToCreate(std::io::ErrorKind),

    /// Writing to the file failed.
    FailedToWrite(std::io::ErrorKind),
}

impl std::fmt::Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FailedToCreate(kind) => write!(f, "Failed to create file: {kind}."),
            Self::FailedToWrite(kind) => write!(f, "Failed to write file: {kind}."),
        }
    }
}

impl From<WriteError> for ErrorKind {
    fn from(e: WriteError) -> Self {
        ErrorKind::Write(e)
    }
}

/// An error, together with the path of the directory or file it concerns.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenerationError {
    pub path: PathBuf,
    pub kind: ErrorKind,
}

impl GenerationError {
    pub fn new(path: impl Into<PathBuf>, kind: impl Into<ErrorKind>) -> Self {
        Self {
            path: path.into(),
            kind: kind.into(),
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.path, self.kind)
    }
}

impl std::error::Error for GenerationError {}
