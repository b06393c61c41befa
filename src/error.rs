//! Error types for the pptdeck library.

use std::io;
use thiserror::Error;

/// Result type alias for pptdeck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a presentation package.
///
/// Only [`Error::Io`], [`Error::Container`] and [`Error::NoSlidesFound`]
/// escape a full deck parse. Everything else is handled inside a slide
/// by leaving the offending object out.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a readable ZIP archive.
    #[error("ZIP archive error: {0}")]
    Container(String),

    /// A named part does not exist in the package.
    #[error("Part not found: {0}")]
    PartNotFound(String),

    /// Error parsing XML content.
    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    /// The package contains no slide parts.
    #[error("No slides found in presentation")]
    NoSlidesFound,

    /// Error reading or writing a deck snapshot.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Invalid or malformed data in the document.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A background parse task failed to complete.
    #[error("Task failed: {0}")]
    Task(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Container(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::MalformedXml(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Snapshot(err.to_string())
    }
}
