//! Error types for presentation image extraction.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during image extraction and analysis.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read the input file or write an extracted image.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The archive is missing, unreadable, or not a valid ZIP container.
    #[error("Archive error: {0}")]
    ArchiveError(String),

    /// A single slide's XML could not be decoded or parsed.
    ///
    /// Recoverable: the analyzer records the slide as skipped and
    /// continues with the remaining slides.
    #[error("Slide parsing error: {0}")]
    SlideParseError(String),
}
