//! Error types for the pdfsnap library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfsnap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during a page export job.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document could not be opened or parsed. Fatal for the whole job;
    /// no pages are attempted.
    #[error("Failed to load document: {0}")]
    Load(String),

    /// The page-range expression produced no valid pages. The job is never
    /// started in this state.
    #[error("Page selection \"{0}\" matches no pages")]
    EmptySelection(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// A single page failed to rasterize. The render loop recovers from this
    /// by skipping the page; it only reaches callers through a backend used
    /// directly.
    #[error("Failed to render page {page}: {reason}")]
    Render {
        /// 1-based page number.
        page: u32,
        /// Backend-reported failure description.
        reason: String,
    },

    /// Error encoding a raster surface to PNG or JPEG.
    #[error("Image encoding error: {0}")]
    Encode(String),

    /// JPEG quality outside `(0, 1]`.
    #[error("Invalid JPEG quality {0} (expected a value in (0, 1])")]
    InvalidQuality(f32),

    /// Error building the zip bundle. Fatal for the export step; not retried.
    #[error("Packaging error: {0}")]
    Package(String),

    /// Nothing to package: the render loop produced zero pages.
    #[error("No pages were rendered; nothing to export")]
    EmptyExport,
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Encode(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Package(err.to_string())
    }
}
