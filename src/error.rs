//! Error types for the conversion library.
//!
//! The rendering core itself is infallible by design: malformed style
//! attributes, out-of-range page requests, and empty documents all degrade
//! locally instead of erroring. These types cover the collaborators whose
//! setup can genuinely fail, such as opening a document in the extractor.

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around the rendering core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The supplied bytes could not be opened as a PDF document.
    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    /// The PDFium library could not be located or bound.
    #[error("Failed to load PDFium library: {0}")]
    PdfiumLoad(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
