//! Span extraction collaborator.
//!
//! The renderer consumes page content through the [`SpanExtractor`] trait;
//! anything that can report a page count and per-page block/line/run
//! structure can drive a conversion. The production implementation, backed
//! by PDFium, lives in [`pdfium`] behind the `pdfium` feature.

#[cfg(feature = "pdfium")]
#[cfg_attr(docsrs, doc(cfg(feature = "pdfium")))]
pub mod pdfium;

#[cfg(feature = "pdfium")]
pub use pdfium::PdfiumExtractor;

use crate::layout::Block;

/// Source of extracted page content for one document.
///
/// Page indexes are 0-based; the assembler converts from 1-based page
/// numbers. Implementations must be usable from a single conversion call
/// holding an exclusive handle; they are not required to be `Sync`.
pub trait SpanExtractor {
    /// Total number of pages in the document.
    fn page_count(&self) -> usize;

    /// Extract the ordered block/line/run structure of one page.
    ///
    /// Infallible by contract: a page that cannot be parsed yields an empty
    /// block list so one bad page never aborts the whole document.
    /// Out-of-range indexes also yield an empty list.
    fn page_blocks(&self, page_index: usize) -> Vec<Block>;
}
