//! # pdf2html
//!
//! Convert PDF page content to compact semantic HTML with deduplicated styles.
//!
//! ## Core Features
//!
//! - **Semantic output**: paragraph/line/run nesting preserved as
//!   `<p>`/`<br>`/`<span>` structure, one `<section data-page="…">` per page
//! - **Style factoring**: colors, weights, slants, and sizes canonicalized
//!   into stable style keys and deduplicated into shared `s0, s1, …` CSS
//!   classes (or written inline, per caller-selected mode)
//! - **Degradation over failure**: malformed style attributes, out-of-range
//!   page ranges, and zero-page documents degrade locally; the core never
//!   errors
//! - **Pluggable extraction**: any [`extract::SpanExtractor`] can feed the
//!   renderer; a PDFium-backed extractor ships behind the `pdfium` feature
//! - **HTTP boundary**: an optional `axum` microservice (feature `service`)
//!   accepts inline or remote PDFs and returns the rendered document plus
//!   conversion metrics
//!
//! ## Quick Start
//!
//! ```
//! use pdf2html::converters::{DocumentAssembler, PageRange, RenderOptions};
//! use pdf2html::extract::SpanExtractor;
//! use pdf2html::layout::{Block, RunColor, TextRun};
//!
//! struct Fixture;
//!
//! impl SpanExtractor for Fixture {
//!     fn page_count(&self) -> usize {
//!         1
//!     }
//!     fn page_blocks(&self, _page_index: usize) -> Vec<Block> {
//!         vec![Block::from_runs(vec![
//!             TextRun::plain("Alert").with_color(RunColor::Packed(0xff0000)),
//!         ])]
//!     }
//! }
//!
//! let assembler = DocumentAssembler::new(RenderOptions::default());
//! let document = assembler.assemble(&Fixture, &PageRange::full());
//!
//! assert_eq!(document.metrics.distinct_styles, 1);
//! assert!(document.to_html().contains(".s0{color:#ff0000}"));
//! ```

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Error handling
pub mod error;

// Page content model
pub mod layout;

// Style canonicalization and deduplication
pub mod style;

// Semantic HTML rendering and document assembly
pub mod converters;

// Span extraction collaborator
pub mod extract;

// HTTP conversion service (optional)
#[cfg(feature = "service")]
#[cfg_attr(docsrs, doc(cfg(feature = "service")))]
pub mod service;

// Re-exports
pub use converters::{DocumentAssembler, PageRange, RenderMetrics, RenderOptions, RenderedDocument};
pub use error::{Error, Result};
pub use extract::SpanExtractor;
pub use style::{ResolvedStyle, StyleRegistry};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
