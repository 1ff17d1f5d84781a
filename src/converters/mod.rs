//! Semantic HTML conversion.
//!
//! This module renders extracted page content to HTML:
//! - [`HtmlConverter`] renders one page's block/line/run structure to an
//!   HTML fragment, factoring repeated styles through a [`crate::style::StyleRegistry`].
//! - [`DocumentAssembler`] clamps the requested page range, renders pages in
//!   order, and assembles the head CSS and body fragments into one document.
//!
//! # Examples
//!
//! ```
//! use pdf2html::converters::{DocumentAssembler, PageRange, RenderOptions};
//! use pdf2html::extract::SpanExtractor;
//! use pdf2html::layout::{Block, TextRun};
//!
//! struct OnePage;
//!
//! impl SpanExtractor for OnePage {
//!     fn page_count(&self) -> usize {
//!         1
//!     }
//!     fn page_blocks(&self, _page_index: usize) -> Vec<Block> {
//!         vec![Block::from_runs(vec![TextRun::plain("Hello")])]
//!     }
//! }
//!
//! let assembler = DocumentAssembler::new(RenderOptions::default());
//! let document = assembler.assemble(&OnePage, &PageRange::full());
//! assert!(document.to_html().contains("Hello"));
//! ```

pub mod assembler;
pub mod html;

// Re-export main types
pub use assembler::{DocumentAssembler, PageRange, RenderMetrics, RenderedDocument};
pub use html::{escape_html, HtmlConverter};

use serde::{Deserialize, Serialize};

/// Options controlling how page content is rendered to HTML.
///
/// The four style flags select which visual attributes survive
/// canonicalization and whether repeated styles are factored into CSS
/// classes or written inline on each run.
///
/// # Examples
///
/// ```
/// use pdf2html::converters::RenderOptions;
///
/// // Default options
/// let opts = RenderOptions::default();
///
/// // Inline styles, no link injection
/// let opts = RenderOptions {
///     use_css_classes: false,
///     inject_links: false,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Render text colors.
    ///
    /// Pure black is treated as the uninformative default and is never
    /// emitted, regardless of this flag.
    pub with_colors: bool,

    /// Derive bold/italic from font names and render them.
    pub with_font_style: bool,

    /// Render font sizes (rounded to integer px).
    ///
    /// Off by default: documents with many slightly different sizes produce
    /// one style per size, which defeats deduplication.
    pub with_font_size: bool,

    /// Factor repeated styles into shared CSS classes.
    ///
    /// When true, styled runs reference a class interned in the document's
    /// style registry and the assembled document carries a `<style>` head
    /// block. When false, the resolved style string is written inline on
    /// each run and the registry is bypassed entirely. This is a
    /// caller-selected mode, not a fallback.
    pub use_css_classes: bool,

    /// Convert URLs and e-mail addresses in text to hyperlinks.
    pub inject_links: bool,
}

impl Default for RenderOptions {
    /// Default rendering options.
    ///
    /// Defaults:
    /// - with_colors: true
    /// - with_font_style: true
    /// - with_font_size: false
    /// - use_css_classes: true
    /// - inject_links: true
    fn default() -> Self {
        Self {
            with_colors: true,
            with_font_style: true,
            with_font_size: false,
            use_css_classes: true,
            inject_links: true,
        }
    }
}

impl RenderOptions {
    /// Render plain text only: no colors, weights, slants, or sizes.
    pub fn plain_text() -> Self {
        Self {
            with_colors: false,
            with_font_style: false,
            with_font_size: false,
            ..Default::default()
        }
    }

    /// Enable or disable CSS class factoring (builder pattern).
    pub fn with_css_classes(mut self, enable: bool) -> Self {
        self.use_css_classes = enable;
        self
    }

    /// Enable or disable link injection (builder pattern).
    pub fn with_link_injection(mut self, enable: bool) -> Self {
        self.inject_links = enable;
        self
    }
}
