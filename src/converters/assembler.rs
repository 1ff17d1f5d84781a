//! Document assembly.
//!
//! Clamps the requested page range against the document's actual page
//! count, renders each page through the semantic renderer with one
//! document-wide style registry, and concatenates the optional `<style>`
//! head with the page fragments into a complete HTML document.

use crate::converters::{HtmlConverter, RenderOptions};
use crate::extract::SpanExtractor;
use crate::style::StyleRegistry;
use serde::Serialize;

/// A requested page range, 1-based and inclusive on both ends.
///
/// Unset bounds default to the first and last page respectively. The range
/// is clamped against the actual page count before rendering; an
/// out-of-bounds or inverted request never fails, it is adjusted to the
/// nearest valid non-empty range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRange {
    /// First page to render (1-based, inclusive). `None` means page 1.
    pub from: Option<usize>,
    /// Last page to render (1-based, inclusive). `None` means the last page.
    pub to: Option<usize>,
}

impl PageRange {
    /// The full document.
    pub fn full() -> Self {
        Self::default()
    }

    /// An explicit range.
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Clamp this range against a document's page count.
    ///
    /// Returns the effective `(from, to)` with `1 <= from <= to <= page_count`,
    /// or `None` when the document has no pages. A request entirely out of
    /// bounds clamps to the nearest valid single-page range; an inverted
    /// request collapses to `(from, from)` after clamping.
    pub fn resolve(&self, page_count: usize) -> Option<(usize, usize)> {
        if page_count == 0 {
            return None;
        }
        let from = self.from.unwrap_or(1).clamp(1, page_count);
        let to = self.to.unwrap_or(page_count).min(page_count).max(from);
        Some((from, to))
    }
}

/// Per-conversion metrics, returned alongside the rendered document.
///
/// For observability only; callers must never branch on these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenderMetrics {
    /// Number of pages rendered.
    pub pages_rendered: usize,
    /// Number of distinct styles interned (0 in inline mode).
    pub distinct_styles: usize,
    /// Effective first page after clamping (0 for an empty document).
    pub from_page: usize,
    /// Effective last page after clamping (0 for an empty document).
    pub to_page: usize,
}

/// The result of one document conversion.
///
/// Owned exclusively by one conversion call and discarded once the response
/// is produced; nothing in here is shared across conversions.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// `(class_id, canonical_key)` pairs in first-seen order.
    ///
    /// Empty in inline mode or when nothing was styled.
    pub head_css: Vec<(String, String)>,
    /// One HTML fragment per rendered page, in ascending page order.
    pub body_fragments: Vec<String>,
    /// The source document's total page count.
    pub page_count: usize,
    /// Conversion metrics.
    pub metrics: RenderMetrics,
}

impl RenderedDocument {
    /// Assemble the complete HTML document.
    ///
    /// The head carries a `<style>` block with one rule per interned class,
    /// in first-seen order, only when at least one class was interned.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<html><head><meta charset=\"utf-8\">");
        if !self.head_css.is_empty() {
            html.push_str("<style>");
            for (class_id, key) in &self.head_css {
                html.push_str(&format!(".{}{{{}}}", class_id, key));
            }
            html.push_str("</style>");
        }
        html.push_str("</head><body>");
        for fragment in &self.body_fragments {
            html.push('\n');
            html.push_str(fragment);
        }
        html.push_str("\n</body></html>");
        html
    }
}

/// Orchestrates per-page rendering into one document.
///
/// Stateless across conversions: every [`assemble`](Self::assemble) call
/// constructs a fresh [`StyleRegistry`], so concurrent conversions are
/// fully isolated and no class identifiers leak between requests.
#[derive(Debug, Default)]
pub struct DocumentAssembler {
    options: RenderOptions,
    converter: HtmlConverter,
}

impl DocumentAssembler {
    /// Create an assembler with the given render options.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            converter: HtmlConverter::new(),
        }
    }

    /// Render the requested page range of a document.
    ///
    /// Pages render strictly in ascending order, each exactly once, sharing
    /// one registry so identical styles on different pages collapse to one
    /// class. A document with zero pages yields an empty, valid result
    /// rather than an error.
    pub fn assemble(&self, extractor: &dyn SpanExtractor, range: &PageRange) -> RenderedDocument {
        let page_count = extractor.page_count();

        let Some((from, to)) = range.resolve(page_count) else {
            return RenderedDocument {
                head_css: Vec::new(),
                body_fragments: Vec::new(),
                page_count,
                metrics: RenderMetrics::default(),
            };
        };

        let mut registry = StyleRegistry::new();
        let mut body_fragments = Vec::with_capacity(to - from + 1);

        for page_number in from..=to {
            let blocks = extractor.page_blocks(page_number - 1);
            body_fragments.push(self.converter.render_page(
                page_number,
                &blocks,
                &self.options,
                &mut registry,
            ));
        }

        let head_css = if self.options.use_css_classes {
            registry
                .rules()
                .map(|(class_id, key)| (class_id.to_string(), key.to_string()))
                .collect()
        } else {
            Vec::new()
        };

        let metrics = RenderMetrics {
            pages_rendered: body_fragments.len(),
            distinct_styles: registry.len(),
            from_page: from,
            to_page: to,
        };

        RenderedDocument {
            head_css,
            body_fragments,
            page_count,
            metrics,
        }
    }
}
