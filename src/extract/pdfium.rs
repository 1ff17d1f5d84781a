//! PDFium-backed span extractor.
//!
//! Walks a page's text objects through `pdfium-render` and regroups them
//! into the block/line/run structure the renderer consumes. Line grouping
//! uses baseline proximity; block grouping uses the vertical gap between
//! consecutive lines relative to the font size.

use crate::error::{Error, Result};
use crate::extract::SpanExtractor;
use crate::layout::{Block, Line, RunColor, TextRun};
use pdfium_render::prelude::*;

/// Vertical distance (fraction of font size) within which two spans share a line.
const LINE_TOLERANCE_FACTOR: f32 = 0.5;

/// Vertical gap (multiple of font size) between lines that starts a new block.
const BLOCK_GAP_FACTOR: f32 = 1.8;

/// A positioned span, before line/block grouping.
struct PositionedRun {
    run: TextRun,
    x: f32,
    y: f32,
}

/// Bind the PDFium library.
///
/// Tries a library next to the executable first, then the system library
/// paths, so deployments can ship their own `libpdfium`.
fn bind_pdfium() -> Result<Pdfium> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::PdfiumLoad(format!("{:?}", e)))?;
    Ok(Pdfium::new(bindings))
}

/// Span extractor backed by PDFium.
///
/// Holds the PDF bytes and re-opens the document per page request, which
/// keeps the extractor free of self-referential borrows and gives each
/// conversion an exclusive handle. Construction validates the document and
/// captures the page count; per-page extraction never fails, a bad page
/// logs a warning and yields no blocks.
pub struct PdfiumExtractor {
    pdfium: Pdfium,
    bytes: Vec<u8>,
    page_count: usize,
}

impl PdfiumExtractor {
    /// Open a document from raw PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PdfiumLoad`] when the PDFium library cannot be
    /// bound, or [`Error::InvalidPdf`] when the bytes do not parse as a PDF.
    pub fn new(bytes: Vec<u8>) -> Result<Self> {
        let pdfium = bind_pdfium()?;
        let page_count = {
            let document = pdfium
                .load_pdf_from_byte_slice(&bytes, None)
                .map_err(|e| Error::InvalidPdf(format!("{:?}", e)))?;
            document.pages().len() as usize
        };
        Ok(Self {
            pdfium,
            bytes,
            page_count,
        })
    }

    fn extract_page(&self, page_index: usize) -> Result<Vec<Block>> {
        let index = u16::try_from(page_index)
            .map_err(|_| Error::InvalidPdf("page index out of range".to_string()))?;
        let document = self
            .pdfium
            .load_pdf_from_byte_slice(&self.bytes, None)
            .map_err(|e| Error::InvalidPdf(format!("{:?}", e)))?;
        let page = document
            .pages()
            .get(index)
            .map_err(|e| Error::InvalidPdf(format!("{:?}", e)))?;

        let mut spans = Vec::new();
        for object in page.objects().iter() {
            let Some(text_object) = object.as_text_object() else {
                continue;
            };
            let text = text_object.text();
            if text.is_empty() {
                continue;
            }

            let bounds = match object.bounds() {
                Ok(bounds) => bounds,
                Err(_) => continue,
            };
            let color = text_object
                .fill_color()
                .ok()
                .map(|c| RunColor::from_rgb8(c.red(), c.green(), c.blue()));

            spans.push(PositionedRun {
                run: TextRun {
                    text,
                    color,
                    font_name: text_object.font().family(),
                    size_px: text_object.unscaled_font_size().value,
                },
                x: bounds.left().value,
                y: bounds.bottom().value,
            });
        }

        Ok(group_into_blocks(spans))
    }
}

impl SpanExtractor for PdfiumExtractor {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn page_blocks(&self, page_index: usize) -> Vec<Block> {
        match self.extract_page(page_index) {
            Ok(blocks) => blocks,
            Err(e) => {
                log::warn!("span extraction failed on page {}: {}", page_index + 1, e);
                Vec::new()
            },
        }
    }
}

/// Group positioned spans into lines by baseline proximity, then lines into
/// blocks by vertical gap.
///
/// PDF page coordinates grow upward, so reading order sorts by Y descending
/// and X ascending within a line.
fn group_into_blocks(mut spans: Vec<PositionedRun>) -> Vec<Block> {
    if spans.is_empty() {
        return Vec::new();
    }

    spans.sort_by(|a, b| {
        b.y.partial_cmp(&a.y)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
    });

    // Baseline grouping into lines.
    let mut lines: Vec<(f32, f32, Vec<TextRun>)> = Vec::new(); // (y, size, runs)
    for span in spans {
        let tolerance = span.run.size_px.max(1.0) * LINE_TOLERANCE_FACTOR;
        match lines.last_mut() {
            Some((y, _, runs)) if (span.y - *y).abs() <= tolerance => {
                runs.push(span.run);
            },
            _ => lines.push((span.y, span.run.size_px, vec![span.run])),
        }
    }

    // Gap grouping into blocks.
    let mut blocks = Vec::new();
    let mut current: Vec<Line> = Vec::new();
    let mut previous_y: Option<f32> = None;
    for (y, size, runs) in lines {
        let block_gap = size.max(1.0) * BLOCK_GAP_FACTOR;
        if let Some(prev) = previous_y {
            if (prev - y) > block_gap && !current.is_empty() {
                blocks.push(Block::new(std::mem::take(&mut current)));
            }
        }
        current.push(Line::new(runs));
        previous_y = Some(y);
    }
    if !current.is_empty() {
        blocks.push(Block::new(current));
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str, x: f32, y: f32, size: f32) -> PositionedRun {
        PositionedRun {
            run: TextRun::plain(text).with_size(size),
            x,
            y,
        }
    }

    #[test]
    fn test_group_empty() {
        assert!(group_into_blocks(Vec::new()).is_empty());
    }

    #[test]
    fn test_group_same_baseline_one_line() {
        let blocks = group_into_blocks(vec![
            at("world", 60.0, 700.0, 12.0),
            at("hello", 10.0, 700.5, 12.0),
        ]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lines.len(), 1);
        // X-ascending within the line.
        assert_eq!(blocks[0].lines[0].runs[0].text, "hello");
        assert_eq!(blocks[0].lines[0].runs[1].text, "world");
    }

    #[test]
    fn test_group_close_lines_one_block() {
        let blocks = group_into_blocks(vec![
            at("first", 10.0, 700.0, 12.0),
            at("second", 10.0, 686.0, 12.0),
        ]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lines.len(), 2);
    }

    #[test]
    fn test_group_wide_gap_splits_blocks() {
        let blocks = group_into_blocks(vec![
            at("title", 10.0, 700.0, 12.0),
            at("body", 10.0, 640.0, 12.0),
        ]);
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_group_top_to_bottom_order() {
        let blocks = group_into_blocks(vec![
            at("lower", 10.0, 100.0, 12.0),
            at("upper", 10.0, 700.0, 12.0),
        ]);
        assert_eq!(blocks[0].lines[0].runs[0].text, "upper");
        assert_eq!(blocks[1].lines[0].runs[0].text, "lower");
    }
}
