//! Text run representation for semantic rendering.
//!
//! This module defines the structures a span extractor produces for one
//! page: styled runs grouped into lines and blocks in natural reading order.

/// Raw color attribute attached to a text run.
///
/// Extractors report color in one of two encodings, and either one may be
/// malformed (an out-of-range packed value, a tuple with the wrong arity or
/// non-finite components). Both malformed shapes are representable here so
/// that the resolver's degrade-to-no-color paths can be tested explicitly
/// instead of being hidden behind a catch-all.
#[derive(Debug, Clone, PartialEq)]
pub enum RunColor {
    /// Packed 24-bit RGB integer (`0xRRGGBB`).
    ///
    /// Stored as `i64` so values outside `0..=0xFFFFFF` survive long enough
    /// to be rejected by the resolver.
    Packed(i64),
    /// Color components, expected as a 3-tuple in either the 0–1 float
    /// range or the 0–255 integer range.
    Components(Vec<f64>),
}

impl RunColor {
    /// Build a packed color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        RunColor::Packed(((r as i64) << 16) | ((g as i64) << 8) | b as i64)
    }
}

/// The smallest unit of styled text extracted from a PDF page.
///
/// A run shares one font, size, and color. Runs are immutable once read;
/// the renderer never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// The run's raw text, unescaped.
    pub text: String,
    /// Raw color attribute, if the extractor reported one.
    pub color: Option<RunColor>,
    /// Font name/family as reported by the PDF, e.g. `"Helvetica-BoldOblique"`.
    ///
    /// Weight and slant are derived from this name by substring match.
    pub font_name: String,
    /// Font size in px.
    pub size_px: f32,
}

impl TextRun {
    /// Create a plain black run with a default body font.
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            color: None,
            font_name: "Helvetica".to_string(),
            size_px: 12.0,
        }
    }

    /// Set the raw color (builder pattern).
    pub fn with_color(mut self, color: RunColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the font name (builder pattern).
    pub fn with_font(mut self, font_name: &str) -> Self {
        self.font_name = font_name.to_string();
        self
    }

    /// Set the font size (builder pattern).
    pub fn with_size(mut self, size_px: f32) -> Self {
        self.size_px = size_px;
        self
    }
}

/// One line of text: a sequence of runs sharing a baseline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    /// Runs in left-to-right order.
    pub runs: Vec<TextRun>,
}

impl Line {
    /// Create a line from runs.
    pub fn new(runs: Vec<TextRun>) -> Self {
        Self { runs }
    }
}

/// One block of text: consecutive lines forming a paragraph-level unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    /// Lines in top-to-bottom order.
    pub lines: Vec<Line>,
}

impl Block {
    /// Create a block from lines.
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Create a single-line block from runs.
    pub fn from_runs(runs: Vec<TextRun>) -> Self {
        Self {
            lines: vec![Line::new(runs)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_from_rgb8() {
        assert_eq!(RunColor::from_rgb8(0xff, 0x00, 0x00), RunColor::Packed(0xff0000));
        assert_eq!(RunColor::from_rgb8(0x12, 0x34, 0x56), RunColor::Packed(0x123456));
        assert_eq!(RunColor::from_rgb8(0, 0, 0), RunColor::Packed(0));
    }

    #[test]
    fn test_run_builders() {
        let run = TextRun::plain("Hello")
            .with_font("Times-Bold")
            .with_size(14.0)
            .with_color(RunColor::Packed(0x00ff00));

        assert_eq!(run.text, "Hello");
        assert_eq!(run.font_name, "Times-Bold");
        assert_eq!(run.size_px, 14.0);
        assert_eq!(run.color, Some(RunColor::Packed(0x00ff00)));
    }

    #[test]
    fn test_block_from_runs() {
        let block = Block::from_runs(vec![TextRun::plain("a"), TextRun::plain("b")]);
        assert_eq!(block.lines.len(), 1);
        assert_eq!(block.lines[0].runs.len(), 2);
    }
}
