//! Style canonicalization.
//!
//! Maps a raw run's visual attributes plus the render options to a
//! [`ResolvedStyle`], and a resolved style to its canonical key string.
//! The canonical key is the deduplication unit: two runs with the same key
//! are interchangeable for rendering purposes.

use crate::converters::RenderOptions;
use crate::layout::{RunColor, TextRun};

/// Default black, which carries no information and is never emitted.
const BLACK_HEX: &str = "#000000";

/// A run's visual attributes after normalization against the render options.
///
/// Each attribute is independently optional: a disabled option or a
/// malformed raw value clears that attribute without touching the others.
/// A value with every attribute empty is the explicit "no style" state;
/// [`ResolvedStyle::canonical_key`] returns `None` for it so callers never
/// emit empty style tokens or empty class attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedStyle {
    /// Normalized 6-hex-digit lowercase color, e.g. `#ff0000`.
    ///
    /// `None` when the run has no color, the color is pure black, the raw
    /// value is malformed, or color rendering is disabled.
    pub color_hex: Option<String>,
    /// Bold, derived from the font name.
    pub bold: bool,
    /// Italic or oblique, derived from the font name.
    pub italic: bool,
    /// Font size rounded to the nearest integer px.
    pub size_px: Option<u32>,
}

impl ResolvedStyle {
    /// Resolve a run's raw attributes against the render options.
    ///
    /// A malformed color degrades to no color rather than failing the run;
    /// a single bad attribute must never abort rendering of a page.
    pub fn resolve(run: &TextRun, options: &RenderOptions) -> Self {
        let color_hex = if options.with_colors {
            run.color
                .as_ref()
                .and_then(normalize_color)
                .filter(|hex| hex != BLACK_HEX)
        } else {
            None
        };

        let (bold, italic) = if options.with_font_style {
            let font = run.font_name.to_lowercase();
            (
                font.contains("bold"),
                font.contains("italic") || font.contains("oblique"),
            )
        } else {
            (false, false)
        };

        let size_px = if options.with_font_size {
            (run.size_px.is_finite() && run.size_px > 0.0).then(|| run.size_px.round() as u32)
        } else {
            None
        };

        Self {
            color_hex,
            bold,
            italic,
            size_px,
        }
    }

    /// True when every attribute is empty.
    pub fn is_empty(&self) -> bool {
        self.color_hex.is_none() && !self.bold && !self.italic && self.size_px.is_none()
    }

    /// Build the canonical style key, or `None` for the "no style" value.
    ///
    /// Tokens appear in fixed order (color, weight, slant, size), each as a
    /// `key:value` CSS declaration, joined with `;`. The key is used both
    /// as the dedup key and verbatim as the declaration list in CSS rules
    /// and inline `style` attributes.
    pub fn canonical_key(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut tokens = Vec::with_capacity(4);
        if let Some(hex) = &self.color_hex {
            tokens.push(format!("color:{}", hex));
        }
        if self.bold {
            tokens.push("font-weight:bold".to_string());
        }
        if self.italic {
            tokens.push("font-style:italic".to_string());
        }
        if let Some(size) = self.size_px {
            tokens.push(format!("font-size:{}px", size));
        }

        Some(tokens.join(";"))
    }
}

/// Normalize a raw color to a lowercase `#rrggbb` string.
///
/// Accepts a packed 24-bit integer or a 3-component tuple in the 0–1 float
/// or 0–255 integer range. Components that are all at most 1.0 are read as
/// the float convention; any component above 1.0 switches to the 0–255
/// convention. Out-of-range, non-finite, or wrong-arity input yields `None`.
fn normalize_color(color: &RunColor) -> Option<String> {
    match color {
        RunColor::Packed(v) => {
            if (0..=0xFF_FFFF).contains(v) {
                Some(format!("#{:06x}", v))
            } else {
                None
            }
        },
        RunColor::Components(c) => {
            if c.len() != 3 || c.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return None;
            }
            let scale = |v: f64| -> Option<u8> {
                let byte = if c.iter().all(|v| *v <= 1.0) {
                    (v * 255.0).round()
                } else {
                    v.round()
                };
                (byte <= 255.0).then(|| byte as u8)
            };
            let r = scale(c[0])?;
            let g = scale(c[1])?;
            let b = scale(c[2])?;
            Some(format!("#{:02x}{:02x}{:02x}", r, g, b))
        },
    }
}
