//! Page content model consumed by the semantic renderer.
//!
//! A page is a sequence of [`Block`]s, each holding [`Line`]s of styled
//! [`TextRun`]s, in natural reading order. The span extractor produces this
//! structure; the renderer walks it without further reordering.

pub mod text_run;

// Re-export main types
pub use text_run::{Block, Line, RunColor, TextRun};
