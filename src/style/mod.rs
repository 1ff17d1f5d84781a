//! Style canonicalization and deduplication.
//!
//! [`ResolvedStyle`] normalizes a run's raw visual attributes into a
//! canonical key with stable attribute ordering; [`StyleRegistry`]
//! deduplicates those keys into compact `s0, s1, …` class identifiers in
//! first-seen order.

pub mod registry;
pub mod resolver;

// Re-export main types
pub use registry::StyleRegistry;
pub use resolver::ResolvedStyle;
