//! Style deduplication registry.
//!
//! Maps canonical style keys to short class identifiers, preserving
//! first-seen order so class naming is deterministic for a given document.

use indexmap::IndexMap;

/// Insertion-ordered mapping from canonical style key to class identifier.
///
/// Identifiers are generated as `s0, s1, s2, …` in first-seen order. One
/// registry lives exactly as long as one document conversion; sharing a
/// registry across documents would leak class identifiers between requests.
/// A registry from an abandoned conversion must be discarded, not reused.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    classes: IndexMap<String, String>,
}

impl StyleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a canonical style key, returning its class identifier.
    ///
    /// Idempotent: interning the same key again returns the same identifier
    /// and does not grow the rule set. The "no style" value is never
    /// interned; callers only reach this with a non-empty key.
    pub fn intern(&mut self, key: &str) -> String {
        if let Some(class_id) = self.classes.get(key) {
            return class_id.clone();
        }
        let class_id = format!("s{}", self.classes.len());
        self.classes.insert(key.to_string(), class_id.clone());
        class_id
    }

    /// Iterate `(class_id, canonical_key)` pairs in first-seen order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &str)> {
        self.classes
            .iter()
            .map(|(key, class_id)| (class_id.as_str(), key.as_str()))
    }

    /// Number of distinct interned styles.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True when no style has been interned.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
