use std::collections::HashSet;

use crate::core::record::normalize;

/// Ordered set of normalized terms.
///
/// Backs both the filter set (owned materials) and the ignore set (suppressed
/// results). Terms are normalized on insert, uniqueness is enforced, and
/// insertion order is preserved for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    terms: Vec<String>,
    seen: HashSet<String>,
}

impl TermSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw terms, normalizing and dropping duplicates.
    ///
    /// Used when restoring a persisted list; the persisted form is already
    /// normalized but older or hand-edited state may not be.
    #[must_use]
    pub fn from_terms<I, T>(terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut set = Self::new();
        for term in terms {
            set.add(term.as_ref());
        }
        set
    }

    /// Add a term. Returns false (no-op) when the normalized term is empty
    /// or already present.
    pub fn add(&mut self, term: &str) -> bool {
        let term = normalize(term);
        if term.is_empty() || !self.seen.insert(term.clone()) {
            return false;
        }
        self.terms.push(term);
        true
    }

    /// Remove the exact normalized match. Returns false if absent.
    pub fn remove(&mut self, term: &str) -> bool {
        let term = normalize(term);
        if !self.seen.remove(&term) {
            return false;
        }
        self.terms.retain(|t| t != &term);
        true
    }

    /// Empty the set. Returns false if it was already empty.
    pub fn clear(&mut self) -> bool {
        if self.terms.is_empty() {
            return false;
        }
        self.terms.clear();
        self.seen.clear();
        true
    }

    /// Membership check; the term is normalized before lookup.
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.seen.contains(&normalize(term))
    }

    /// Terms in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.terms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_normalizes_and_dedups() {
        let mut set = TermSet::new();
        assert!(set.add("  Dark Witch "));
        assert!(!set.add("dark witch"));
        assert!(!set.add("DARK WITCH"));
        assert_eq!(set.as_slice(), &["dark witch"]);
    }

    #[test]
    fn test_add_empty_is_noop() {
        let mut set = TermSet::new();
        assert!(!set.add(""));
        assert!(!set.add("   "));
        assert!(set.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut set = TermSet::new();
        set.add("zebra");
        set.add("aardvark");
        set.add("mongoose");
        assert_eq!(set.as_slice(), &["zebra", "aardvark", "mongoose"]);
    }

    #[test]
    fn test_remove() {
        let mut set = TermSet::from_terms(["a", "b", "c"]);
        assert!(set.remove("B"));
        assert!(!set.remove("b"));
        assert_eq!(set.as_slice(), &["a", "c"]);
    }

    #[test]
    fn test_clear() {
        let mut set = TermSet::from_terms(["a", "b"]);
        assert!(set.clear());
        assert!(!set.clear());
        assert!(set.is_empty());
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let set = TermSet::from_terms(["baby dragon"]);
        assert!(set.contains("Baby Dragon"));
        assert!(set.contains("  BABY DRAGON "));
        assert!(!set.contains("time wizard"));
    }

    #[test]
    fn test_from_terms_dedups() {
        let set = TermSet::from_terms(["A", "a", "B", ""]);
        assert_eq!(set.as_slice(), &["a", "b"]);
    }
}
