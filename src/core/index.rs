use std::collections::HashSet;

use crate::core::record::normalize;
use crate::core::store::RecordStore;

/// Prefixes shorter than this return no suggestions.
///
/// One- and two-letter prefixes match too much of the index to be useful as
/// a suggestion list.
pub const MIN_PREFIX_LEN: usize = 3;

/// Default cap on the number of suggestions returned.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Derived view of all distinct material names in the store.
///
/// Names are normalized on entry and kept in first-encounter order. The index
/// is rebuilt whenever the store contents change and is never persisted.
#[derive(Debug, Default)]
pub struct MaterialIndex {
    materials: Vec<String>,
    seen: HashSet<String>,
}

impl MaterialIndex {
    /// Build the index from the current store contents.
    #[must_use]
    pub fn build(store: &RecordStore) -> Self {
        let mut index = Self::default();
        for record in store.all() {
            index.insert(&record.material1);
            index.insert(&record.material2);
        }
        index
    }

    fn insert(&mut self, material: &str) {
        let name = normalize(material);
        if name.is_empty() {
            return;
        }
        if self.seen.insert(name.clone()) {
            self.materials.push(name);
        }
    }

    /// All distinct materials, lowercase, in first-encounter order.
    #[must_use]
    pub fn materials(&self) -> &[String] {
        &self.materials
    }

    /// Materials starting with `prefix`, case-insensitive, capped at `limit`.
    ///
    /// A normalized prefix shorter than [`MIN_PREFIX_LEN`] characters yields
    /// an empty list. Results come back in index order.
    #[must_use]
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        let prefix = normalize(prefix);
        if prefix.chars().count() < MIN_PREFIX_LEN {
            return Vec::new();
        }

        self.materials
            .iter()
            .filter(|m| m.starts_with(&prefix))
            .take(limit)
            .cloned()
            .collect()
    }
}
