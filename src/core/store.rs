use crate::core::record::FusionRecord;

/// Holds the fusion records from the most recent file load.
///
/// The store is session-scoped: `replace` overwrites everything (re-uploading
/// a file never merges with prior content), and reads hand out snapshots of
/// the current sequence in file order.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<FusionRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full contents of the store with a freshly parsed sequence.
    pub fn replace(&mut self, records: Vec<FusionRecord>) {
        self.records = records;
    }

    /// All records in file order.
    #[must_use]
    pub fn all(&self) -> &[FusionRecord] {
        &self.records
    }

    /// Number of records currently loaded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_overwrites() {
        let mut store = RecordStore::new();
        store.replace(vec![FusionRecord::new("A", "B", "C")]);
        assert_eq!(store.len(), 1);

        store.replace(vec![
            FusionRecord::new("D", "E", "F"),
            FusionRecord::new("G", "H", "I"),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].material1, "D");
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert!(store.all().is_empty());
    }
}
