use std::path::Path;

use tracing::{debug, warn};

use crate::core::index::{MaterialIndex, DEFAULT_SUGGESTION_LIMIT};
use crate::core::record::FusionRecord;
use crate::core::store::RecordStore;
use crate::matching::engine::{MatchOutcome, Matcher};
use crate::parsing::fusion::{parse_text, ParseError};
use crate::state::persist::{KvStore, StateError};
use crate::state::sets::TermSet;

/// Storage key for the persisted filter list.
pub const FILTER_KEY: &str = "filter_list";

/// Storage key for the persisted ignore list.
pub const IGNORE_KEY: &str = "ignore_list";

/// The application state: loaded records, filter/ignore sets, and the
/// derived match outcome, with persistence wired through an injected
/// [`KvStore`].
///
/// This is the full query surface exposed to presentation layers (CLI and
/// web). Every mutating operation persists the affected set before
/// returning, then recomputes the match outcome, so readers always observe
/// in-memory and persisted state in agreement.
pub struct Session<S: KvStore> {
    store: RecordStore,
    index: MaterialIndex,
    filters: TermSet,
    ignores: TermSet,
    outcome: MatchOutcome,
    kv: S,
    file_name: Option<String>,
}

impl<S: KvStore> Session<S> {
    /// Create a session, restoring persisted filter/ignore lists.
    ///
    /// A present filter list is applied immediately (the outcome is
    /// recomputed against it); an absent or unreadable list is treated as
    /// empty. Only storage I/O failure is an error.
    ///
    /// # Errors
    ///
    /// Returns `StateError` if the backing store cannot be read.
    pub fn open(kv: S) -> Result<Self, StateError> {
        let filters = load_term_set(&kv, FILTER_KEY)?;
        let ignores = load_term_set(&kv, IGNORE_KEY)?;

        let mut session = Self {
            store: RecordStore::new(),
            index: MaterialIndex::default(),
            filters,
            ignores,
            outcome: MatchOutcome::default(),
            kv,
            file_name: None,
        };
        session.recompute();
        Ok(session)
    }

    /// Load fusion list text, replacing any previously loaded file.
    ///
    /// Rebuilds the material index and recomputes the match outcome. A later
    /// upload fully supersedes an earlier one.
    pub fn upload_text(&mut self, text: &str, name: Option<&str>) {
        self.store.replace(parse_text(text));
        self.index = MaterialIndex::build(&self.store);
        self.file_name = name.map(str::to_string);
        debug!(
            records = self.store.len(),
            materials = self.index.materials().len(),
            "loaded fusion list"
        );
        self.recompute();
    }

    /// Load a fusion list file from disk.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the file cannot be read.
    pub fn upload_file(&mut self, path: &Path) -> Result<(), ParseError> {
        let content = std::fs::read_to_string(path)?;
        let name = path.file_name().and_then(|n| n.to_str());
        self.upload_text(&content, name);
        Ok(())
    }

    /// Add an owned material. No-op on an empty or duplicate term.
    ///
    /// # Errors
    ///
    /// Returns `StateError` if persisting fails; the in-memory set is rolled
    /// back so it never disagrees with storage.
    pub fn add_filter(&mut self, term: &str) -> Result<bool, StateError> {
        if !self.filters.add(term) {
            return Ok(false);
        }
        if let Err(e) = save_term_set(&mut self.kv, FILTER_KEY, &self.filters) {
            self.filters.remove(term);
            return Err(e);
        }
        self.recompute();
        Ok(true)
    }

    /// Remove an owned material. No-op if absent.
    ///
    /// # Errors
    ///
    /// Returns `StateError` if persisting fails (the removal is rolled back).
    pub fn remove_filter(&mut self, term: &str) -> Result<bool, StateError> {
        if !self.filters.remove(term) {
            return Ok(false);
        }
        if let Err(e) = save_term_set(&mut self.kv, FILTER_KEY, &self.filters) {
            self.filters.add(term);
            return Err(e);
        }
        self.recompute();
        Ok(true)
    }

    /// Drop all owned materials and remove the persisted entry.
    ///
    /// # Errors
    ///
    /// Returns `StateError` if the persisted entry cannot be removed.
    pub fn clear_filters(&mut self) -> Result<(), StateError> {
        self.kv.remove(FILTER_KEY)?;
        self.filters.clear();
        self.recompute();
        Ok(())
    }

    /// Suppress a result from the results summary. No-op on empty/duplicate.
    ///
    /// # Errors
    ///
    /// Returns `StateError` if persisting fails (the addition is rolled back).
    pub fn add_ignore(&mut self, term: &str) -> Result<bool, StateError> {
        if !self.ignores.add(term) {
            return Ok(false);
        }
        if let Err(e) = save_term_set(&mut self.kv, IGNORE_KEY, &self.ignores) {
            self.ignores.remove(term);
            return Err(e);
        }
        self.recompute();
        Ok(true)
    }

    /// Stop suppressing a result. No-op if absent.
    ///
    /// # Errors
    ///
    /// Returns `StateError` if persisting fails (the removal is rolled back).
    pub fn remove_ignore(&mut self, term: &str) -> Result<bool, StateError> {
        if !self.ignores.remove(term) {
            return Ok(false);
        }
        if let Err(e) = save_term_set(&mut self.kv, IGNORE_KEY, &self.ignores) {
            self.ignores.add(term);
            return Err(e);
        }
        self.recompute();
        Ok(true)
    }

    /// Drop all ignored results and remove the persisted entry.
    ///
    /// # Errors
    ///
    /// Returns `StateError` if the persisted entry cannot be removed.
    pub fn clear_ignores(&mut self) -> Result<(), StateError> {
        self.kv.remove(IGNORE_KEY)?;
        self.ignores.clear();
        self.recompute();
        Ok(())
    }

    /// Material suggestions for a typed prefix, default cap.
    #[must_use]
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        self.index.suggest(prefix, DEFAULT_SUGGESTION_LIMIT)
    }

    /// Material suggestions with an explicit cap.
    #[must_use]
    pub fn suggest_limited(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.index.suggest(prefix, limit)
    }

    /// Current owned materials, insertion order.
    #[must_use]
    pub fn filters(&self) -> &[String] {
        self.filters.as_slice()
    }

    /// Current ignored results, insertion order.
    #[must_use]
    pub fn ignores(&self) -> &[String] {
        self.ignores.as_slice()
    }

    /// The derived match outcome for the current state.
    #[must_use]
    pub fn outcome(&self) -> &MatchOutcome {
        &self.outcome
    }

    /// Deduplicated achievable fusions (never ignore-filtered).
    #[must_use]
    pub fn matching_records(&self) -> &[FusionRecord] {
        &self.outcome.records
    }

    /// Distinct achievable results with ignored ones excluded.
    #[must_use]
    pub fn results(&self) -> &[String] {
        &self.outcome.results
    }

    /// All distinct materials in the loaded file.
    #[must_use]
    pub fn materials(&self) -> &[String] {
        self.index.materials()
    }

    /// Number of records in the loaded file.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.store.len()
    }

    /// Name of the loaded file, if one was given.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    fn recompute(&mut self) {
        self.outcome = Matcher::new(self.store.all()).compute(&self.filters, &self.ignores);
    }
}

fn load_term_set<S: KvStore>(kv: &S, key: &str) -> Result<TermSet, StateError> {
    let Some(raw) = kv.load(key)? else {
        return Ok(TermSet::new());
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(terms) => Ok(TermSet::from_terms(terms)),
        Err(e) => {
            // Corrupt state is not fatal; start over with an empty list.
            warn!("discarding unreadable persisted list '{key}': {e}");
            Ok(TermSet::new())
        }
    }
}

fn save_term_set<S: KvStore>(kv: &mut S, key: &str, set: &TermSet) -> Result<(), StateError> {
    let raw = serde_json::to_string(set.as_slice())?;
    kv.save(key, &raw)
}
