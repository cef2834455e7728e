use std::collections::HashSet;

use crate::core::record::{normalize, FusionRecord};
use crate::state::sets::TermSet;

/// Result of matching the loaded records against a filter/ignore state.
///
/// `records` is the deduplicated list of achievable fusions and is never
/// filtered by the ignore set; whether ignored rows are shown is a
/// presentation decision made through [`MatchOutcome::visible_records`].
/// `results` is always ignore-aware.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Achievable fusions, symmetric duplicates collapsed, file order
    pub records: Vec<FusionRecord>,

    /// Parallel to `records`: true when the record's result is ignored
    pub ignored: Vec<bool>,

    /// Distinct achievable results, ignored ones excluded, first-seen order
    pub results: Vec<String>,
}

impl MatchOutcome {
    /// Row view for display, with ignore-filtering as a parameter.
    ///
    /// The two historical render paths disagree on whether an ignored result
    /// also hides its row, so both views stay available.
    #[must_use]
    pub fn visible_records(&self, hide_ignored: bool) -> Vec<&FusionRecord> {
        self.records
            .iter()
            .zip(&self.ignored)
            .filter(|(_, &ignored)| !(hide_ignored && ignored))
            .map(|(record, _)| record)
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.results.is_empty()
    }
}

/// Computes achievable fusions from the record sequence and the two user sets.
///
/// Pure with respect to its inputs; every call walks the records once. No
/// input can make it fail: empty or malformed state degrades to an empty
/// outcome.
pub struct Matcher<'a> {
    records: &'a [FusionRecord],
}

impl<'a> Matcher<'a> {
    pub fn new(records: &'a [FusionRecord]) -> Self {
        Self { records }
    }

    /// Derive the matching records and the results summary.
    ///
    /// With an empty filter set both outputs are empty: no owned materials
    /// means no fusion is achievable, rather than every fusion being shown.
    /// A record is a candidate when both of its normalized materials are in
    /// the filter set. Candidates whose unordered material pair was already
    /// seen are dropped entirely (first occurrence wins). The results list
    /// deduplicates case-insensitively on the result name and skips results
    /// in the ignore set; `records` keeps ignored rows and flags them.
    #[must_use]
    pub fn compute(&self, filters: &TermSet, ignores: &TermSet) -> MatchOutcome {
        if filters.is_empty() {
            return MatchOutcome::default();
        }

        let mut seen_pairs: HashSet<(String, String)> = HashSet::new();
        let mut seen_results: HashSet<String> = HashSet::new();
        let mut outcome = MatchOutcome::default();

        for record in self.records {
            if !filters.contains(&record.material1) || !filters.contains(&record.material2) {
                continue;
            }
            if !seen_pairs.insert(record.pair_key()) {
                continue;
            }

            let result_key = normalize(&record.result);
            let is_ignored = ignores.contains(&record.result);

            if !is_ignored && seen_results.insert(result_key) {
                outcome.results.push(record.result.clone());
            }

            outcome.records.push(record.clone());
            outcome.ignored.push(is_ignored);
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<FusionRecord> {
        vec![
            FusionRecord::new("Dancing Elf", "Dark Witch", "Dark Magician"),
            FusionRecord::new("Dark Witch", "Dancing Elf", "Dark Magician"),
            FusionRecord::new("Baby Dragon", "Time Wizard", "Thousand Dragon"),
            FusionRecord::new("Dancing Elf", "Time Wizard", "Dark Magician"),
        ]
    }

    fn set(terms: &[&str]) -> TermSet {
        let mut s = TermSet::new();
        for t in terms {
            s.add(t);
        }
        s
    }

    #[test]
    fn test_empty_filters_yield_empty_outcome() {
        let recs = records();
        let outcome = Matcher::new(&recs).compute(&TermSet::new(), &TermSet::new());
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_candidates_require_both_materials() {
        let recs = records();
        let outcome = Matcher::new(&recs).compute(&set(&["dancing elf"]), &TermSet::new());
        assert!(outcome.records.is_empty());
    }

    #[test]
    fn test_symmetric_pairs_collapse_first_wins() {
        let recs = records();
        let outcome =
            Matcher::new(&recs).compute(&set(&["Dancing Elf", "Dark Witch"]), &TermSet::new());

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].material1, "Dancing Elf");
        assert_eq!(outcome.results, vec!["Dark Magician"]);
    }

    #[test]
    fn test_results_dedup_case_insensitive() {
        let recs = vec![
            FusionRecord::new("A", "B", "Dark Magician"),
            FusionRecord::new("A", "C", "DARK MAGICIAN"),
        ];
        let outcome = Matcher::new(&recs).compute(&set(&["a", "b", "c"]), &TermSet::new());

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.results, vec!["Dark Magician"]);
    }

    #[test]
    fn test_ignore_suppresses_result_but_not_row() {
        let recs = records();
        let filters = set(&["Dancing Elf", "Dark Witch"]);
        let ignores = set(&["dark magician"]);

        let outcome = Matcher::new(&recs).compute(&filters, &ignores);
        assert_eq!(outcome.records.len(), 1);
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.ignored, vec![true]);
    }

    #[test]
    fn test_removing_ignore_restores_result() {
        let recs = records();
        let filters = set(&["Dancing Elf", "Dark Witch"]);
        let mut ignores = set(&["dark magician"]);

        ignores.remove("Dark Magician");
        let outcome = Matcher::new(&recs).compute(&filters, &ignores);
        assert_eq!(outcome.results, vec!["Dark Magician"]);
    }

    #[test]
    fn test_visible_records_parameterized() {
        let recs = records();
        let outcome = Matcher::new(&recs).compute(
            &set(&["Dancing Elf", "Dark Witch", "Baby Dragon", "Time Wizard"]),
            &set(&["thousand dragon"]),
        );

        assert_eq!(outcome.records.len(), 3);
        assert_eq!(outcome.visible_records(false).len(), 3);
        let visible = outcome.visible_records(true);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|r| r.result != "Thousand Dragon"));
    }

    #[test]
    fn test_self_fusion_matches_with_single_material() {
        let recs = vec![FusionRecord::new("Slime", "Slime", "King Slime")];
        let outcome = Matcher::new(&recs).compute(&set(&["slime"]), &TermSet::new());
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.results, vec!["King Slime"]);
    }

    #[test]
    fn test_results_first_seen_order() {
        let recs = vec![
            FusionRecord::new("A", "B", "Second"),
            FusionRecord::new("A", "C", "First"),
            FusionRecord::new("B", "C", "Second"),
        ];
        let outcome = Matcher::new(&recs).compute(&set(&["a", "b", "c"]), &TermSet::new());
        assert_eq!(outcome.results, vec!["Second", "First"]);
    }
}
