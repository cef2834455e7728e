use serde::{Deserialize, Serialize};

/// Normalize a material or result name for set membership and comparison.
///
/// Every insertion into a filter/ignore set and every membership check goes
/// through this one function so that casing and whitespace are handled the
/// same way everywhere.
///
/// # Examples
///
/// ```
/// use fusion_solver::core::normalize;
///
/// assert_eq!(normalize("  Dark Witch "), "dark witch");
/// assert_eq!(normalize("TIME WIZARD"), "time wizard");
/// ```
#[must_use]
pub fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

/// One fusion rule: two input materials yielding one result.
///
/// The order of `material1` and `material2` carries no meaning; a fusion is a
/// symmetric pair of inputs. Records are immutable once parsed and replaced
/// wholesale when a new file is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FusionRecord {
    /// First input material, as written in the source file
    pub material1: String,

    /// Second input material, as written in the source file
    pub material2: String,

    /// The fusion outcome, as written in the source file
    pub result: String,
}

impl FusionRecord {
    pub fn new(
        material1: impl Into<String>,
        material2: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            material1: material1.into(),
            material2: material2.into(),
            result: result.into(),
        }
    }

    /// The unordered, normalized material pair.
    ///
    /// `(a, b)` and `(b, a)` produce the same key, which is what makes
    /// symmetric deduplication in the matcher possible.
    #[must_use]
    pub fn pair_key(&self) -> (String, String) {
        let a = normalize(&self.material1);
        let b = normalize(&self.material2);
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// True when any of the three fields is empty after trimming.
    ///
    /// The parser accepts such records (a line like `" + B = C"` splits
    /// cleanly); callers that want to surface them as suspect use this
    /// instead of the parser rejecting them outright.
    #[must_use]
    pub fn has_empty_field(&self) -> bool {
        self.material1.is_empty() || self.material2.is_empty() || self.result.is_empty()
    }
}

impl std::fmt::Display for FusionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {} = {}", self.material1, self.material2, self.result)
    }
}
