//! Fusion matching engine.
//!
//! Given the loaded records and the current filter/ignore state, the engine
//! derives:
//!
//! 1. **Matching records**: fusions whose two materials are both in the
//!    filter set, with symmetric `(A, B)` / `(B, A)` duplicates collapsed to
//!    the first occurrence.
//! 2. **Results**: the distinct result names those fusions can produce, in
//!    first-seen order, excluding results in the ignore set.
//!
//! The matcher is a pure function over its inputs and never fails; an empty
//! filter set produces an empty outcome by design.
//!
//! ## Example
//!
//! ```
//! use fusion_solver::matching::Matcher;
//! use fusion_solver::parsing::parse_text;
//! use fusion_solver::state::sets::TermSet;
//!
//! let records = parse_text("Dancing Elf + Dark Witch = Dark Magician\n");
//! let mut filters = TermSet::new();
//! filters.add("Dancing Elf");
//! filters.add("Dark Witch");
//!
//! let outcome = Matcher::new(&records).compute(&filters, &TermSet::new());
//! assert_eq!(outcome.results, vec!["Dark Magician"]);
//! ```

pub mod engine;

pub use engine::{MatchOutcome, Matcher};
