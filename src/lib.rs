//! # fusion-solver
//!
//! A library for working with pairwise "fusion" combination lists: plain-text
//! files where each line reads `material1 + material2 = result`.
//!
//! Given such a file and a set of materials you own, fusion-solver derives
//! which fusions you can currently perform and which distinct results they
//! yield, while letting you suppress results you no longer care about.
//!
//! ## Features
//!
//! - **Forgiving parser**: malformed lines are skipped, never fatal
//! - **Symmetric matching**: `(A, B)` and `(B, A)` count as the same fusion
//! - **Filter/ignore state**: ordered, deduplicated, persisted after every change
//! - **Prefix suggestions**: material name completion for interactive input
//! - **CLI and web UI**: the same engine behind both surfaces
//!
//! ## Example
//!
//! ```rust
//! use fusion_solver::state::{MemoryStore, Session};
//!
//! let mut session = Session::open(MemoryStore::new()).unwrap();
//! session.upload_text(
//!     "Dancing Elf + Dark Witch = Dark Magician\n\
//!      Baby Dragon + Time Wizard = Thousand Dragon\n",
//!     Some("fusions.txt"),
//! );
//!
//! session.add_filter("Dancing Elf").unwrap();
//! session.add_filter("Dark Witch").unwrap();
//!
//! assert_eq!(session.results(), &["Dark Magician"]);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Fusion records, the record store, and the material index
//! - [`parsing`]: The fusion list text parser
//! - [`matching`]: The matcher deriving achievable fusions and results
//! - [`state`]: Filter/ignore sets, persistence, and the session facade
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server for browser-based filtering

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod state;
pub mod web;

// Re-export commonly used types for convenience
pub use core::index::MaterialIndex;
pub use core::record::{normalize, FusionRecord};
pub use core::store::RecordStore;
pub use matching::engine::{MatchOutcome, Matcher};
pub use state::persist::{DirStore, KvStore, MemoryStore, StateError};
pub use state::session::Session;
pub use state::sets::TermSet;
