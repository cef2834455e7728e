//! Filter/ignore state and persistence.
//!
//! Two user-controlled sets drive the matcher: the **filter set** (materials
//! the user owns) and the **ignore set** (results the user wants suppressed
//! from the summary). Both are ordered, deduplicated, and normalized
//! ([`sets::TermSet`]), and both are persisted through an injected key-value
//! adapter ([`persist::KvStore`]) after every mutation.
//!
//! [`session::Session`] ties the state to the record store and matcher and
//! is the query surface presentation layers talk to.

pub mod persist;
pub mod session;
pub mod sets;

pub use persist::{default_state_dir, DirStore, KvStore, MemoryStore, StateError};
pub use session::{Session, FILTER_KEY, IGNORE_KEY};
pub use sets::TermSet;
