//! Core data types for fusion matching.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`FusionRecord`]: One parsed combination rule, two materials yielding a result
//! - [`RecordStore`]: Session holder for the most recently loaded file
//! - [`MaterialIndex`]: Derived distinct-material view used for suggestions
//! - [`normalize`]: The single trim+lowercase normalization applied at every
//!   set insertion and comparison point
//!
//! Material order within a record is not significant: `(A, B)` and `(B, A)`
//! describe the same fusion, and the matcher collapses them via
//! [`FusionRecord::pair_key`].

pub mod index;
pub mod record;
pub mod store;

pub use index::MaterialIndex;
pub use record::{normalize, FusionRecord};
pub use store::RecordStore;
