//! Parser for plain-text fusion lists.
//!
//! The input format is one fusion per line:
//!
//! ```text
//! <material1> + <material2> = <result>
//! ```
//!
//! with the literal separators `" + "` and `" = "`. There is no header, no
//! quoting, and no escaping. Lines that do not match the shape are silently
//! skipped; a skipped line is an accepted data-loss mode in this domain, not
//! an error.
//!
//! ## Example
//!
//! ```
//! use fusion_solver::parsing::parse_text;
//!
//! let records = parse_text("Baby Dragon + Time Wizard = Thousand Dragon\n");
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].result, "Thousand Dragon");
//! ```

pub mod fusion;

pub use fusion::{parse_file, parse_text, ParseError};
