//! Web interface for browser-based fusion filtering.
//!
//! Serves an embedded single-page UI and a JSON API over the same
//! [`Session`](crate::state::session::Session) the CLI uses. All state
//! mutations go through one `RwLock`, so the engine itself stays
//! single-threaded; a second upload simply supersedes the first.
//!
//! The server binds localhost for a single local user. Body-size,
//! concurrency, and timeout limits are applied at the HTTP layer.

pub mod server;
