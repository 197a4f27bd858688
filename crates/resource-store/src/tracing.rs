//! # Tracing Setup
//!
//! Structured logging for the store and everything built on it.
//!
//! The [`StoreActor`](crate::StoreActor) logs its own lifecycle and every request:
//!
//! | Level | Events |
//! |-------|--------|
//! | `info` | store started, created, replaced, deleted, shutdown (with id and size) |
//! | `debug` | every request with its payload, read results |
//! | `warn` | replace or delete of a missing id |
//!
//! ```bash
//! RUST_LOG=info cargo run      # Lifecycle and mutations
//! RUST_LOG=debug cargo run     # Full payloads
//! RUST_LOG=resource_store=debug,info cargo run
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for the application.
///
/// Filtering comes from `RUST_LOG`; when it is unset or invalid the filter
/// falls back to `info`. Calling this twice is harmless: the second call
/// leaves the already-installed subscriber in place.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
