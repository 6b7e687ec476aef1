//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! The actor loop emits one structured event per request with an `entity_type` field and,
//! where it applies, the record `id` and the collection `size`:
//!
//! ```text
//! INFO Actor started entity_type="Villa" size=0
//! INFO Created entity_type="Villa" id=1 size=1
//! WARN Patch failed entity_type="Villa" id=2 error=Entity error: Villa validation error: Villa name is required
//! INFO Deleted entity_type="Villa" id=1 size=1
//! INFO Shutdown entity_type="Villa" size=1
//! ```
//!
//! Client wrappers add `#[instrument]` spans, so with `RUST_LOG=debug` every request shows
//! the client call it came from together with its full payload.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

/// Initializes a compact fmt subscriber filtered by `RUST_LOG`.
///
/// Module paths are hidden (`with_target(false)`); the `entity_type` field already says which
/// actor an event came from.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
