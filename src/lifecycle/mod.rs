//! # System Lifecycle
//!
//! Starting, wiring and stopping the Villa actor.
//!
//! ## Startup
//!
//! [`VillaSystem::start`] validates the [`VillaConfig`](crate::config::VillaConfig), builds the
//! actor pre-seeded with the configured villas and spawns its loop with the log sink as
//! context. The sink is bound late, at `run()`, so the same actor type works with
//! [`TracingSink`](crate::logging::TracingSink) in the binary and
//! [`RecordingSink`](crate::logging::RecordingSink) in tests.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor cleans up** - logs its final size and exits
//! 4. **Await completion** - the task handle reports a panic as [`SystemError::ActorTask`]
//!
//! Dispatchers hold client clones too, so they must be dropped before
//! [`VillaSystem::shutdown`] returns.

pub mod villa_system;

pub use villa_system::*;
