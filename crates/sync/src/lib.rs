//! View state synchronization with the pass card ledger.
//!
//! Keeps a rendered projection consistent with remote ledger state via:
//! - Full refetch on every ledger event (push-invalidate, pull-refresh)
//! - Debounced coalescing of event bursts
//! - A monotonic generation gate discarding stale refresh completions

mod gate;
mod renderer;
mod synchronizer;

pub use renderer::Renderer;
pub use synchronizer::{SyncConfig, SyncError, Synchronizer};
