//! In-process pass card ledger runtime.
//!
//! Enforces the contract's bookkeeping rules:
//! - Offer catalogue seeded at construction, never deleted
//! - At most one valid pass per (account, offer) pair
//! - Acquire/relinquish mutate `remaining` by exactly 1 and emit exactly
//!   one event each
//! - Event log with replay-from-block subscriptions

mod ledger;
pub mod seed;

pub use ledger::Ledger;
