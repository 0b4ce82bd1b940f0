//! Ledger events and mutation receipts.

use crate::account::AccountId;
use crate::entities::OfferId;
use serde::{Deserialize, Serialize};

/// Kind of state change a ledger event announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEventKind {
    /// A pass card was acquired.
    Acquired,
    /// A pass card was relinquished.
    Relinquished,
}

/// An event emitted by the ledger after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEvent {
    pub kind: LedgerEventKind,
    /// Offer the mutation applied to.
    pub offer_id: OfferId,
    /// Account that caused the mutation.
    pub account: AccountId,
    /// Block the mutation was recorded in. Strictly increasing.
    pub block: u64,
}

/// Starting point of an event subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FromBlock {
    /// Deliver only events recorded after subscription. No historical replay.
    Latest,
    /// Replay recorded events from the given block, then stream live.
    Number(u64),
}

/// Result of a successful mutation.
///
/// Carries the events stamped into the block so callers can observe emission
/// without consuming the subscription feed. Every successful acquire or
/// relinquish emits exactly one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub block: u64,
    pub events: Vec<LedgerEvent>,
}
