//! Core domain types for the pass card ledger client.
//!
//! This crate defines the shared vocabulary of the workspace:
//! - Offer and holding entities
//! - Ledger events and mutation receipts
//! - The client-side read model (projection)
//! - Contract-level error taxonomy

pub mod account;
pub mod entities;
pub mod error;
pub mod events;
pub mod projection;

pub use account::AccountId;
pub use entities::{HoldingsSummary, Offer, OfferId};
pub use error::LedgerError;
pub use events::{FromBlock, LedgerEvent, LedgerEventKind, Receipt};
pub use projection::Projection;
