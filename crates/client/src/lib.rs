//! Client surface for reaching the pass card ledger.
//!
//! This crate provides:
//! - The `LedgerClient` trait abstracting the contract's RPC surface
//! - An in-process adapter against a deployed `Ledger` instance
//! - Connection configuration with injected-or-fallback identity
//! - The transport vs. revert error taxonomy

mod config;
mod error;
mod in_process;

pub use config::ClientConfig;
pub use error::ClientError;
pub use in_process::InProcessClient;

use async_trait::async_trait;
use passcard_domain::{
    AccountId, FromBlock, HoldingsSummary, LedgerEvent, Offer, OfferId, Receipt,
};
use tokio::sync::mpsc;

/// Stream of ledger events, in block order.
pub type EventStream = mpsc::UnboundedReceiver<LedgerEvent>;

/// Request/response surface of the deployed ledger contract.
///
/// Mutations take the acting account explicitly; reads are account-scoped
/// where the contract scopes them. Contract-level rejections surface as
/// `ClientError::Reverted`, connectivity failures as
/// `ClientError::Transport`.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Identity the client signs mutations with.
    async fn default_account(&self) -> Result<AccountId, ClientError>;

    async fn offer_count(&self) -> Result<u32, ClientError>;

    async fn offer(&self, id: OfferId) -> Result<Offer, ClientError>;

    async fn acquire_offer(
        &self,
        id: OfferId,
        as_account: &AccountId,
    ) -> Result<Receipt, ClientError>;

    async fn relinquish_offer(
        &self,
        id: OfferId,
        as_account: &AccountId,
    ) -> Result<Receipt, ClientError>;

    async fn holdings_summary(&self, as_account: &AccountId)
    -> Result<HoldingsSummary, ClientError>;

    async fn is_valid_holding(
        &self,
        id: OfferId,
        as_account: &AccountId,
    ) -> Result<bool, ClientError>;

    /// Opens the event feed. `FromBlock::Latest` delivers no history.
    async fn subscribe_events(&self, from: FromBlock) -> Result<EventStream, ClientError>;
}
