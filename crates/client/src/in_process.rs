//! Adapter against an in-process deployed ledger instance.

use crate::{ClientConfig, ClientError, EventStream, LedgerClient};
use async_trait::async_trait;
use passcard_domain::{AccountId, FromBlock, HoldingsSummary, Offer, OfferId, Receipt};
use passcard_ledger::Ledger;
use std::sync::Arc;
use tracing::info;

/// `LedgerClient` backed by a `Ledger` living in the same process.
///
/// This is the deployed-instance harness the contract test suite runs
/// against, and the backend of the CLI demo.
pub struct InProcessClient {
    ledger: Arc<Ledger>,
    account: AccountId,
}

impl InProcessClient {
    /// Connects to a deployed ledger with the configured identity.
    #[must_use]
    pub fn connect(ledger: Arc<Ledger>, config: &ClientConfig) -> Self {
        let account = config.resolve_account();
        info!(endpoint = %config.endpoint, account = %account, "Connected to pass card ledger");
        Self { ledger, account }
    }

    /// Connects with an explicit account, bypassing config resolution.
    #[must_use]
    pub fn with_account(ledger: Arc<Ledger>, account: AccountId) -> Self {
        Self { ledger, account }
    }
}

#[async_trait]
impl LedgerClient for InProcessClient {
    async fn default_account(&self) -> Result<AccountId, ClientError> {
        Ok(self.account.clone())
    }

    async fn offer_count(&self) -> Result<u32, ClientError> {
        Ok(self.ledger.offer_count().await)
    }

    async fn offer(&self, id: OfferId) -> Result<Offer, ClientError> {
        Ok(self.ledger.offer(id).await?)
    }

    async fn acquire_offer(
        &self,
        id: OfferId,
        as_account: &AccountId,
    ) -> Result<Receipt, ClientError> {
        Ok(self.ledger.acquire(id, as_account).await?)
    }

    async fn relinquish_offer(
        &self,
        id: OfferId,
        as_account: &AccountId,
    ) -> Result<Receipt, ClientError> {
        Ok(self.ledger.relinquish(id, as_account).await?)
    }

    async fn holdings_summary(
        &self,
        as_account: &AccountId,
    ) -> Result<HoldingsSummary, ClientError> {
        Ok(self.ledger.holdings_summary(as_account).await)
    }

    async fn is_valid_holding(
        &self,
        id: OfferId,
        as_account: &AccountId,
    ) -> Result<bool, ClientError> {
        Ok(self.ledger.is_valid_holding(id, as_account).await)
    }

    async fn subscribe_events(&self, from: FromBlock) -> Result<EventStream, ClientError> {
        Ok(self.ledger.subscribe(from).await)
    }
}
