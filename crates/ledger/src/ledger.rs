//! Ledger state and mutation rules.

use passcard_domain::{
    AccountId, FromBlock, HoldingsSummary, LedgerError, LedgerEvent, LedgerEventKind, Offer,
    OfferId, Receipt,
};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tokio::sync::{RwLock, mpsc};
use tracing::{debug, info};

/// Per-account holding state.
#[derive(Debug, Default)]
struct HoldingState {
    /// Aggregate count of currently-held passes.
    count: u64,
    /// Offers with a currently-valid pass.
    valid: BTreeSet<OfferId>,
}

struct LedgerState {
    offers: BTreeMap<OfferId, Offer>,
    holdings: HashMap<AccountId, HoldingState>,
    /// Last block a mutation was recorded in. Genesis is block 0.
    block: u64,
    /// Append-only event history, in block order.
    log: Vec<LedgerEvent>,
    subscribers: Vec<mpsc::UnboundedSender<LedgerEvent>>,
}

impl LedgerState {
    /// Records one event for a committed mutation and fans it out.
    fn emit(&mut self, kind: LedgerEventKind, offer_id: OfferId, account: &AccountId) -> Receipt {
        self.block += 1;
        let event = LedgerEvent {
            kind,
            offer_id,
            account: account.clone(),
            block: self.block,
        };
        self.log.push(event.clone());
        self.subscribers
            .retain(|sender| sender.send(event.clone()).is_ok());
        Receipt {
            block: self.block,
            events: vec![event],
        }
    }
}

/// Authoritative pass card ledger.
///
/// All state sits behind one lock; mutations validate, commit and emit
/// atomically, so subscribers observe events in block order with no gaps.
pub struct Ledger {
    state: RwLock<LedgerState>,
}

impl Ledger {
    /// Deploys a ledger seeded with the given offers.
    ///
    /// Offers are numbered sequentially from 1 in the order given, the same
    /// way the contract constructor assigns ids.
    #[must_use]
    pub fn with_offers(offers: Vec<Offer>) -> Self {
        let offers: BTreeMap<OfferId, Offer> = offers
            .into_iter()
            .enumerate()
            .map(|(index, mut offer)| {
                offer.id = index as OfferId + 1;
                (offer.id, offer)
            })
            .collect();

        info!(offer_count = offers.len(), "Deployed pass card ledger");

        Self {
            state: RwLock::new(LedgerState {
                offers,
                holdings: HashMap::new(),
                block: 0,
                log: Vec::new(),
                subscribers: Vec::new(),
            }),
        }
    }

    /// Number of seeded offers.
    pub async fn offer_count(&self) -> u32 {
        self.state.read().await.offers.len() as u32
    }

    /// Looks up one offer by id.
    ///
    /// # Errors
    /// Returns `UnknownOffer` for ids outside `1..=offer_count`.
    pub async fn offer(&self, id: OfferId) -> Result<Offer, LedgerError> {
        self.state
            .read()
            .await
            .offers
            .get(&id)
            .cloned()
            .ok_or(LedgerError::UnknownOffer(id))
    }

    /// Acquires a pass card for `account`.
    ///
    /// # Errors
    /// Reverts with `UnknownOffer`, `Depleted` (no cards remaining,
    /// regardless of caller) or `AlreadyHeld`.
    pub async fn acquire(&self, id: OfferId, account: &AccountId) -> Result<Receipt, LedgerError> {
        let mut state = self.state.write().await;

        let remaining = state
            .offers
            .get(&id)
            .map(|offer| offer.remaining)
            .ok_or(LedgerError::UnknownOffer(id))?;
        if remaining == 0 {
            return Err(LedgerError::Depleted(id));
        }
        if let Some(holding) = state.holdings.get(account) {
            if holding.valid.contains(&id) {
                return Err(LedgerError::AlreadyHeld(id));
            }
        }

        if let Some(offer) = state.offers.get_mut(&id) {
            offer.remaining -= 1;
        }
        let holding = state.holdings.entry(account.clone()).or_default();
        holding.valid.insert(id);
        holding.count += 1;

        let receipt = state.emit(LedgerEventKind::Acquired, id, account);
        debug!(offer_id = id, account = %account, block = receipt.block, "Pass card acquired");
        Ok(receipt)
    }

    /// Relinquishes a previously acquired pass card. Exact inverse of
    /// `acquire`.
    ///
    /// # Errors
    /// Reverts with `UnknownOffer` or `NotHeld`.
    pub async fn relinquish(
        &self,
        id: OfferId,
        account: &AccountId,
    ) -> Result<Receipt, LedgerError> {
        let mut state = self.state.write().await;

        if !state.offers.contains_key(&id) {
            return Err(LedgerError::UnknownOffer(id));
        }
        let held = state
            .holdings
            .get(account)
            .is_some_and(|holding| holding.valid.contains(&id));
        if !held {
            return Err(LedgerError::NotHeld(id));
        }

        if let Some(offer) = state.offers.get_mut(&id) {
            offer.remaining += 1;
        }
        if let Some(holding) = state.holdings.get_mut(account) {
            holding.valid.remove(&id);
            holding.count -= 1;
        }

        let receipt = state.emit(LedgerEventKind::Relinquished, id, account);
        debug!(offer_id = id, account = %account, block = receipt.block, "Pass card relinquished");
        Ok(receipt)
    }

    /// Aggregate holdings for one account.
    pub async fn holdings_summary(&self, account: &AccountId) -> HoldingsSummary {
        let state = self.state.read().await;
        HoldingsSummary {
            count: state
                .holdings
                .get(account)
                .map_or(0, |holding| holding.count),
        }
    }

    /// Whether `account` holds a valid pass for the offer.
    pub async fn is_valid_holding(&self, id: OfferId, account: &AccountId) -> bool {
        self.state
            .read()
            .await
            .holdings
            .get(account)
            .is_some_and(|holding| holding.valid.contains(&id))
    }

    /// Block of the most recent mutation.
    pub async fn latest_block(&self) -> u64 {
        self.state.read().await.block
    }

    /// Opens an event subscription.
    ///
    /// Registration and any replay happen under the state lock, so the
    /// stream has no gap and no duplicate between replayed and live events.
    pub async fn subscribe(&self, from: FromBlock) -> mpsc::UnboundedReceiver<LedgerEvent> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut state = self.state.write().await;

        if let FromBlock::Number(block) = from {
            for event in state.log.iter().filter(|event| event.block >= block) {
                // A receiver dropped mid-replay just ends the stream early.
                if sender.send(event.clone()).is_err() {
                    break;
                }
            }
        }

        state.subscribers.push(sender);
        debug!(from = ?from, "Opened ledger event subscription");
        receiver
    }
}
