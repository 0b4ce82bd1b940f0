//! The view state synchronizer.

use crate::gate::RefreshGate;
use crate::renderer::Renderer;
use passcard_client::{ClientError, EventStream, LedgerClient};
use passcard_domain::{AccountId, FromBlock, OfferId, Projection};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Tuning for the synchronizer.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Quiet period after an event before the refetch runs. Bursts of
    /// events inside the window coalesce into one refresh.
    pub debounce: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(250),
        }
    }
}

/// Errors that abort synchronizer startup.
///
/// After startup, fetch failures degrade softly (logged, previous view
/// kept) and never surface as `Err`.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Owns the projection and keeps it consistent with ledger state.
///
/// The projection is rebuilt wholesale from a full refetch after every
/// ledger event; it is never patched in place, so missed or reordered
/// events cannot make it drift for longer than one refresh cycle. All
/// mutation of the projection happens on the synchronizer's own tasks.
pub struct Synchronizer {
    client: Arc<dyn LedgerClient>,
    renderer: Arc<dyn Renderer>,
    account: AccountId,
    projection: RwLock<Option<Projection>>,
    gate: RefreshGate,
    config: SyncConfig,
}

impl Synchronizer {
    /// Establishes identity, subscribes to the event feed from the latest
    /// block (no historical replay), spawns the event loop and performs the
    /// initial refresh behind a loading indicator.
    ///
    /// # Errors
    /// Fails only if the account or the subscription cannot be established;
    /// a failing initial refresh leaves the loading state plus a visible
    /// error, same as any later refresh failure.
    pub async fn initialize(
        client: Arc<dyn LedgerClient>,
        renderer: Arc<dyn Renderer>,
        config: SyncConfig,
    ) -> Result<Arc<Self>, SyncError> {
        let account = client.default_account().await?;
        let events = client.subscribe_events(FromBlock::Latest).await?;

        info!(account = %account, "Starting view state synchronizer");

        let sync = Arc::new(Self {
            client,
            renderer,
            account,
            projection: RwLock::new(None),
            gate: RefreshGate::new(),
            config,
        });

        tokio::spawn(Arc::clone(&sync).event_loop(events));

        sync.renderer.show_loading();
        sync.refresh().await;
        Ok(sync)
    }

    /// Account the holdings view is scoped to.
    #[must_use]
    pub fn account(&self) -> &AccountId {
        &self.account
    }

    /// Snapshot of the current projection, if one has been committed.
    pub async fn projection(&self) -> Option<Projection> {
        self.projection.read().await.clone()
    }

    /// Rebuilds the projection from a full refetch and renders it.
    ///
    /// Fails softly: on any fetch error the previous projection and view
    /// stay untouched (no partial overwrite) and an error state is
    /// rendered. A completion superseded by a newer refresh is discarded.
    pub async fn refresh(&self) {
        let token = self.gate.begin();

        match self.fetch_projection().await {
            Ok(projection) => {
                // Commit and render under the lock so a competing refresh
                // cannot interleave between the two.
                let mut current = self.projection.write().await;
                if !self.gate.is_newest(token) {
                    debug!(token, "Discarding superseded refresh");
                    return;
                }
                *current = Some(projection.clone());
                debug!(
                    offer_count = projection.offers.len(),
                    held_count = projection.held_count,
                    "Projection refreshed"
                );
                self.renderer.render(&projection);
            }
            Err(error) => {
                // A superseded failure must not paint an error over a newer
                // successful render.
                if !self.gate.is_newest(token) {
                    debug!(token, error = %error, "Discarding superseded failed refresh");
                    return;
                }
                warn!(error = %error, "Refresh failed, keeping previous view");
                self.renderer
                    .show_error("could not refresh offers from the ledger");
            }
        }
    }

    /// Manual retry for the rendered error state.
    pub async fn retry(&self) {
        self.renderer.show_loading();
        self.refresh().await;
    }

    /// Requests a pass card for the current account.
    ///
    /// No optimistic update: the projection changes only once the ledger's
    /// event comes back and triggers a refresh. A rejection is logged and
    /// surfaced; nothing is retried.
    pub async fn acquire_offer(&self, id: OfferId) {
        self.renderer.show_loading();
        match self.client.acquire_offer(id, &self.account).await {
            Ok(receipt) => {
                debug!(offer_id = id, block = receipt.block, "Acquire accepted, awaiting event");
            }
            Err(error) => {
                warn!(offer_id = id, error = %error, "Acquire rejected");
                self.renderer.show_error(&error.to_string());
            }
        }
    }

    /// Returns a held pass card. Symmetric to `acquire_offer`.
    pub async fn relinquish_offer(&self, id: OfferId) {
        self.renderer.show_loading();
        match self.client.relinquish_offer(id, &self.account).await {
            Ok(receipt) => {
                debug!(offer_id = id, block = receipt.block, "Relinquish accepted, awaiting event");
            }
            Err(error) => {
                warn!(offer_id = id, error = %error, "Relinquish rejected");
                self.renderer.show_error(&error.to_string());
            }
        }
    }

    /// Consumes the event feed until it closes.
    ///
    /// Every event schedules a refresh, whatever its kind and whichever
    /// account caused it; the feed carries no filter, so other users'
    /// mutations refresh this view too. Bursts inside the debounce window
    /// collapse into a single refetch.
    async fn event_loop(self: Arc<Self>, mut events: EventStream) {
        loop {
            let Some(event) = events.recv().await else {
                debug!("Ledger event feed closed");
                return;
            };
            debug!(
                kind = ?event.kind,
                offer_id = event.offer_id,
                account = %event.account,
                block = event.block,
                "Ledger event received"
            );

            let mut feed_closed = false;
            loop {
                match timeout(self.config.debounce, events.recv()).await {
                    Ok(Some(coalesced)) => {
                        debug!(block = coalesced.block, "Coalescing event into pending refresh");
                    }
                    Ok(None) => {
                        feed_closed = true;
                        break;
                    }
                    Err(_) => break,
                }
            }

            self.refresh().await;

            if feed_closed {
                debug!("Ledger event feed closed");
                return;
            }
        }
    }

    /// Fetches offer count, every offer, the holdings summary and every
    /// per-offer validity flag, and assembles the new projection.
    ///
    /// Per-offer fetches fan out concurrently with a join barrier before
    /// assembly; any single failure fails the whole build.
    async fn fetch_projection(&self) -> Result<Projection, ClientError> {
        let count = self.client.offer_count().await?;

        let mut fetches = JoinSet::new();
        for id in 1..=count {
            let client = Arc::clone(&self.client);
            fetches.spawn(async move { client.offer(id).await });
        }
        let mut offers = Vec::with_capacity(count as usize);
        while let Some(joined) = fetches.join_next().await {
            offers.push(joined.map_err(join_error)??);
        }

        let summary = self.client.holdings_summary(&self.account).await?;

        let mut fetches = JoinSet::new();
        for id in 1..=count {
            let client = Arc::clone(&self.client);
            let account = self.account.clone();
            fetches.spawn(async move {
                client
                    .is_valid_holding(id, &account)
                    .await
                    .map(|valid| (id, valid))
            });
        }
        let mut held = BTreeSet::new();
        while let Some(joined) = fetches.join_next().await {
            let (id, valid) = joined.map_err(join_error)??;
            if valid {
                held.insert(id);
            }
        }

        Ok(Projection::new(
            self.account.clone(),
            offers,
            held,
            summary.count,
        ))
    }
}

fn join_error(error: tokio::task::JoinError) -> ClientError {
    ClientError::Transport {
        reason: format!("fetch task failed: {error}"),
    }
}
