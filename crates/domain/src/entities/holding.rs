use serde::{Deserialize, Serialize};

/// Aggregate holdings for one account, as returned by the raw ledger query.
///
/// The per-offer validity flags are queried separately; this is only the
/// total number of currently-held passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingsSummary {
    pub count: u64,
}
