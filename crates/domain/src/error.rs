//! Contract-level error taxonomy.

use crate::entities::OfferId;

/// Reasons the ledger reverts a mutation.
///
/// These are business-rule violations enforced by the contract runtime, as
/// opposed to transport failures reaching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The offer id is outside `1..=offer_count`.
    #[error("revert: unknown offer id {0}")]
    UnknownOffer(OfferId),
    /// No pass cards remain for the offer.
    #[error("revert: offer {0} has no pass cards remaining")]
    Depleted(OfferId),
    /// The account already holds a valid pass for the offer.
    #[error("revert: pass for offer {0} already held")]
    AlreadyHeld(OfferId),
    /// The account holds no valid pass for the offer.
    #[error("revert: no valid pass held for offer {0}")]
    NotHeld(OfferId),
}
