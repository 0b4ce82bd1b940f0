use passcard_domain::LedgerError;

/// Errors surfaced at the client boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The contract rejected the call (business-rule violation).
    #[error(transparent)]
    Reverted(#[from] LedgerError),
    /// The ledger endpoint could not be reached or the call did not
    /// complete.
    #[error("transport error: {reason}")]
    Transport { reason: String },
    /// No wallet account is available to act as.
    #[error("no account available from the wallet provider")]
    NoAccount,
}

impl ClientError {
    /// Whether the error is a contract-level rejection rather than a
    /// connectivity failure.
    #[must_use]
    pub fn is_revert(&self) -> bool {
        matches!(self, Self::Reverted(_))
    }
}
