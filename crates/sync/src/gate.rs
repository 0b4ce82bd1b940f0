//! Refresh generation tracking.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic generation counter for overlapping refreshes.
///
/// In-flight refreshes are never cancelled; instead each captures a token at
/// start and only the one still newest at completion may commit. Overlapping
/// refreshes therefore resolve to newest-started-wins rather than
/// last-completed-wins.
#[derive(Debug, Default)]
pub(crate) struct RefreshGate {
    started: AtomicU64,
}

impl RefreshGate {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Starts a refresh and returns its token.
    pub(crate) fn begin(&self) -> u64 {
        self.started.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether the token still belongs to the newest started refresh.
    pub(crate) fn is_newest(&self, token: u64) -> bool {
        self.started.load(Ordering::SeqCst) == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_refresh_commits() {
        let gate = RefreshGate::new();
        let token = gate.begin();
        assert!(gate.is_newest(token));
    }

    #[test]
    fn test_superseded_refresh_discarded() {
        let gate = RefreshGate::new();
        let first = gate.begin();
        let second = gate.begin();
        assert!(!gate.is_newest(first));
        assert!(gate.is_newest(second));
    }
}
