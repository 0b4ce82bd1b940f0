use passcard_domain::AccountId;

/// Connection settings for a ledger client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Ledger endpoint. Only informational for the in-process adapter; kept
    /// so wiring matches a remote deployment.
    pub endpoint: String,
    /// Wallet-injected account, if any. Falls back to the local development
    /// account when absent.
    pub account: Option<AccountId>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:7545".to_string(),
            account: None,
        }
    }
}

impl ClientConfig {
    /// Resolves the acting identity: the injected account or the local
    /// development fallback.
    #[must_use]
    pub fn resolve_account(&self) -> AccountId {
        self.account.clone().unwrap_or_else(AccountId::dev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falls_back_to_dev_account() {
        assert_eq!(ClientConfig::default().resolve_account(), AccountId::dev());
    }

    #[test]
    fn test_injected_account_wins() {
        let config = ClientConfig {
            account: Some(AccountId::new("0xabc")),
            ..ClientConfig::default()
        };
        assert_eq!(config.resolve_account(), AccountId::new("0xabc"));
    }
}
