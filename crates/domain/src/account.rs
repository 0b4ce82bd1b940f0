//! Account identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback identity used when no wallet account is injected, mirroring a
/// local development endpoint's first unlocked account.
pub const DEV_ACCOUNT: &str = "0x0000000000000000000000000000000000000001";

/// Opaque account address as reported by the wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// The local development fallback account.
    #[must_use]
    pub fn dev() -> Self {
        Self(DEV_ACCOUNT.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}
