use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ledger-assigned offer identifier. Offers are numbered `1..=count`.
pub type OfferId = u32;

/// A pass card offer as stored on the ledger.
///
/// Offers are seeded at deployment and never deleted; only `remaining`
/// changes, through acquire and relinquish mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: OfferId,
    pub name: String,
    pub description: String,
    pub location: String,
    pub hours: String,
    pub image_ref: String,
    /// Calendar expiry date, no time component.
    pub expiry: NaiveDate,
    /// Pass cards still available for acquisition.
    pub remaining: u32,
}

impl Offer {
    /// Whether the acquire control should be offered at all for this offer,
    /// computed purely from fetched state.
    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(remaining: u32) -> Offer {
        Offer {
            id: 1,
            name: "Test Museum".to_string(),
            description: String::new(),
            location: String::new(),
            hours: String::new(),
            image_ref: String::new(),
            expiry: NaiveDate::from_ymd_opt(2020, 9, 15).unwrap(),
            remaining,
        }
    }

    #[test]
    fn test_depleted_at_zero_remaining() {
        assert!(offer(0).is_depleted());
        assert!(!offer(1).is_depleted());
    }
}
