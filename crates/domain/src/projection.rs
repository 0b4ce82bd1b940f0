//! Client-side read model of ledger state.

use crate::account::AccountId;
use crate::entities::{Offer, OfferId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Snapshot of everything the renderer needs: the full offer catalogue and
/// the viewing account's holdings.
///
/// A projection is rebuilt wholesale from a full refetch, never patched
/// incrementally, so a missed or reordered event can never leave it drifted
/// from ledger state for longer than one refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    /// Account the holdings view belongs to.
    pub account: AccountId,
    /// All offers, ordered by ascending id.
    pub offers: Vec<Offer>,
    /// Offers the account currently holds a valid pass for.
    pub held: BTreeSet<OfferId>,
    /// Aggregate held-pass count reported by the ledger.
    pub held_count: u64,
}

impl Projection {
    /// Builds a projection, normalizing offer order to ascending id.
    #[must_use]
    pub fn new(
        account: AccountId,
        mut offers: Vec<Offer>,
        held: BTreeSet<OfferId>,
        held_count: u64,
    ) -> Self {
        offers.sort_by_key(|offer| offer.id);
        Self {
            account,
            offers,
            held,
            held_count,
        }
    }

    #[must_use]
    pub fn offer(&self, id: OfferId) -> Option<&Offer> {
        self.offers.iter().find(|offer| offer.id == id)
    }

    /// Whether the account holds a valid pass for the offer.
    #[must_use]
    pub fn holds(&self, id: OfferId) -> bool {
        self.held.contains(&id)
    }

    /// Whether the acquire control should be enabled for the offer.
    ///
    /// Computed purely from this snapshot: a depleted offer or one already
    /// held renders the control disabled.
    #[must_use]
    pub fn can_acquire(&self, id: OfferId) -> bool {
        match self.offer(id) {
            Some(offer) => !offer.is_depleted() && !self.holds(id),
            None => false,
        }
    }

    /// Offers currently held, in ascending id order.
    pub fn held_offers(&self) -> impl Iterator<Item = &Offer> {
        self.offers.iter().filter(|offer| self.holds(offer.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn offer(id: OfferId, remaining: u32) -> Offer {
        Offer {
            id,
            name: format!("Museum {id}"),
            description: String::new(),
            location: String::new(),
            hours: String::new(),
            image_ref: String::new(),
            expiry: NaiveDate::from_ymd_opt(2020, 12, 16).unwrap(),
            remaining,
        }
    }

    fn projection(offers: Vec<Offer>, held: &[OfferId]) -> Projection {
        let held_count = held.len() as u64;
        Projection::new(
            AccountId::dev(),
            offers,
            held.iter().copied().collect(),
            held_count,
        )
    }

    #[test]
    fn test_offers_sorted_by_id() {
        let p = projection(vec![offer(3, 1), offer(1, 1), offer(2, 1)], &[]);
        let ids: Vec<OfferId> = p.offers.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_depleted_offer_not_acquirable() {
        let p = projection(vec![offer(1, 0), offer(2, 5)], &[]);
        assert!(!p.can_acquire(1));
        assert!(p.can_acquire(2));
    }

    #[test]
    fn test_held_offer_not_acquirable() {
        let p = projection(vec![offer(1, 5)], &[1]);
        assert!(p.holds(1));
        assert!(!p.can_acquire(1));
    }

    #[test]
    fn test_unknown_offer_not_acquirable() {
        let p = projection(vec![offer(1, 5)], &[]);
        assert!(!p.can_acquire(99));
    }

    #[test]
    fn test_held_offers_iterates_holdings_only() {
        let p = projection(vec![offer(1, 5), offer(2, 5), offer(3, 5)], &[1, 3]);
        let held: Vec<OfferId> = p.held_offers().map(|o| o.id).collect();
        assert_eq!(held, vec![1, 3]);
    }
}
