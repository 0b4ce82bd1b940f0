pub mod holding;
pub mod offer;

// Re-export for easier access
pub use holding::HoldingsSummary;
pub use offer::{Offer, OfferId};
