//! The price-lookup boundary.

use async_trait::async_trait;
use faretrack_core::SearchConfig;

use crate::error::FareError;

/// Result of one poll: the cheapest total found and a human-followable link
/// to the matching search. Ephemeral, used once per cycle and not retained.
#[derive(Debug, Clone, PartialEq)]
pub struct FareQuote {
    /// Cheapest total in pesos. Always positive.
    pub total: f64,
    /// Deep link to the matching search on the booking site.
    pub deep_link: String,
}

/// Trait for fare lookup collaborators.
///
/// The polling loop only sees this seam; the real implementation is
/// [`crate::RestFareClient`], tests substitute stubs.
#[async_trait]
pub trait FareSource: Send + Sync {
    /// Fetch the cheapest total for the configured search.
    async fn cheapest_total(&self, config: &SearchConfig) -> Result<FareQuote, FareError>;
}
