//! Error types for alert delivery.

use thiserror::Error;

/// Errors that can occur while dispatching a deal alert.
///
/// Delivery faults are deliberately left unrecovered: a missed deal
/// notification is worse than a visible crash demanding operator attention.
#[derive(Debug, Error)]
pub enum AlertError {
    #[error("SMS delivery credentials are not configured")]
    NotConfigured,

    #[error("SMS request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("SMS delivery rejected with HTTP {0}")]
    DeliveryFailed(u16),
}
