//! Error types for fare lookup.

use thiserror::Error;

/// Errors that can occur while fetching the cheapest total.
#[derive(Debug, Error)]
pub enum FareError {
    #[error("Fare request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Fare search returned HTTP {0}")]
    Status(u16),

    #[error("Failed to parse fare response: {0}")]
    Parse(String),

    #[error("No fares found for the requested search")]
    NoFaresFound,
}
