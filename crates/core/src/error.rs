//! Validation error taxonomy.
//!
//! One variant per field rule. Validation stops at the first violated rule,
//! so a result carries exactly one of these.

use thiserror::Error;

/// Errors raised while turning raw options into a [`crate::SearchConfig`].
///
/// All variants are fatal: they are raised before any polling starts and the
/// process exits non-zero.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Deal price is invalid")]
    InvalidDealPrice,

    #[error("Origin airport code is missing")]
    MissingOriginAirport,

    #[error("Origin airport code is invalid")]
    InvalidOriginAirport,

    #[error("Destination airport code is missing")]
    MissingDestinationAirport,

    #[error("Destination airport code is invalid")]
    InvalidDestinationAirport,

    #[error("Departure date is missing")]
    MissingDepartureDate,

    #[error("Departure date is invalid")]
    InvalidDepartureDate,

    #[error("Return date is invalid")]
    InvalidReturnDate,

    #[error("Interval is invalid")]
    InvalidInterval,

    #[error("Environment variable `FARETRACK_USER_AGENT` is missing")]
    MissingClientIdentifier,
}
