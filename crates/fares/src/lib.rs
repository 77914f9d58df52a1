//! Fare lookup for the tracker.
//!
//! This crate owns the price-lookup boundary:
//! - the [`FareSource`] trait the polling loop talks to
//! - the REST client implementation against the fare search API
//! - the deep-link generator for the booking site

pub mod client;
pub mod deeplink;
pub mod error;
pub mod quote;

pub use client::RestFareClient;
pub use deeplink::search_deeplink;
pub use error::FareError;
pub use quote::{FareQuote, FareSource};
