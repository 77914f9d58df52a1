//! Core data types for the fare tracker.

pub mod airport;
pub mod config;
pub mod currency;
pub mod error;

pub use airport::*;
pub use config::*;
pub use currency::*;
pub use error::*;
