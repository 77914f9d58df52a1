//! SMS deal alerts for the fare tracker.
//!
//! This crate provides:
//! - delivery credential handling and the notifications-enabled check
//! - the Twilio SMS sender behind the [`AlertSink`] seam
//! - alert and console message formatting

pub mod credentials;
pub mod error;
pub mod message;
pub mod sms;

pub use credentials::{has_notifications_enabled, SmsCredentials};
pub use error::AlertError;
pub use message::{cheapest_total_message, deal_alert_message};
pub use sms::{AlertSink, SmsSink};
