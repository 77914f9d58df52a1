//! Twilio SMS sender.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::credentials::{has_notifications_enabled, SmsCredentials};
use crate::error::AlertError;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Trait for alert delivery collaborators.
///
/// The polling loop gates on [`AlertSink::is_enabled`] and dispatches through
/// [`AlertSink::send`]; tests substitute recording sinks.
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Whether delivery is currently configured.
    fn is_enabled(&self) -> bool;

    /// Deliver a plain-text message.
    async fn send(&self, message: &str) -> Result<(), AlertError>;
}

/// SMS delivery through the Twilio Messages API.
pub struct SmsSink {
    http: reqwest::Client,
}

impl SmsSink {
    pub fn new() -> Result<Self, AlertError> {
        Ok(Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()?,
        })
    }
}

#[async_trait]
impl AlertSink for SmsSink {
    fn is_enabled(&self) -> bool {
        has_notifications_enabled()
    }

    async fn send(&self, message: &str) -> Result<(), AlertError> {
        // Credentials are re-read at send time, per the enabled check.
        let creds = SmsCredentials::from_env().ok_or(AlertError::NotConfigured)?;

        let url = format!(
            "{}/Accounts/{}/Messages.json",
            TWILIO_API_BASE, creds.account_sid
        );
        let form = [
            ("From", creds.from_number.as_str()),
            ("To", creds.to_number.as_str()),
            ("Body", message),
        ];

        debug!(to = %creds.to_number, "Sending SMS alert");

        let response = self
            .http
            .post(&url)
            .basic_auth(&creds.account_sid, Some(&creds.auth_token))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AlertError::DeliveryFailed(status.as_u16()));
        }

        Ok(())
    }
}
