//! Alert and console message formatting.

use faretrack_core::format_mxn;

/// Message emitted (and sent by SMS when enabled) when the cheapest total
/// meets the configured deal price.
pub fn deal_alert_message(total: f64, deep_link: &str) -> String {
    format!(
        "Deal alert! New total: {}. Check it out here: {}",
        format_mxn(total),
        deep_link
    )
}

/// Message emitted when no deal price is configured.
pub fn cheapest_total_message(total: f64, deep_link: &str) -> String {
    format!(
        "Cheapest total: {}. Check it out here: {}",
        format_mxn(total),
        deep_link
    )
}
