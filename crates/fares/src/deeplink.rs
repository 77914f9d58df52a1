//! Deep-link generation for the booking site.
//!
//! Pure string building from an already-validated configuration; no
//! validation responsibility here.

use faretrack_core::{SearchConfig, DATE_FORMAT};

const SEARCH_BASE_URL: &str = "https://www.aeromexico.com/en-us/search";

/// Build a human-followable URL pointing at the matching search.
pub fn search_deeplink(config: &SearchConfig) -> String {
    let mut url = format!(
        "{}?origin={}&destination={}&departure={}",
        SEARCH_BASE_URL,
        config.origin_airport,
        config.destination_airport,
        config.departure_date.format(DATE_FORMAT),
    );

    if let Some(return_date) = config.return_date {
        url.push_str(&format!("&return={}", return_date.format(DATE_FORMAT)));
    }

    url
}
