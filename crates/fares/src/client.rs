//! REST client for the fare search API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use faretrack_core::{SearchConfig, DATE_FORMAT};

use crate::deeplink::search_deeplink;
use crate::error::FareError;
use crate::quote::{FareQuote, FareSource};

const DEFAULT_BASE_URL: &str = "https://www.aeromexico.com/api/fare-search";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One priced itinerary in the search response.
#[derive(Debug, Deserialize)]
struct FareOption {
    total: f64,
}

/// Fare search response payload.
#[derive(Debug, Deserialize)]
struct FareSearchResponse {
    fares: Vec<FareOption>,
}

/// Fare lookup client against the booking site's search API.
pub struct RestFareClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestFareClient {
    /// Create a client, identifying itself with the configured user agent
    /// when one is present.
    pub fn new(user_agent: Option<&str>) -> Result<Self, FareError> {
        let mut builder = reqwest::Client::builder().timeout(REQUEST_TIMEOUT);
        if let Some(agent) = user_agent {
            builder = builder.user_agent(agent.to_string());
        }
        Ok(Self {
            http: builder.build()?,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the search endpoint (used in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl FareSource for RestFareClient {
    async fn cheapest_total(&self, config: &SearchConfig) -> Result<FareQuote, FareError> {
        let departure = config.departure_date.format(DATE_FORMAT).to_string();
        let mut query = vec![
            ("origin", config.origin_airport.clone()),
            ("destination", config.destination_airport.clone()),
            ("departure", departure),
        ];
        if let Some(return_date) = config.return_date {
            query.push(("return", return_date.format(DATE_FORMAT).to_string()));
        }

        debug!(
            origin = %config.origin_airport,
            destination = %config.destination_airport,
            "Fetching fares"
        );

        let response = self.http.get(&self.base_url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FareError::Status(status.as_u16()));
        }

        let payload: FareSearchResponse = response
            .json()
            .await
            .map_err(|e| FareError::Parse(e.to_string()))?;

        let total = lowest_total(&payload.fares).ok_or(FareError::NoFaresFound)?;
        debug!(total, "Cheapest total found");

        Ok(FareQuote {
            total,
            deep_link: search_deeplink(config),
        })
    }
}

/// Pick the minimum total out of the priced itineraries.
fn lowest_total(fares: &[FareOption]) -> Option<f64> {
    fares
        .iter()
        .map(|fare| fare.total)
        .filter(|total| *total > 0.0)
        .fold(None, |lowest, total| match lowest {
            Some(current) if current <= total => Some(current),
            _ => Some(total),
        })
}
