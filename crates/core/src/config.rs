//! Search configuration: raw options, environment fallback, validation.
//!
//! The validator turns untrusted input (CLI flags merged with `FARETRACK_*`
//! environment fallbacks) into an immutable [`SearchConfig`], or fails fast
//! with the first violated rule. Explicit input always wins over the
//! environment. No error accumulation: validation stops at the first failure.

use chrono::{Local, NaiveDate};
use std::collections::HashMap;

use crate::airport::is_known_airport;
use crate::error::ValidationError;

/// Fixed textual date format for departure/return dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default minutes between polls when none is configured.
pub const DEFAULT_POLL_INTERVAL_MINUTES: u32 = 30;

/// Namespace prefix for all tracker environment variables.
pub const ENV_PREFIX: &str = "FARETRACK_";

pub const ENV_ORIGIN_AIRPORT: &str = "FARETRACK_ORIGIN_AIRPORT";
pub const ENV_DESTINATION_AIRPORT: &str = "FARETRACK_DESTINATION_AIRPORT";
pub const ENV_DEPARTURE_DATE: &str = "FARETRACK_DEPARTURE_DATE";
pub const ENV_RETURN_DATE: &str = "FARETRACK_RETURN_DATE";
pub const ENV_DEAL_PRICE: &str = "FARETRACK_DEAL_PRICE";
pub const ENV_INTERVAL: &str = "FARETRACK_INTERVAL";
pub const ENV_USER_AGENT: &str = "FARETRACK_USER_AGENT";

/// Whether a deal price must be configured.
///
/// The single switch between the two deployment profiles: a tracker that only
/// alerts on deals (deal price required, fare API addressed directly with a
/// client user agent) and a tracker that can also report the current cheapest
/// total (deal price optional).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementMode {
    DealPriceRequired,
    DealPriceOptional,
}

/// Raw, untrusted options as they come off the CLI. All fields optional;
/// anything absent falls back to its environment variable.
#[derive(Debug, Clone, Default)]
pub struct RawSearchOptions {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    pub deal_price: Option<String>,
    pub poll_interval: Option<String>,
}

/// Environment snapshot taken once at startup.
///
/// Validation reads only this snapshot, never the live environment, so the
/// validator stays a pure function of its inputs.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture every `FARETRACK_*` variable from the process environment.
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars()
                .filter(|(k, _)| k.starts_with(ENV_PREFIX))
                .collect(),
        }
    }

    /// Build a snapshot from explicit pairs (used in tests).
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a variable; empty values count as absent.
    pub fn get(&self, var: &str) -> Option<&str> {
        self.vars
            .get(var)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Fully validated search configuration. Immutable once constructed;
/// consumed by the polling loop for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Validated origin IATA code.
    pub origin_airport: String,
    /// Validated destination IATA code. May equal the origin.
    pub destination_airport: String,
    /// On or after today at validation time.
    pub departure_date: NaiveDate,
    /// Optional; validated identically to the departure date when present.
    pub return_date: Option<NaiveDate>,
    /// Positive deal threshold in whole pesos. `None` means report-only.
    pub deal_price: Option<u32>,
    /// Minutes between polls.
    pub poll_interval_minutes: u32,
    /// Fare API client identifier. Present exactly in
    /// [`RequirementMode::DealPriceRequired`].
    pub user_agent: Option<String>,
}

impl SearchConfig {
    /// Validate raw options against the environment snapshot.
    ///
    /// "Today" is computed at call time with date-only granularity.
    pub fn validate(
        raw: &RawSearchOptions,
        env: &EnvSnapshot,
        mode: RequirementMode,
    ) -> Result<Self, ValidationError> {
        Self::validate_at(raw, env, mode, Local::now().date_naive())
    }

    /// Validation with an explicit "today", the seam used by tests.
    pub fn validate_at(
        raw: &RawSearchOptions,
        env: &EnvSnapshot,
        mode: RequirementMode,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        // In required mode the deal price is checked before anything else.
        let mut deal_price = match mode {
            RequirementMode::DealPriceRequired => {
                let value = resolve(&raw.deal_price, env, ENV_DEAL_PRICE);
                Some(parse_deal_price(value).ok_or(ValidationError::InvalidDealPrice)?)
            }
            RequirementMode::DealPriceOptional => None,
        };

        let origin_airport = resolve(&raw.origin, env, ENV_ORIGIN_AIRPORT)
            .ok_or(ValidationError::MissingOriginAirport)?;
        if !is_known_airport(origin_airport) {
            return Err(ValidationError::InvalidOriginAirport);
        }

        let destination_airport = resolve(&raw.destination, env, ENV_DESTINATION_AIRPORT)
            .ok_or(ValidationError::MissingDestinationAirport)?;
        if !is_known_airport(destination_airport) {
            return Err(ValidationError::InvalidDestinationAirport);
        }

        let departure_raw = resolve(&raw.departure_date, env, ENV_DEPARTURE_DATE)
            .ok_or(ValidationError::MissingDepartureDate)?;
        let departure_date = parse_strict_date(departure_raw, today)
            .ok_or(ValidationError::InvalidDepartureDate)?;

        let return_date = match resolve(&raw.return_date, env, ENV_RETURN_DATE) {
            Some(value) => {
                Some(parse_strict_date(value, today).ok_or(ValidationError::InvalidReturnDate)?)
            }
            None => None,
        };

        let poll_interval_minutes =
            parse_interval(resolve(&raw.poll_interval, env, ENV_INTERVAL))?;

        // Client identifier comes purely from the environment, never the CLI.
        let user_agent = match mode {
            RequirementMode::DealPriceRequired => Some(
                env.get(ENV_USER_AGENT)
                    .ok_or(ValidationError::MissingClientIdentifier)?
                    .to_string(),
            ),
            RequirementMode::DealPriceOptional => None,
        };

        // In optional mode an unparseable or non-positive deal price is
        // silently omitted rather than rejected.
        if mode == RequirementMode::DealPriceOptional {
            deal_price = parse_deal_price(resolve(&raw.deal_price, env, ENV_DEAL_PRICE));
        }

        Ok(Self {
            origin_airport: origin_airport.to_string(),
            destination_airport: destination_airport.to_string(),
            departure_date,
            return_date,
            deal_price,
            poll_interval_minutes,
            user_agent,
        })
    }
}

/// Per-field resolution: explicit value, else environment fallback.
/// Empty strings count as absent in both sources.
fn resolve<'a>(explicit: &'a Option<String>, env: &'a EnvSnapshot, var: &str) -> Option<&'a str> {
    explicit
        .as_deref()
        .filter(|v| !v.is_empty())
        .or_else(|| env.get(var))
}

fn parse_deal_price(value: Option<&str>) -> Option<u32> {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&price| price > 0)
}

/// Reconciled interval policy, uniform across both modes: non-numeric,
/// missing, or zero falls back to the default; an explicit negative or
/// out-of-range value is a hard error.
fn parse_interval(value: Option<&str>) -> Result<u32, ValidationError> {
    let Some(raw) = value else {
        return Ok(DEFAULT_POLL_INTERVAL_MINUTES);
    };
    match raw.trim().parse::<i64>() {
        Err(_) => Ok(DEFAULT_POLL_INTERVAL_MINUTES),
        Ok(0) => Ok(DEFAULT_POLL_INTERVAL_MINUTES),
        Ok(minutes) if minutes < 0 => Err(ValidationError::InvalidInterval),
        Ok(minutes) => u32::try_from(minutes).map_err(|_| ValidationError::InvalidInterval),
    }
}

/// Strict parse under the fixed format, rejecting anything that does not
/// round-trip verbatim, plus the not-in-the-past rule. Today is accepted.
fn parse_strict_date(value: &str, today: NaiveDate) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).ok()?;
    if date.format(DATE_FORMAT).to_string() != value {
        return None;
    }
    (date >= today).then_some(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TODAY: &str = "2026-08-29";

    fn today() -> NaiveDate {
        NaiveDate::parse_from_str(TODAY, DATE_FORMAT).unwrap()
    }

    fn raw_valid() -> RawSearchOptions {
        RawSearchOptions {
            origin: Some("MEX".into()),
            destination: Some("CUN".into()),
            departure_date: Some("2026-09-15".into()),
            return_date: None,
            deal_price: Some("4000".into()),
            poll_interval: None,
        }
    }

    fn env_with_agent() -> EnvSnapshot {
        EnvSnapshot::from_pairs([(ENV_USER_AGENT, "faretrack/0.1")])
    }

    fn validate_required(raw: &RawSearchOptions) -> Result<SearchConfig, ValidationError> {
        SearchConfig::validate_at(
            raw,
            &env_with_agent(),
            RequirementMode::DealPriceRequired,
            today(),
        )
    }

    fn validate_optional(raw: &RawSearchOptions) -> Result<SearchConfig, ValidationError> {
        SearchConfig::validate_at(
            raw,
            &EnvSnapshot::default(),
            RequirementMode::DealPriceOptional,
            today(),
        )
    }

    #[test]
    fn test_valid_round_trip_config() {
        let mut raw = raw_valid();
        raw.return_date = Some("2026-09-22".into());
        let config = validate_required(&raw).unwrap();

        assert_eq!(config.origin_airport, "MEX");
        assert_eq!(config.destination_airport, "CUN");
        assert_eq!(config.departure_date.to_string(), "2026-09-15");
        assert_eq!(config.return_date.unwrap().to_string(), "2026-09-22");
        assert_eq!(config.deal_price, Some(4000));
        assert_eq!(config.poll_interval_minutes, DEFAULT_POLL_INTERVAL_MINUTES);
        assert_eq!(config.user_agent.as_deref(), Some("faretrack/0.1"));
    }

    #[test]
    fn test_missing_and_invalid_airports() {
        let mut raw = raw_valid();
        raw.origin = None;
        assert_eq!(
            validate_required(&raw),
            Err(ValidationError::MissingOriginAirport)
        );

        let mut raw = raw_valid();
        raw.origin = Some(String::new());
        assert_eq!(
            validate_required(&raw),
            Err(ValidationError::MissingOriginAirport)
        );

        let mut raw = raw_valid();
        raw.origin = Some("XX1".into());
        assert_eq!(
            validate_required(&raw),
            Err(ValidationError::InvalidOriginAirport)
        );

        let mut raw = raw_valid();
        raw.destination = None;
        assert_eq!(
            validate_required(&raw),
            Err(ValidationError::MissingDestinationAirport)
        );

        let mut raw = raw_valid();
        raw.destination = Some("NOPE".into());
        assert_eq!(
            validate_required(&raw),
            Err(ValidationError::InvalidDestinationAirport)
        );
    }

    #[test]
    fn test_origin_may_equal_destination() {
        let mut raw = raw_valid();
        raw.destination = Some("MEX".into());
        let config = validate_required(&raw).unwrap();
        assert_eq!(config.origin_airport, config.destination_airport);
    }

    #[test]
    fn test_departure_date_rules() {
        let mut raw = raw_valid();
        raw.departure_date = None;
        assert_eq!(
            validate_required(&raw),
            Err(ValidationError::MissingDepartureDate)
        );

        // Today itself is accepted.
        let mut raw = raw_valid();
        raw.departure_date = Some(TODAY.into());
        let config = validate_required(&raw).unwrap();
        assert_eq!(config.departure_date, today());

        // One day in the past is rejected.
        let mut raw = raw_valid();
        raw.departure_date = Some("2026-08-28".into());
        assert_eq!(
            validate_required(&raw),
            Err(ValidationError::InvalidDepartureDate)
        );

        // Loose formats are rejected even when chrono could parse them.
        for bad in ["2026-9-15", "15-09-2026", "2026/09/15", "not-a-date"] {
            let mut raw = raw_valid();
            raw.departure_date = Some(bad.into());
            assert_eq!(
                validate_required(&raw),
                Err(ValidationError::InvalidDepartureDate),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_return_date_rules() {
        // Absent return date is simply omitted.
        let config = validate_required(&raw_valid()).unwrap();
        assert_eq!(config.return_date, None);

        let mut raw = raw_valid();
        raw.return_date = Some("2026-08-01".into());
        assert_eq!(
            validate_required(&raw),
            Err(ValidationError::InvalidReturnDate)
        );

        // No ordering constraint against the departure date.
        let mut raw = raw_valid();
        raw.return_date = Some("2026-09-01".into());
        let config = validate_required(&raw).unwrap();
        assert!(config.return_date.unwrap() < config.departure_date);
    }

    #[test]
    fn test_deal_price_required_mode() {
        let mut raw = raw_valid();
        raw.deal_price = None;
        assert_eq!(
            validate_required(&raw),
            Err(ValidationError::InvalidDealPrice)
        );

        for bad in ["0", "-100", "abc", "12.5"] {
            let mut raw = raw_valid();
            raw.deal_price = Some(bad.into());
            assert_eq!(
                validate_required(&raw),
                Err(ValidationError::InvalidDealPrice),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_deal_price_checked_before_airports_in_required_mode() {
        let mut raw = raw_valid();
        raw.deal_price = Some("garbage".into());
        raw.origin = Some("XXX".into());
        assert_eq!(
            validate_required(&raw),
            Err(ValidationError::InvalidDealPrice)
        );
    }

    #[test]
    fn test_deal_price_optional_mode_silently_omits() {
        for junk in [None, Some("0"), Some("-100"), Some("abc")] {
            let mut raw = raw_valid();
            raw.deal_price = junk.map(Into::into);
            let config = validate_optional(&raw).unwrap();
            assert_eq!(config.deal_price, None);
        }

        let config = validate_optional(&raw_valid()).unwrap();
        assert_eq!(config.deal_price, Some(4000));
        assert_eq!(config.user_agent, None);
    }

    #[test]
    fn test_optional_mode_airport_errors_win_over_deal_price() {
        let mut raw = raw_valid();
        raw.deal_price = Some("garbage".into());
        raw.origin = Some("XXX".into());
        assert_eq!(
            validate_optional(&raw),
            Err(ValidationError::InvalidOriginAirport)
        );
    }

    #[test]
    fn test_interval_policy() {
        for (value, expected) in [
            (None, DEFAULT_POLL_INTERVAL_MINUTES),
            (Some("abc"), DEFAULT_POLL_INTERVAL_MINUTES),
            (Some("0"), DEFAULT_POLL_INTERVAL_MINUTES),
            (Some("45"), 45),
        ] {
            let mut raw = raw_valid();
            raw.poll_interval = value.map(Into::into);
            let config = validate_required(&raw).unwrap();
            assert_eq!(config.poll_interval_minutes, expected, "value {value:?}");
        }

        let mut raw = raw_valid();
        raw.poll_interval = Some("-5".into());
        assert_eq!(
            validate_required(&raw),
            Err(ValidationError::InvalidInterval)
        );
    }

    #[test]
    fn test_interval_rejects_values_beyond_u32() {
        // One past u32::MAX must not wrap around to zero minutes.
        let mut raw = raw_valid();
        raw.poll_interval = Some("4294967296".into());
        assert_eq!(
            validate_required(&raw),
            Err(ValidationError::InvalidInterval)
        );

        let mut raw = raw_valid();
        raw.poll_interval = Some(u32::MAX.to_string());
        let config = validate_required(&raw).unwrap();
        assert_eq!(config.poll_interval_minutes, u32::MAX);
    }

    #[test]
    fn test_explicit_input_wins_over_environment() {
        let env = EnvSnapshot::from_pairs([
            (ENV_ORIGIN_AIRPORT, "GDL"),
            (ENV_DEAL_PRICE, "9999"),
            (ENV_USER_AGENT, "faretrack/0.1"),
        ]);
        let raw = raw_valid();
        let config = SearchConfig::validate_at(
            &raw,
            &env,
            RequirementMode::DealPriceRequired,
            today(),
        )
        .unwrap();

        assert_eq!(config.origin_airport, "MEX");
        assert_eq!(config.deal_price, Some(4000));
    }

    #[test]
    fn test_environment_fallback_fills_missing_fields() {
        let env = EnvSnapshot::from_pairs([
            (ENV_ORIGIN_AIRPORT, "GDL"),
            (ENV_DESTINATION_AIRPORT, "TIJ"),
            (ENV_DEPARTURE_DATE, "2026-12-24"),
            (ENV_RETURN_DATE, "2027-01-06"),
            (ENV_INTERVAL, "60"),
        ]);
        let config = SearchConfig::validate_at(
            &RawSearchOptions::default(),
            &env,
            RequirementMode::DealPriceOptional,
            today(),
        )
        .unwrap();

        assert_eq!(config.origin_airport, "GDL");
        assert_eq!(config.destination_airport, "TIJ");
        assert_eq!(config.departure_date.to_string(), "2026-12-24");
        assert_eq!(config.return_date.unwrap().to_string(), "2027-01-06");
        assert_eq!(config.deal_price, None);
        assert_eq!(config.poll_interval_minutes, 60);
    }

    #[test]
    fn test_missing_client_identifier() {
        let raw = raw_valid();
        let result = SearchConfig::validate_at(
            &raw,
            &EnvSnapshot::default(),
            RequirementMode::DealPriceRequired,
            today(),
        );
        assert_eq!(result, Err(ValidationError::MissingClientIdentifier));
    }
}
