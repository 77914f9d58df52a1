//! SMS delivery credentials.

pub const ENV_ACCOUNT_SID: &str = "TWILIO_ACCOUNT_SID";
pub const ENV_AUTH_TOKEN: &str = "TWILIO_AUTH_TOKEN";
pub const ENV_PHONE_FROM: &str = "TWILIO_PHONE_FROM";
pub const ENV_PHONE_TO: &str = "TWILIO_PHONE_TO";

/// The four delivery credentials. All must be present and non-empty for
/// notifications to be considered enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsCredentials {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
    pub to_number: String,
}

impl SmsCredentials {
    /// Read credentials from the live environment.
    ///
    /// Read lazily at send time rather than captured at startup, so an
    /// externally mutated environment can change the answer between cycles.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Credential load with an explicit lookup, the seam used by tests.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |var: &str| lookup(var).filter(|v| !v.is_empty());
        Some(Self {
            account_sid: require(ENV_ACCOUNT_SID)?,
            auth_token: require(ENV_AUTH_TOKEN)?,
            from_number: require(ENV_PHONE_FROM)?,
            to_number: require(ENV_PHONE_TO)?,
        })
    }
}

/// True iff all four credential variables are simultaneously non-empty.
pub fn has_notifications_enabled() -> bool {
    SmsCredentials::from_env().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    const ALL_FOUR: [(&str, &str); 4] = [
        (ENV_ACCOUNT_SID, "AC123"),
        (ENV_AUTH_TOKEN, "token"),
        (ENV_PHONE_FROM, "+5215500000001"),
        (ENV_PHONE_TO, "+5215500000002"),
    ];

    #[test]
    fn test_all_four_present() {
        let creds = SmsCredentials::from_lookup(lookup_from(&ALL_FOUR)).unwrap();
        assert_eq!(creds.account_sid, "AC123");
        assert_eq!(creds.to_number, "+5215500000002");
    }

    #[test]
    fn test_any_single_one_missing_disables() {
        for skip in 0..ALL_FOUR.len() {
            let partial: Vec<(&str, &str)> = ALL_FOUR
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, pair)| *pair)
                .collect();
            assert_eq!(
                SmsCredentials::from_lookup(lookup_from(&partial)),
                None,
                "expected missing {} to disable notifications",
                ALL_FOUR[skip].0
            );
        }
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let mut pairs = ALL_FOUR;
        pairs[1] = (ENV_AUTH_TOKEN, "");
        assert_eq!(SmsCredentials::from_lookup(lookup_from(&pairs)), None);
    }
}
