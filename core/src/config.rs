//! Client configuration.
//!
//! Defaults point at the public Leipzig endpoint with the anonymous account.
//! `from_env` overrides individual fields from `WORTSCHATZ_*` variables.

use std::env;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://wortschatz.uni-leipzig.de/axis/services";
pub const DEFAULT_LOGIN: &str = "anonymous";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL the service name is appended to, e.g. `.../axis/services`.
    pub base_url: String,
    pub login: String,
    pub password: String,
    #[serde(with = "secs")]
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            login: DEFAULT_LOGIN.to_string(),
            password: DEFAULT_LOGIN.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Defaults with `base_url` replaced.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Read `WORTSCHATZ_URL`, `WORTSCHATZ_USER`, `WORTSCHATZ_PASSWORD` and
    /// `WORTSCHATZ_TIMEOUT_SECS`, falling back to the defaults for unset or
    /// unparsable values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: lookup("WORTSCHATZ_URL").unwrap_or(defaults.base_url),
            login: lookup("WORTSCHATZ_USER").unwrap_or(defaults.login),
            password: lookup("WORTSCHATZ_PASSWORD").unwrap_or(defaults.password),
            timeout: lookup("WORTSCHATZ_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}

mod secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_use_anonymous_account() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.login, "anonymous");
        assert_eq!(config.password, "anonymous");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn lookup_overrides_fields() {
        let vars: HashMap<&str, &str> = [
            ("WORTSCHATZ_URL", "http://localhost:3000/axis/services"),
            ("WORTSCHATZ_USER", "alice"),
            ("WORTSCHATZ_TIMEOUT_SECS", "5"),
        ]
        .into_iter()
        .collect();
        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.base_url, "http://localhost:3000/axis/services");
        assert_eq!(config.login, "alice");
        assert_eq!(config.password, "anonymous");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn unparsable_timeout_falls_back() {
        let config = ClientConfig::from_lookup(|k| {
            (k == "WORTSCHATZ_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn deserializes_partial_json() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"login":"bob","password":"secret","timeout":2}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.login, "bob");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }
}
