//! Process configuration.
//!
//! Read once at startup (see `main.rs`) and passed into [`crate::app::build_app`].
//! Nothing below the binary looks at the environment.

use std::net::SocketAddr;
use std::time::Duration;

use rust_decimal::Decimal;
use thiserror::Error;

use profitlens_agents::DEFAULT_CURRENCY;
use profitlens_margin::DEFAULT_ALERT_THRESHOLD;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_AGENT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Margin-analysis agent endpoint (`AGENT1_SERVICE_URL`).
    pub analysis_agent_url: Option<String>,
    /// Recommendation/forecast agent endpoint (`AGENT2_SERVICE_URL`).
    pub recommendation_agent_url: Option<String>,
    pub agent_timeout: Duration,
    pub currency: String,
    pub alert_threshold: Decimal,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            analysis_agent_url: None,
            recommendation_agent_url: None,
            agent_timeout: DEFAULT_AGENT_TIMEOUT,
            currency: DEFAULT_CURRENCY.to_string(),
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
        }
    }
}

impl ApiConfig {
    /// Build from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Invalid values fall back to their
    /// default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = non_empty("PROFITLENS_BIND")
            .map(|raw| parse_or_default("PROFITLENS_BIND", &raw, defaults.bind_addr, parse_bind))
            .unwrap_or(defaults.bind_addr);

        let agent_timeout = non_empty("AGENT_TIMEOUT_SECS")
            .map(|raw| parse_or_default("AGENT_TIMEOUT_SECS", &raw, defaults.agent_timeout, parse_timeout))
            .unwrap_or(defaults.agent_timeout);

        let alert_threshold = non_empty("MARGIN_ALERT_THRESHOLD")
            .map(|raw| {
                parse_or_default("MARGIN_ALERT_THRESHOLD", &raw, defaults.alert_threshold, parse_threshold)
            })
            .unwrap_or(defaults.alert_threshold);

        let analysis_agent_url = non_empty("AGENT1_SERVICE_URL");
        if analysis_agent_url.is_none() {
            tracing::warn!("AGENT1_SERVICE_URL not set; /margin/report will be unavailable");
        }
        let recommendation_agent_url = non_empty("AGENT2_SERVICE_URL");
        if recommendation_agent_url.is_none() {
            tracing::warn!("AGENT2_SERVICE_URL not set; /margin/report will be unavailable");
        }

        Self {
            bind_addr,
            analysis_agent_url,
            recommendation_agent_url,
            agent_timeout,
            currency: non_empty("PROFITLENS_CURRENCY").unwrap_or(defaults.currency),
            alert_threshold,
        }
    }
}

fn parse_or_default<T>(
    var: &'static str,
    raw: &str,
    default: T,
    parse: impl Fn(&'static str, &str) -> Result<T, ConfigError>,
) -> T {
    match parse(var, raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "invalid configuration value; using default");
            default
        }
    }
}

fn parse_bind(var: &'static str, raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })
}

fn parse_timeout(var: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(0) => Err(ConfigError::Invalid {
            var,
            reason: "timeout must be at least 1 second".to_string(),
        }),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
    }
}

fn parse_threshold(var: &'static str, raw: &str) -> Result<Decimal, ConfigError> {
    raw.parse::<Decimal>().map_err(|e| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ApiConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg, ApiConfig::default());
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND);
        assert_eq!(cfg.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config(&[
            ("PROFITLENS_BIND", "127.0.0.1:9000"),
            ("AGENT1_SERVICE_URL", "http://agents:8000/analysis"),
            ("AGENT2_SERVICE_URL", "http://agents:8000/recommend"),
            ("AGENT_TIMEOUT_SECS", "30"),
            ("PROFITLENS_CURRENCY", "EUR"),
            ("MARGIN_ALERT_THRESHOLD", "12.5"),
        ]);
        assert_eq!(cfg.bind_addr.port(), 9000);
        assert_eq!(cfg.analysis_agent_url.as_deref(), Some("http://agents:8000/analysis"));
        assert_eq!(cfg.recommendation_agent_url.as_deref(), Some("http://agents:8000/recommend"));
        assert_eq!(cfg.agent_timeout, Duration::from_secs(30));
        assert_eq!(cfg.currency, "EUR");
        assert_eq!(cfg.alert_threshold, Decimal::new(125, 1));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let cfg = config(&[
            ("PROFITLENS_BIND", "not-an-address"),
            ("AGENT_TIMEOUT_SECS", "0"),
            ("MARGIN_ALERT_THRESHOLD", "fifteen"),
            ("AGENT1_SERVICE_URL", "   "),
        ]);
        assert_eq!(cfg, ApiConfig::default());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = parse_timeout("AGENT_TIMEOUT_SECS", "0").unwrap_err();
        assert!(err.to_string().starts_with("AGENT_TIMEOUT_SECS:"));
    }
}
