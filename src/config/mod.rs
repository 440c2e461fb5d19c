use crate::utils::error::Result;
use crate::utils::validation::{validate_timeout, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://analytics.example.com/api/log";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Where and how long the remote logger may talk to the analytics endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl LoggerConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl Validate for LoggerConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_timeout("timeout", self.timeout)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_analytics_endpoint() {
        let config = LoggerConfig::default();
        assert_eq!(config.endpoint, "https://analytics.example.com/api/log");
        assert_eq!(config.timeout, Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(LoggerConfig::new("not a url").validate().is_err());
        assert!(LoggerConfig::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
    }
}
