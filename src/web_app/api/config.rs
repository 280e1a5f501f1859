// web_app/api/config.rs - Record service configuration
//
// Read once at startup from the environment (after dotenv has loaded .env).

use std::env;

/// Environment variable naming the record service base URL
pub const RECORD_SERVICE_URL_VAR: &str = "RECORD_SERVICE_URL";

/// Where the record service listens when nothing is configured
pub const DEFAULT_RECORD_SERVICE_URL: &str = "http://localhost:8602";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL, without the `/record` path
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_RECORD_SERVICE_URL.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Build the configuration from `RECORD_SERVICE_URL`, falling back to
    /// the default when it is unset or blank.
    pub fn from_env() -> Self {
        Self::from_value(env::var(RECORD_SERVICE_URL_VAR).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self {
                base_url: url.trim().trim_end_matches('/').to_string(),
            },
            _ => Self::default(),
        }
    }

    /// Full URL of the record endpoint
    pub fn record_url(&self) -> String {
        format!("{}/record", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_service() {
        let config = ServiceConfig::default();
        assert_eq!(config.record_url(), "http://localhost:8602/record");
    }

    #[test]
    fn test_from_value_trims_trailing_slash() {
        let config = ServiceConfig::from_value(Some("http://parser.lan:9000/".to_string()));
        assert_eq!(config.base_url, "http://parser.lan:9000");
        assert_eq!(config.record_url(), "http://parser.lan:9000/record");
    }

    #[test]
    fn test_blank_value_uses_default() {
        assert_eq!(ServiceConfig::from_value(Some("  ".to_string())), ServiceConfig::default());
        assert_eq!(ServiceConfig::from_value(None), ServiceConfig::default());
    }
}
