use std::env;

use crate::error::{DatadogError, Result};

const DEFAULT_SITE: &str = "datadoghq.com";

/// Datadog credentials and endpoint, read once when the function starts.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub app_key: String,
    pub api_url: String,
}

impl Config {
    pub fn new(api_key: String, app_key: String, site: Option<String>) -> Self {
        let site = site.unwrap_or_else(|| DEFAULT_SITE.to_string());

        Self {
            api_key,
            app_key,
            api_url: format!("https://api.{}", site),
        }
    }

    /// Build the configuration from the process environment.
    ///
    /// `DD_API_KEY` / `DD_APP_KEY` are required; the older `API_KEY` / `APP_KEY`
    /// names are accepted when the prefixed ones are absent or empty. `DD_SITE` selects
    /// the regional API host.
    pub fn from_env() -> Result<Self> {
        let api_key = required_var("DD_API_KEY", "API_KEY")?;
        let app_key = required_var("DD_APP_KEY", "APP_KEY")?;
        let site = env::var("DD_SITE").ok().filter(|s| !s.trim().is_empty());

        Ok(Self::new(api_key, app_key, site))
    }
}

fn required_var(name: &str, fallback: &str) -> Result<String> {
    non_empty_var(name)
        .or_else(|| non_empty_var(fallback))
        .ok_or_else(|| DatadogError::ConfigError(format!("{} must be set", name)))
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serial_test::serial;

    const VARS: [&str; 5] = ["DD_API_KEY", "DD_APP_KEY", "API_KEY", "APP_KEY", "DD_SITE"];

    fn clear_env() {
        for var in VARS {
            // SAFETY: env tests are serialized with #[serial]
            unsafe { env::remove_var(var) };
        }
    }

    fn set_env(name: &str, value: &str) {
        // SAFETY: env tests are serialized with #[serial]
        unsafe { env::set_var(name, value) };
    }

    #[test]
    fn test_new_with_default_site() {
        let config = Config::new("key".to_string(), "app".to_string(), None);
        assert_eq!(config.api_url, "https://api.datadoghq.com");
    }

    #[test]
    fn test_regional_urls() {
        let regions = vec![
            ("datadoghq.eu", "https://api.datadoghq.eu"),
            ("us3.datadoghq.com", "https://api.us3.datadoghq.com"),
            ("us5.datadoghq.com", "https://api.us5.datadoghq.com"),
        ];

        for (region, expected_url) in regions {
            let config = Config::new("key".to_string(), "app".to_string(), Some(region.to_string()));
            assert_eq!(config.api_url, expected_url);
        }
    }

    #[test]
    #[serial]
    fn test_from_env() {
        clear_env();
        set_env("DD_API_KEY", "test_api_key");
        set_env("DD_APP_KEY", "test_app_key");
        set_env("DD_SITE", "datadoghq.eu");

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key, "test_api_key");
        assert_eq!(config.app_key, "test_app_key");
        assert_eq!(config.api_url, "https://api.datadoghq.eu");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_legacy_names() {
        clear_env();
        set_env("API_KEY", "legacy_api");
        set_env("APP_KEY", "legacy_app");

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key, "legacy_api");
        assert_eq!(config.app_key, "legacy_app");
        assert_eq!(config.api_url, "https://api.datadoghq.com");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_empty_key_falls_back_to_legacy_name() {
        clear_env();
        set_env("DD_API_KEY", "");
        set_env("API_KEY", "legacy_api");
        set_env("DD_APP_KEY", "test_app_key");

        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key, "legacy_api");
        assert_eq!(config.app_key, "test_app_key");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_app_key() {
        clear_env();
        set_env("DD_API_KEY", "test_api_key");

        let result = Config::from_env();
        assert_matches!(result, Err(DatadogError::ConfigError(msg)) if msg.contains("DD_APP_KEY"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_empty_key_rejected() {
        clear_env();
        set_env("DD_API_KEY", "  ");
        set_env("DD_APP_KEY", "test_app_key");

        let result = Config::from_env();
        assert_matches!(result, Err(DatadogError::ConfigError(msg)) if msg.contains("DD_API_KEY"));

        clear_env();
    }
}
