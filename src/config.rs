//! Service configuration.
//!
//! A [`ServiceConfig`] is built once (defaults, environment, or a YAML file)
//! and then shared read-only by the request builder and the client.

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://newton.vercel.app";
pub const DEFAULT_API_VERSION: &str = "/api/v2/";
pub const DEFAULT_SIMPLIFY_PATH: &str = "simplify";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Connection settings for the simplification service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    pub api_version: String,
    pub simplify_path: String,
    pub timeout_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            simplify_path: DEFAULT_SIMPLIFY_PATH.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            bearer_token: None,
            proxy_url: None,
        }
    }
}

impl ServiceConfig {
    /// Defaults overridden by `NEWTON_*` environment variables.
    ///
    /// - `NEWTON_BASE_URL`
    /// - `NEWTON_API_VERSION`
    /// - `NEWTON_SIMPLIFY_PATH`
    /// - `NEWTON_TIMEOUT_MS`
    /// - `NEWTON_API_TOKEN`
    /// - `NEWTON_PROXY_URL`
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("NEWTON_BASE_URL") {
            self.base_url = v;
        }
        if let Some(v) = get("NEWTON_API_VERSION") {
            self.api_version = v;
        }
        if let Some(v) = get("NEWTON_SIMPLIFY_PATH") {
            self.simplify_path = v;
        }
        if let Some(v) = get("NEWTON_TIMEOUT_MS") {
            self.timeout_ms = v.trim().parse::<u64>().map_err(|e| {
                Error::configuration_with_context(
                    format!("NEWTON_TIMEOUT_MS must be a whole number of milliseconds: {}", e),
                    ErrorContext::new()
                        .with_field_path("timeout_ms")
                        .with_details(v.clone())
                        .with_source("env"),
                )
            })?;
        }
        if let Some(v) = get("NEWTON_API_TOKEN") {
            self.bearer_token = Some(v);
        }
        if let Some(v) = get("NEWTON_PROXY_URL") {
            self.proxy_url = Some(v);
        }

        self.validate()?;
        Ok(self)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: ServiceConfig = serde_yaml::from_str(content).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid configuration YAML: {}", e),
                ErrorContext::new().with_source("config_loader"),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration_with_context(
                format!("Failed to read configuration file: {}", e),
                ErrorContext::new()
                    .with_details(path.display().to_string())
                    .with_source("config_loader"),
            )
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        let base = url::Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("base_url is not a valid URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(self.base_url.clone()),
            )
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                format!("base_url must use http or https, got '{}'", base.scheme()),
                ErrorContext::new().with_field_path("base_url"),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(Error::configuration_with_context(
                "timeout_ms must be greater than 0",
                ErrorContext::new().with_field_path("timeout_ms"),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.base_url, "https://newton.vercel.app");
        assert_eq!(config.api_version, "/api/v2/");
        assert_eq!(config.simplify_path, "simplify");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.bearer_token.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = ServiceConfig::default()
            .with_overrides(lookup(&[
                ("NEWTON_BASE_URL", "http://127.0.0.1:4010"),
                ("NEWTON_TIMEOUT_MS", "2500"),
                ("NEWTON_API_TOKEN", "abc"),
                ("NEWTON_PROXY_URL", ""),
            ]))
            .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:4010");
        assert_eq!(config.timeout_ms, 2500);
        assert_eq!(config.bearer_token.as_deref(), Some("abc"));
        assert!(config.proxy_url.is_none());
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
    }

    #[test]
    fn test_bad_timeout_override() {
        let err = ServiceConfig::default()
            .with_overrides(lookup(&[("NEWTON_TIMEOUT_MS", "soon")]))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("timeout_ms")
        );
    }

    #[test]
    fn test_yaml_partial_uses_defaults() {
        let config = ServiceConfig::from_yaml_str(
            "base_url: http://localhost:8080\ntimeout_ms: 500\n",
        )
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_ms, 500);
        assert_eq!(config.simplify_path, DEFAULT_SIMPLIFY_PATH);
    }

    #[test]
    fn test_yaml_rejects_invalid_values() {
        assert!(ServiceConfig::from_yaml_str("base_url: not a url\n").is_err());
        assert!(ServiceConfig::from_yaml_str("base_url: ftp://host\n").is_err());
        assert!(ServiceConfig::from_yaml_str("timeout_ms: 0\n").is_err());
        assert!(ServiceConfig::from_yaml_str("timeout_ms: [1, 2]\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = ServiceConfig::from_yaml_file("/nonexistent/newton.yaml").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
