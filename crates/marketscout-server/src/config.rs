//! Server configuration
//!
//! Read from Shuttle secrets:
//! - `AMAZON_WEBHOOK_URL` / `FLIPKART_WEBHOOK_URL`: automation endpoints
//! - `WEBHOOK_TIMEOUT_SECS`: optional request timeout (unset = wait forever)

use std::time::Duration;

use marketscout::{DomainError, ReportTarget, WebhookDeliveryConfig};
use reqwest::Url;

/// Automation webhook both workflows post to unless overridden
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://scrappy.app.n8n.cloud/webhook-test/7b1cfaf5-0f01-4b7e-95dd-8c38fd4fac1c";

/// Endpoint per report target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEndpoints {
    pub amazon: String,
    pub flipkart: String,
}

impl WebhookEndpoints {
    pub fn for_target(&self, target: ReportTarget) -> &str {
        match target {
            ReportTarget::Amazon => &self.amazon,
            ReportTarget::Flipkart => &self.flipkart,
        }
    }
}

impl Default for WebhookEndpoints {
    fn default() -> Self {
        Self {
            amazon: DEFAULT_WEBHOOK_URL.to_string(),
            flipkart: DEFAULT_WEBHOOK_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    pub endpoints: WebhookEndpoints,
    pub delivery: WebhookDeliveryConfig,
}

impl ServerConfig {
    /// Build config from a key lookup (Shuttle `SecretStore::get` in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = |key: &str| -> Result<String, DomainError> {
            match lookup(key) {
                Some(url) => {
                    Url::parse(&url).map_err(|e| {
                        DomainError::Configuration(format!("{key} is not a valid URL: {e}"))
                    })?;
                    Ok(url)
                }
                None => Ok(DEFAULT_WEBHOOK_URL.to_string()),
            }
        };

        let endpoints = WebhookEndpoints {
            amazon: endpoint("AMAZON_WEBHOOK_URL")?,
            flipkart: endpoint("FLIPKART_WEBHOOK_URL")?,
        };

        let timeout = match lookup("WEBHOOK_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => None,
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(e) => {
                    tracing::warn!("⚠️  Ignoring WEBHOOK_TIMEOUT_SECS={:?}: {}", raw, e);
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            endpoints,
            delivery: WebhookDeliveryConfig {
                timeout,
                ..Default::default()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.endpoints, WebhookEndpoints::default());
        assert_eq!(config.delivery.timeout, None);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("AMAZON_WEBHOOK_URL", "https://hooks.example.test/amazon"),
            ("FLIPKART_WEBHOOK_URL", "https://hooks.example.test/flipkart"),
            ("WEBHOOK_TIMEOUT_SECS", "45"),
        ]))
        .unwrap();

        assert_eq!(
            config.endpoints.for_target(ReportTarget::Amazon),
            "https://hooks.example.test/amazon"
        );
        assert_eq!(
            config.endpoints.for_target(ReportTarget::Flipkart),
            "https://hooks.example.test/flipkart"
        );
        assert_eq!(config.delivery.timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn test_bad_timeout_is_ignored() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("WEBHOOK_TIMEOUT_SECS", "soon")])).unwrap();
        assert_eq!(config.delivery.timeout, None);
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = ServerConfig::from_lookup(lookup_from(&[("AMAZON_WEBHOOK_URL", "not a url")]));
        assert!(matches!(result, Err(DomainError::Configuration(_))));
    }
}
