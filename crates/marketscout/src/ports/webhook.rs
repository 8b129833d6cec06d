//! Report Webhook Port
//!
//! Abstract interface for handing a report request to the external
//! automation service. The service does the scraping and emails the
//! result on its own schedule; all we ever see is its acknowledgment.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::errors::DomainError;

/// Raw acknowledgment from the webhook endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookReply {
    pub status: u16,
    /// Response body as text, used for diagnostics only
    pub body: String,
}

impl WebhookReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx means the webhook accepted the request
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Webhook delivery interface
///
/// One capability: POST a JSON body, get back status and body text.
/// Implementations must not retry.
///
/// # Example
///
/// ```rust,ignore
/// use marketscout::ports::ReportWebhook;
///
/// struct HttpReportWebhook { /* reqwest client */ }
///
/// #[async_trait]
/// impl ReportWebhook for HttpReportWebhook {
///     async fn post_json(&self, url: &str, body: &serde_json::Value)
///         -> Result<WebhookReply, DomainError>
///     {
///         // Send HTTP POST with Content-Type: application/json
///     }
/// }
/// ```
#[async_trait]
pub trait ReportWebhook: Send + Sync {
    /// POST `body` as JSON to `url`
    ///
    /// # Returns
    /// `Ok` with the reply for any HTTP status, or
    /// `Err(DomainError::Transport)` when no response arrived at all.
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<WebhookReply, DomainError>;
}

/// Configuration for webhook delivery behavior
#[derive(Debug, Clone)]
pub struct WebhookDeliveryConfig {
    /// Request timeout; `None` waits for as long as the endpoint takes
    pub timeout: Option<Duration>,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for WebhookDeliveryConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: "MarketScout-Webhook/1.0".to_string(),
        }
    }
}
