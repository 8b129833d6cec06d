//! HTTP Webhook Implementation
//!
//! Delivers report requests to the automation service using reqwest.

use async_trait::async_trait;
use reqwest::Client;

use marketscout::{DomainError, ReportWebhook, WebhookDeliveryConfig, WebhookReply};

/// HTTP implementation of ReportWebhook
pub struct HttpReportWebhook {
    client: Client,
}

impl HttpReportWebhook {
    pub fn new() -> Result<Self, DomainError> {
        Self::with_config(WebhookDeliveryConfig::default())
    }

    pub fn with_config(config: WebhookDeliveryConfig) -> Result<Self, DomainError> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            DomainError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ReportWebhook for HttpReportWebhook {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<WebhookReply, DomainError> {
        let body = serde_json::to_vec(body).map_err(|e| {
            DomainError::Serialization(format!("Failed to serialize payload: {e}"))
        })?;

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(DomainError::transport)?;

        let status = response.status().as_u16();
        // Body is diagnostics only; an unreadable one is not a failure
        let response_body = response.text().await.unwrap_or_default();

        tracing::debug!(status, url, "Webhook replied");

        Ok(WebhookReply::new(status, response_body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>>;

    /// Start a local endpoint that records requests and answers with `status`
    async fn spawn_endpoint(status: StatusCode, reply: &'static str) -> (String, Captured) {
        let captured: Captured = Arc::new(Mutex::new(Vec::new()));
        let sink = captured.clone();

        let app = Router::new().route(
            "/hook",
            post(move |headers: HeaderMap, Json(body): Json<serde_json::Value>| {
                let sink = sink.clone();
                async move {
                    let content_type = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    sink.lock().unwrap().push((content_type, body));
                    (status, reply)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}/hook"), captured)
    }

    #[tokio::test]
    async fn test_posts_json_and_reports_success() {
        let (url, captured) = spawn_endpoint(StatusCode::OK, "queued").await;
        let webhook = HttpReportWebhook::new().unwrap();
        let body = serde_json::json!({"keyword": "wireless headphones", "email": "user@example.com"});

        let reply = webhook.post_json(&url, &body).await.unwrap();

        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, "queued");
        assert!(reply.is_success());

        let captured = captured.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].0.as_deref(), Some("application/json"));
        assert_eq!(captured[0].1, body);
    }

    #[tokio::test]
    async fn test_non_success_status_is_a_reply() {
        let (url, _) = spawn_endpoint(StatusCode::INTERNAL_SERVER_ERROR, "workflow crashed").await;
        let webhook = HttpReportWebhook::new().unwrap();

        let reply = webhook
            .post_json(&url, &serde_json::json!({"fsns": "MOBABC", "email": "a@b.co"}))
            .await
            .unwrap();

        assert_eq!(reply.status, 500);
        assert_eq!(reply.body, "workflow crashed");
        assert!(!reply.is_success());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let webhook = HttpReportWebhook::new().unwrap();
        let result = webhook
            .post_json(&format!("http://{addr}/hook"), &serde_json::json!({}))
            .await;

        assert!(matches!(result, Err(DomainError::Transport(_))));
    }
}
