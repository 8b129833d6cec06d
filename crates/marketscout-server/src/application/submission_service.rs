//! Submission Application Service (Use Case)
//!
//! Routes a SearchRequest to the endpoint configured for its target
//! and runs it through the domain submission handler.

use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use marketscout::{submit, ActionResult, ReportWebhook, SearchRequest};

use crate::config::WebhookEndpoints;

/// Application service for report submissions
pub struct SubmissionService {
    webhook: Arc<dyn ReportWebhook>,
    endpoints: WebhookEndpoints,
}

impl SubmissionService {
    pub fn new(webhook: Arc<dyn ReportWebhook>, endpoints: WebhookEndpoints) -> Self {
        Self { webhook, endpoints }
    }

    /// Submit one request. Always yields a result; failures are in the result.
    pub async fn submit(&self, request: SearchRequest) -> ActionResult {
        let submission_id = Uuid::new_v4();
        let endpoint = self.endpoints.for_target(request.target);
        let span = tracing::info_span!("submission", %submission_id, report = %request.target);

        async {
            let result = submit(self.webhook.as_ref(), endpoint, &request).await;

            if result.success() {
                tracing::info!("📨 Report request accepted: {}", result.echoed_term());
            } else {
                tracing::warn!("Report request failed: {}", result.message());
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use marketscout::{DomainError, WebhookReply};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingWebhook {
        urls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ReportWebhook for RecordingWebhook {
        async fn post_json(
            &self,
            url: &str,
            _body: &serde_json::Value,
        ) -> Result<WebhookReply, DomainError> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(WebhookReply::new(200, "ok"))
        }
    }

    #[tokio::test]
    async fn test_routes_by_target() {
        let webhook = Arc::new(RecordingWebhook::default());
        let service = SubmissionService::new(
            webhook.clone(),
            WebhookEndpoints {
                amazon: "https://hooks.example.test/amazon".to_string(),
                flipkart: "https://hooks.example.test/flipkart".to_string(),
            },
        );

        let amazon = service
            .submit(SearchRequest::amazon("headphones", "user@example.com"))
            .await;
        let flipkart = service
            .submit(SearchRequest::flipkart("MOBABC", "user@example.com"))
            .await;

        assert!(amazon.success());
        assert!(flipkart.success());
        assert_eq!(
            *webhook.urls.lock().unwrap(),
            vec![
                "https://hooks.example.test/amazon".to_string(),
                "https://hooks.example.test/flipkart".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_validation_skips_webhook() {
        let webhook = Arc::new(RecordingWebhook::default());
        let service = SubmissionService::new(webhook.clone(), WebhookEndpoints::default());

        let result = service.submit(SearchRequest::amazon("", "")).await;

        assert!(!result.success());
        assert!(webhook.urls.lock().unwrap().is_empty());
    }
}
