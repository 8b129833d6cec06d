//! MarketScout API Client

use anyhow::{bail, Context, Result};
use marketscout::ReportTarget;
use reqwest::Client;
use serde::Deserialize;

/// API Client for MarketScout
pub struct MarketScoutClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionResponse {
    pub status: String,
    pub success: bool,
    pub message: String,
    pub searched_term: String,
    pub email_sent_to: Option<String>,
}

impl MarketScoutClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Submit a report request for `target`
    pub async fn submit(
        &self,
        target: ReportTarget,
        term: &str,
        email: &str,
    ) -> Result<SubmissionResponse> {
        let url = submit_url(&self.base_url, target);
        let body = request_body(target, term, email);

        tracing::debug!(%url, "Submitting report request");

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Could not reach MarketScout API at {}", self.base_url))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, text);
        }

        resp.json()
            .await
            .context("Failed to parse submission response")
    }
}

fn submit_url(base_url: &str, target: ReportTarget) -> String {
    match target {
        ReportTarget::Amazon => format!("{}/api/amazon/report", base_url),
        ReportTarget::Flipkart => format!("{}/api/flipkart/scrape", base_url),
    }
}

fn request_body(target: ReportTarget, term: &str, email: &str) -> serde_json::Value {
    let mut body = serde_json::Map::new();
    body.insert(target.term_field().to_string(), term.into());
    body.insert("email".to_string(), email.into());
    serde_json::Value::Object(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_url() {
        assert_eq!(
            submit_url("http://localhost:8000", ReportTarget::Amazon),
            "http://localhost:8000/api/amazon/report"
        );
        assert_eq!(
            submit_url("http://localhost:8000", ReportTarget::Flipkart),
            "http://localhost:8000/api/flipkart/scrape"
        );
    }

    #[test]
    fn test_request_body_field_names() {
        assert_eq!(
            request_body(ReportTarget::Amazon, "lamp", "a@b.co"),
            serde_json::json!({"keyword": "lamp", "email": "a@b.co"})
        );
        assert_eq!(
            request_body(ReportTarget::Flipkart, "MOBABC", "a@b.co"),
            serde_json::json!({"fsns": "MOBABC", "email": "a@b.co"})
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = MarketScoutClient::new("http://localhost:8000/");
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
