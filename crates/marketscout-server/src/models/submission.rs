//! Submission DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use marketscout::{ActionResult, SearchRequest, SubmissionStatus};

/// Request an Amazon keyword report.
///
/// Missing fields default to empty so the validation messages apply.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AmazonReportRequest {
    /// Search keyword, e.g. "wireless headphones"
    #[serde(default)]
    pub keyword: String,
    /// Where the report is emailed
    #[serde(default)]
    pub email: String,
}

impl From<AmazonReportRequest> for SearchRequest {
    fn from(req: AmazonReportRequest) -> Self {
        SearchRequest::amazon(req.keyword, req.email)
    }
}

/// Request a Flipkart price scrape
#[derive(Debug, Deserialize, ToSchema)]
pub struct FlipkartScrapeRequest {
    /// Comma-separated FSNs
    #[serde(default)]
    pub fsns: String,
    #[serde(default)]
    pub email: String,
}

impl From<FlipkartScrapeRequest> for SearchRequest {
    fn from(req: FlipkartScrapeRequest) -> Self {
        SearchRequest::flipkart(req.fsns, req.email)
    }
}

/// Outcome of a submission
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmissionResponse {
    /// "success" or "error"
    pub status: String,
    pub success: bool,
    pub message: String,
    pub searched_term: String,
    pub email_sent_to: Option<String>,
}

impl SubmissionResponse {
    pub fn from_domain(result: ActionResult) -> Self {
        Self {
            status: SubmissionStatus::from(&result).to_string(),
            success: result.success(),
            message: result.message().to_string(),
            searched_term: result.echoed_term().to_string(),
            email_sent_to: result.echoed_email().map(str::to_string),
        }
    }
}
