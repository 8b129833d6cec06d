//! Report Routes - Hand requests to the automation webhook
//!
//! Validation failures, upstream rejections and transport errors all come
//! back as 200 with `success: false`; they are results, not API errors.

use axum::{extract::State, routing::post, Json, Router};

use crate::models::{AmazonReportRequest, FlipkartScrapeRequest, SubmissionResponse};
use crate::AppState;

/// Request an Amazon keyword report
#[utoipa::path(
    post,
    path = "/api/amazon/report",
    request_body = AmazonReportRequest,
    responses(
        (status = 200, description = "Submission outcome", body = SubmissionResponse),
        (status = 422, description = "Malformed JSON body")
    ),
    tag = "Report"
)]
pub async fn amazon_report(
    State(state): State<AppState>,
    Json(payload): Json<AmazonReportRequest>,
) -> Json<SubmissionResponse> {
    let result = state.submission_service.submit(payload.into()).await;
    Json(SubmissionResponse::from_domain(result))
}

/// Request a Flipkart price scrape for a list of FSNs
#[utoipa::path(
    post,
    path = "/api/flipkart/scrape",
    request_body = FlipkartScrapeRequest,
    responses(
        (status = 200, description = "Submission outcome", body = SubmissionResponse),
        (status = 422, description = "Malformed JSON body")
    ),
    tag = "Report"
)]
pub async fn flipkart_scrape(
    State(state): State<AppState>,
    Json(payload): Json<FlipkartScrapeRequest>,
) -> Json<SubmissionResponse> {
    let result = state.submission_service.submit(payload.into()).await;
    Json(SubmissionResponse::from_domain(result))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/amazon/report", post(amazon_report))
        .route("/api/flipkart/scrape", post(flipkart_scrape))
}
