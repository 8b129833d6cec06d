//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{AmazonReportRequest, FlipkartScrapeRequest, SubmissionResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::report::amazon_report,
        super::report::flipkart_scrape,
    ),
    info(
        title = "MarketScout API",
        version = "0.1.0",
        description = "Request Amazon keyword reports and Flipkart price scrapes.\n\nReports are produced by an external automation service and delivered by email.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Report", description = "Report - Forward requests to the automation webhook"),
    ),
    components(
        schemas(
            AmazonReportRequest,
            FlipkartScrapeRequest,
            SubmissionResponse,
        )
    )
)]
pub struct ApiDoc;
