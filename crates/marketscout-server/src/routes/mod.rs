//! MarketScout API Routes
//!
//! - /api/amazon/report - Amazon keyword report
//! - /api/flipkart/scrape - Flipkart FSN price scrape

pub mod report;
pub mod swagger;
