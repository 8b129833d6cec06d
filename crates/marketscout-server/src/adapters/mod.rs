//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod webhook;

// Re-exports
pub use webhook::HttpReportWebhook;
