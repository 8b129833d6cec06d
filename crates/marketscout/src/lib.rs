//! MarketScout Domain Library
//!
//! Core domain types and interfaces for requesting marketplace reports
//! from an external automation webhook.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: SearchRequest, ActionResult
//!   - `value_objects/`: ReportTarget, SubmissionStatus, email rules
//!   - `services/`: Request submission handler
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `webhook`: Outbound JSON delivery to the automation service
//!
//! # Usage
//!
//! ```rust,ignore
//! use marketscout::{submit, SearchRequest};
//!
//! let request = SearchRequest::amazon("wireless headphones", "user@example.com");
//! let result = submit(&webhook, endpoint, &request).await;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    fsn_tokens, is_valid_email, submit, ActionResult, DomainError, ReportTarget, SearchRequest,
    SubmissionStatus,
};
pub use ports::{ReportWebhook, WebhookDeliveryConfig, WebhookReply};
