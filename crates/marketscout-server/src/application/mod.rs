//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! configuration and external services.

mod submission_service;

pub use submission_service::SubmissionService;
