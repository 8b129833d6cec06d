//! ActionResult - Outcome of one submission

use serde::{Deserialize, Serialize};

/// Uniform success/failure record handed to the presentation layer.
///
/// Built once per submission and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionResult {
    success: bool,
    message: String,
    echoed_term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    echoed_email: Option<String>,
}

impl ActionResult {
    pub fn succeeded(message: String, term: &str, email: &str) -> Self {
        Self {
            success: true,
            message,
            echoed_term: term.to_string(),
            echoed_email: Some(email.to_string()),
        }
    }

    pub fn failed(message: String, term: &str, email: Option<&str>) -> Self {
        Self {
            success: false,
            message,
            echoed_term: term.to_string(),
            echoed_email: email.map(str::to_string),
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn echoed_term(&self) -> &str {
        &self.echoed_term
    }

    pub fn echoed_email(&self) -> Option<&str> {
        self.echoed_email.as_deref()
    }
}
