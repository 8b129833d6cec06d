//! SearchRequest - A single report submission
//!
//! Created fresh for every submission and dropped once its
//! ActionResult has been produced.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{is_valid_email, ReportTarget};

/// Raw user input for one submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    pub target: ReportTarget,
    /// Keyword (Amazon) or comma-separated FSN list (Flipkart), as entered
    pub term: String,
    /// Email address, as entered
    pub email: String,
}

impl SearchRequest {
    pub fn new(target: ReportTarget, term: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            target,
            term: term.into(),
            email: email.into(),
        }
    }

    pub fn amazon(keyword: impl Into<String>, email: impl Into<String>) -> Self {
        Self::new(ReportTarget::Amazon, keyword, email)
    }

    pub fn flipkart(fsns: impl Into<String>, email: impl Into<String>) -> Self {
        Self::new(ReportTarget::Flipkart, fsns, email)
    }

    /// Validate inputs in order, stopping at the first failure:
    /// term present, email present, email well-formed.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.term.trim().is_empty() {
            return Err(DomainError::EmptyTerm(self.target));
        }
        if self.email.trim().is_empty() {
            return Err(DomainError::EmptyEmail);
        }
        if !is_valid_email(&self.email) {
            return Err(DomainError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    /// JSON body for the automation webhook
    pub fn payload(&self) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        body.insert(
            self.target.term_field().to_string(),
            serde_json::Value::String(self.term.clone()),
        );
        body.insert(
            "email".to_string(),
            serde_json::Value::String(self.email.clone()),
        );
        serde_json::Value::Object(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_checked_first() {
        let request = SearchRequest::amazon("   ", "");
        assert!(matches!(
            request.validate(),
            Err(DomainError::EmptyTerm(ReportTarget::Amazon))
        ));

        let request = SearchRequest::flipkart("", "not-an-email");
        assert!(matches!(
            request.validate(),
            Err(DomainError::EmptyTerm(ReportTarget::Flipkart))
        ));
    }

    #[test]
    fn test_empty_email() {
        let request = SearchRequest::amazon("headphones", " \t ");
        assert!(matches!(request.validate(), Err(DomainError::EmptyEmail)));
    }

    #[test]
    fn test_invalid_email_keeps_input() {
        let request = SearchRequest::amazon("headphones", "user@example");
        match request.validate() {
            Err(DomainError::InvalidEmail(email)) => assert_eq!(email, "user@example"),
            other => panic!("Expected InvalidEmail, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_request() {
        let request = SearchRequest::amazon("headphones", "user@example.com");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_payload_shape() {
        let amazon = SearchRequest::amazon("wireless headphones", "user@example.com");
        assert_eq!(
            amazon.payload(),
            serde_json::json!({"keyword": "wireless headphones", "email": "user@example.com"})
        );

        let flipkart = SearchRequest::flipkart("MOBABC,MOBDEF", "user@example.com");
        assert_eq!(
            flipkart.payload(),
            serde_json::json!({"fsns": "MOBABC,MOBDEF", "email": "user@example.com"})
        );
    }
}
