//! ReportTarget - Which marketplace workflow a submission triggers

use serde::{Deserialize, Serialize};

/// Marketplace workflow selected by the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReportTarget {
    /// Keyword research report
    #[default]
    Amazon,
    /// Price scrape for a comma-separated list of FSNs
    Flipkart,
}

impl ReportTarget {
    /// JSON field carrying the term in the webhook payload
    pub fn term_field(&self) -> &'static str {
        match self {
            ReportTarget::Amazon => "keyword",
            ReportTarget::Flipkart => "fsns",
        }
    }

    pub fn empty_term_message(&self) -> &'static str {
        match self {
            ReportTarget::Amazon => "Search keyword cannot be empty.",
            ReportTarget::Flipkart => "FSNs cannot be empty.",
        }
    }

    pub fn success_message(&self, term: &str, email: &str) -> String {
        match self {
            ReportTarget::Amazon => format!(
                "We've started generating the report for '{term}'. It will be sent to {email} shortly."
            ),
            ReportTarget::Flipkart => format!(
                "We have started scraping and we will notify you through email at {email}."
            ),
        }
    }

    /// Heading shown while a submission is in flight
    pub fn loading_title(&self) -> &'static str {
        match self {
            ReportTarget::Amazon => "Generating Report...",
            ReportTarget::Flipkart => "Scraping Prices...",
        }
    }

    pub fn loading_message(&self, term: &str, email: &str) -> String {
        match self {
            ReportTarget::Amazon => format!(
                "Looking for products related to \"{term}\" and preparing your report. Please wait."
            ),
            ReportTarget::Flipkart => format!(
                "Scraping Flipkart for the provided FSNs. We'll email the results to {email}."
            ),
        }
    }
}

impl std::fmt::Display for ReportTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportTarget::Amazon => write!(f, "amazon"),
            ReportTarget::Flipkart => write!(f, "flipkart"),
        }
    }
}

impl std::str::FromStr for ReportTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "amazon" => Ok(ReportTarget::Amazon),
            "flipkart" => Ok(ReportTarget::Flipkart),
            _ => Err(format!("Unknown report target: {}", s)),
        }
    }
}

/// Split a raw FSN list into its tokens.
///
/// FSNs are opaque; this is only used for diagnostics; the raw string
/// is what gets forwarded.
pub fn fsn_tokens(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}
