//! MarketScout API Models
//!
//! - Submission: report request bodies and the shared response shape

mod submission;

pub use submission::*;
