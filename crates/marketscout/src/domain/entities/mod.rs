//! Domain Entities
//!
//! - SearchRequest: one submission from the user
//! - ActionResult: the outcome returned for that submission

mod action_result;
mod search_request;

pub use action_result::*;
pub use search_request::*;
