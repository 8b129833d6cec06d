//! Value Objects
//!
//! Immutable value types without identity.

mod email;
mod report_target;
mod submission_status;

pub use email::*;
pub use report_target::*;
pub use submission_status::*;
