//! Domain Services
//!
//! Stateless operations that span entities and ports.

mod submission;

pub use submission::*;
