//! Exercise Tracker Shared Library
//!
//! This crate contains the domain models, API request/response types and
//! input parsing helpers shared by the backend and its tests.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::{Exercise, User};
pub use types::*;
