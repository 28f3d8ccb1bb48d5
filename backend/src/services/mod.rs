//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the HTTP handlers and the store.

pub mod exercise;
pub mod user;

pub use exercise::ExerciseService;
pub use user::UserService;
