//! Database repositories
//!
//! Provides the PostgreSQL data access layer used by `PgStore`.

pub mod exercise;
pub mod user;

pub use exercise::{CreateExercise, ExerciseFilter, ExerciseRecord, ExerciseRepository};
pub use user::{UserRecord, UserRepository};
