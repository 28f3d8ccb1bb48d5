//! Persistence store
//!
//! Handlers reach users and exercises only through the [`Store`] trait. A
//! handle is opened once at startup and shared through `AppState`.
//! [`PgStore`] is the durable implementation; [`MemoryStore`] keeps
//! everything in process and backs the integration tests.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::repositories::{CreateExercise, ExerciseFilter};
use anyhow::Result;
use async_trait::async_trait;
use exercise_tracker_shared::{Exercise, User};
use uuid::Uuid;

/// Document store holding the users and exercises collections
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a user with a freshly assigned id
    async fn create_user(&self, username: &str) -> Result<User>;

    /// Look a user up by id
    async fn find_user(&self, id: Uuid) -> Result<Option<User>>;

    /// All users, in insertion order
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Remove every user; returns the number removed
    async fn delete_all_users(&self) -> Result<u64>;

    /// Insert an exercise with a freshly assigned id
    async fn create_exercise(&self, input: CreateExercise) -> Result<Exercise>;

    /// Exercises matching `filter`, in insertion order, truncated to its limit
    async fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>>;

    /// Remove every exercise; returns the number removed
    async fn delete_all_exercises(&self) -> Result<u64>;

    /// Make sure the lookup indexes exist
    async fn sync_indexes(&self) -> Result<()>;

    /// Cheap round trip to confirm the store is reachable
    async fn health_check(&self) -> Result<()>;
}
