use super::Store;
use crate::db;
use crate::repositories::{CreateExercise, ExerciseFilter, ExerciseRepository, UserRepository};
use anyhow::Result;
use async_trait::async_trait;
use exercise_tracker_shared::{Exercise, User};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_user(&self, username: &str) -> Result<User> {
        Ok(UserRepository::create(&self.pool, username).await?.into())
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>> {
        Ok(UserRepository::find_by_id(&self.pool, id)
            .await?
            .map(User::from))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let records = UserRepository::get_all(&self.pool).await?;
        Ok(records.into_iter().map(User::from).collect())
    }

    async fn delete_all_users(&self) -> Result<u64> {
        UserRepository::delete_all(&self.pool).await
    }

    async fn create_exercise(&self, input: CreateExercise) -> Result<Exercise> {
        Ok(ExerciseRepository::create(&self.pool, input).await?.into())
    }

    async fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>> {
        let records = ExerciseRepository::find(&self.pool, filter).await?;
        Ok(records.into_iter().map(Exercise::from).collect())
    }

    async fn delete_all_exercises(&self) -> Result<u64> {
        ExerciseRepository::delete_all(&self.pool).await
    }

    async fn sync_indexes(&self) -> Result<()> {
        db::sync_indexes(&self.pool).await
    }

    async fn health_check(&self) -> Result<()> {
        db::health_check(&self.pool).await
    }
}
