use super::Store;
use crate::repositories::{CreateExercise, ExerciseFilter};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use exercise_tracker_shared::{Exercise, User};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Collections {
    users: Vec<User>,
    exercises: Vec<Exercise>,
}

/// In-process store; contents are lost on restart
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, username: &str) -> Result<User> {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            created_at: Utc::now(),
        };
        self.inner.write().await.users.push(user.clone());
        Ok(user)
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn delete_all_users(&self) -> Result<u64> {
        let removed = std::mem::take(&mut self.inner.write().await.users);
        Ok(removed.len() as u64)
    }

    async fn create_exercise(&self, input: CreateExercise) -> Result<Exercise> {
        let exercise = Exercise {
            id: Uuid::new_v4(),
            user_id: input.user_id,
            username: input.username,
            description: input.description,
            duration: input.duration,
            date: input.date,
            created_at: Utc::now(),
        };
        self.inner.write().await.exercises.push(exercise.clone());
        Ok(exercise)
    }

    async fn find_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>> {
        let inner = self.inner.read().await;
        let matching = inner.exercises.iter().filter(|e| filter.matches(e)).cloned();

        Ok(match filter.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        })
    }

    async fn delete_all_exercises(&self) -> Result<u64> {
        let removed = std::mem::take(&mut self.inner.write().await.exercises);
        Ok(removed.len() as u64)
    }

    async fn sync_indexes(&self) -> Result<()> {
        debug!("Memory store has no indexes to sync");
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
