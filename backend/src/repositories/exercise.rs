//! Exercise repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use exercise_tracker_shared::Exercise;
use sqlx::PgPool;
use uuid::Uuid;

/// Exercise record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExerciseRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub description: String,
    pub duration: i32,
    pub date: String,
    pub created_at: DateTime<Utc>,
}

impl From<ExerciseRecord> for Exercise {
    fn from(record: ExerciseRecord) -> Self {
        Exercise {
            id: record.id,
            user_id: record.user_id,
            username: record.username,
            description: record.description,
            duration: record.duration,
            date: record.date,
            created_at: record.created_at,
        }
    }
}

/// Input for creating an exercise
#[derive(Debug, Clone)]
pub struct CreateExercise {
    pub user_id: Uuid,
    /// Copied from the owning user
    pub username: String,
    pub description: String,
    pub duration: i32,
    /// ISO `YYYY-MM-DD`
    pub date: String,
}

/// Selection of a user's exercises for a log query
///
/// `from` and `to` are inclusive bounds compared to the stored date text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub user_id: Uuid,
    pub from: String,
    pub to: String,
    /// `None` means no limit
    pub limit: Option<usize>,
}

impl ExerciseFilter {
    /// Whether an exercise belongs in the result, ignoring the limit
    pub fn matches(&self, exercise: &Exercise) -> bool {
        exercise.user_id == self.user_id
            && exercise.date.as_str() >= self.from.as_str()
            && exercise.date.as_str() <= self.to.as_str()
    }
}

/// Exercise repository
pub struct ExerciseRepository;

impl ExerciseRepository {
    /// Create a new exercise
    pub async fn create(pool: &PgPool, input: CreateExercise) -> Result<ExerciseRecord> {
        let record = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            INSERT INTO exercises (id, user_id, username, description, duration, date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, username, description, duration, date, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(input.user_id)
        .bind(&input.username)
        .bind(&input.description)
        .bind(input.duration)
        .bind(&input.date)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get a user's exercises within a date range, in insertion order
    ///
    /// The `date` column uses the "C" collation, so the range check is a
    /// plain byte-wise text comparison.
    pub async fn find(pool: &PgPool, filter: &ExerciseFilter) -> Result<Vec<ExerciseRecord>> {
        // LIMIT NULL is no limit in PostgreSQL
        let limit = filter.limit.map(|n| i64::try_from(n).unwrap_or(i64::MAX));

        let records = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT id, user_id, username, description, duration, date, created_at
            FROM exercises
            WHERE user_id = $1 AND date >= $2 AND date <= $3
            ORDER BY seq ASC
            LIMIT $4
            "#,
        )
        .bind(filter.user_id)
        .bind(&filter.from)
        .bind(&filter.to)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Delete every exercise, returning how many were removed
    pub async fn delete_all(pool: &PgPool) -> Result<u64> {
        let result = sqlx::query(r#"DELETE FROM exercises"#)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
