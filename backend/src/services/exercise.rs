//! Exercise service
//!
//! Provides business logic for exercise tracking:
//! - Logging an exercise against a user
//! - Date-range and limit filtered log retrieval
//! - Bulk deletion

use crate::error::ApiError;
use crate::repositories::{CreateExercise, ExerciseFilter};
use crate::store::Store;
use anyhow::Context;
use chrono::{NaiveDate, Utc};
use exercise_tracker_shared::validation::{
    iso_date, parse_duration, parse_limit, resolve_date_bound, resolve_exercise_date, EPOCH_DATE,
};
use exercise_tracker_shared::{AddExerciseRequest, Exercise, ExerciseLogQuery, FieldError, User};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// A newly stored exercise together with its owner
#[derive(Debug, Clone)]
pub struct LoggedExercise {
    pub user: User,
    pub exercise: Exercise,
}

/// A user's exercises selected by a log query
#[derive(Debug, Clone)]
pub struct ExerciseLog {
    pub user: User,
    pub exercises: Vec<Exercise>,
}

/// Exercise service for business logic
pub struct ExerciseService;

impl ExerciseService {
    /// Log an exercise for a user
    ///
    /// A blank or missing date defaults to today (UTC).
    pub async fn add_exercise(
        store: &dyn Store,
        user_id: Uuid,
        req: AddExerciseRequest,
    ) -> Result<LoggedExercise, ApiError> {
        req.validate()?;
        let description = req.description.ok_or(FieldError::Missing("description"))?;
        let duration = parse_duration(&req.duration.ok_or(FieldError::Missing("duration"))?)?;
        let date = resolve_exercise_date(req.date.as_deref(), Self::today())?;

        info!(%user_id, "Adding a new exercise");

        let user = store
            .find_user(user_id)
            .await
            .context("Exercise creation failed!")?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let exercise = store
            .create_exercise(CreateExercise {
                user_id: user.id,
                username: user.username.clone(),
                description,
                duration,
                date: iso_date(date),
            })
            .await
            .context("Exercise creation failed!")?;

        Ok(LoggedExercise { user, exercise })
    }

    /// Get a user's exercise log
    pub async fn get_log(
        store: &dyn Store,
        user_id: Uuid,
        query: &ExerciseLogQuery,
    ) -> Result<ExerciseLog, ApiError> {
        let user = store
            .find_user(user_id)
            .await
            .context("Error getting the user's exercise log.")?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let filter = Self::build_filter(user.id, query, Self::today());
        info!(
            %user_id,
            from = %filter.from,
            to = %filter.to,
            limit = ?filter.limit,
            "Looking up exercise log"
        );

        let exercises = store
            .find_exercises(&filter)
            .await
            .context("Error getting the user's exercise log.")?;

        Ok(ExerciseLog { user, exercises })
    }

    /// Delete every exercise, returning how many were removed
    pub async fn delete_all_exercises(store: &dyn Store) -> Result<u64, ApiError> {
        let deleted = store
            .delete_all_exercises()
            .await
            .context("Deleting all exercises failed!")?;

        info!(deleted, "Deleted all exercises");
        Ok(deleted)
    }

    /// Turn raw query parameters into a store filter
    ///
    /// `from` defaults to the epoch and `to` to `today`; both are inclusive.
    pub fn build_filter(user_id: Uuid, query: &ExerciseLogQuery, today: NaiveDate) -> ExerciseFilter {
        ExerciseFilter {
            user_id,
            from: resolve_date_bound(query.from.as_deref(), EPOCH_DATE),
            to: resolve_date_bound(query.to.as_deref(), &iso_date(today)),
            limit: parse_limit(query.limit.as_deref()),
        }
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use exercise_tracker_shared::NumberOrText;

    fn run(date: Option<&str>) -> AddExerciseRequest {
        AddExerciseRequest {
            description: Some("run".to_string()),
            duration: Some(NumberOrText::Integer(30)),
            date: date.map(str::to_string),
        }
    }

    fn query(from: Option<&str>, to: Option<&str>, limit: Option<&str>) -> ExerciseLogQuery {
        ExerciseLogQuery {
            from: from.map(str::to_string),
            to: to.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn test_build_filter_defaults() {
        let user_id = Uuid::new_v4();
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        let filter = ExerciseService::build_filter(user_id, &ExerciseLogQuery::default(), today);
        assert_eq!(filter.from, "1970-01-01");
        assert_eq!(filter.to, "2024-06-15");
        assert_eq!(filter.limit, None);

        let filter = ExerciseService::build_filter(
            user_id,
            &query(Some("2023-01-15"), Some("2023-02-15"), Some("abc")),
            today,
        );
        assert_eq!(filter.from, "2023-01-15");
        assert_eq!(filter.to, "2023-02-15");
        assert_eq!(filter.limit, None);
    }

    #[tokio::test]
    async fn test_add_exercise_defaults_to_today() {
        let store = MemoryStore::new();
        let user = store.create_user("alice").await.unwrap();

        let logged = ExerciseService::add_exercise(&store, user.id, run(None))
            .await
            .unwrap();

        assert_eq!(logged.user.id, user.id);
        assert_eq!(logged.exercise.username, "alice");
        assert_eq!(logged.exercise.duration, 30);
        assert_eq!(logged.exercise.date, iso_date(Utc::now().date_naive()));
    }

    #[tokio::test]
    async fn test_add_exercise_unknown_user_is_not_found() {
        let store = MemoryStore::new();
        let result = ExerciseService::add_exercise(&store, Uuid::new_v4(), run(None)).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_add_exercise_rejects_bad_input() {
        let store = MemoryStore::new();
        let user = store.create_user("alice").await.unwrap();

        let mut no_description = run(None);
        no_description.description = None;
        let mut bad_duration = run(None);
        bad_duration.duration = Some(NumberOrText::Text("forever".to_string()));
        let bad_date = run(Some("yesterday"));

        for req in [no_description, bad_duration, bad_date] {
            let result = ExerciseService::add_exercise(&store, user.id, req).await;
            assert!(matches!(result, Err(ApiError::Validation { .. })));
        }
    }

    #[tokio::test]
    async fn test_get_log_filters_by_date_range() {
        let store = MemoryStore::new();
        let user = store.create_user("alice").await.unwrap();
        for date in ["2023-01-01", "2023-02-01", "2023-03-01"] {
            ExerciseService::add_exercise(&store, user.id, run(Some(date)))
                .await
                .unwrap();
        }

        let log = ExerciseService::get_log(
            &store,
            user.id,
            &query(Some("2023-01-15"), Some("2023-02-15"), None),
        )
        .await
        .unwrap();

        let dates: Vec<_> = log.exercises.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, ["2023-02-01"]);
    }

    #[tokio::test]
    async fn test_get_log_applies_limit() {
        let store = MemoryStore::new();
        let user = store.create_user("alice").await.unwrap();
        for date in ["2023-01-01", "2023-02-01", "2023-03-01"] {
            ExerciseService::add_exercise(&store, user.id, run(Some(date)))
                .await
                .unwrap();
        }

        let log = ExerciseService::get_log(&store, user.id, &query(None, None, Some("1")))
            .await
            .unwrap();
        assert_eq!(log.exercises.len(), 1);
    }

    #[tokio::test]
    async fn test_get_log_only_returns_own_exercises() {
        let store = MemoryStore::new();
        let alice = store.create_user("alice").await.unwrap();
        let bob = store.create_user("bob").await.unwrap();
        ExerciseService::add_exercise(&store, alice.id, run(Some("2023-01-01")))
            .await
            .unwrap();

        let log = ExerciseService::get_log(&store, bob.id, &ExerciseLogQuery::default())
            .await
            .unwrap();
        assert_eq!(log.user.username, "bob");
        assert!(log.exercises.is_empty());
    }
}
