//! Exercise API routes

use crate::error::ApiResult;
use crate::extract::JsonOrForm;
use crate::services::exercise::{ExerciseLog, LoggedExercise};
use crate::services::ExerciseService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use exercise_tracker_shared::validation::{display_date, parse_user_id};
use exercise_tracker_shared::{
    AddExerciseRequest, DeleteAllResponse, DeleteResult, Exercise, ExerciseLogQuery,
    ExerciseLogResponse, ExerciseResponse, LogEntry,
};
use tracing::info;

/// Create exercise routes
pub fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:id/exercises", post(add_exercise))
        .route("/users/:id/logs", get(get_log))
        .route("/exercises/delete", get(delete_all_exercises))
}

/// POST /api/users/:id/exercises - Log an exercise
async fn add_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonOrForm(req): JsonOrForm<AddExerciseRequest>,
) -> ApiResult<Json<ExerciseResponse>> {
    let user_id = parse_user_id(&id)?;

    let logged = ExerciseService::add_exercise(state.store(), user_id, req).await?;

    Ok(Json(convert_logged_exercise(logged)))
}

/// GET /api/users/:id/logs - Get a user's exercise log
async fn get_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ExerciseLogQuery>,
) -> ApiResult<Json<ExerciseLogResponse>> {
    let user_id = parse_user_id(&id)?;

    let log = ExerciseService::get_log(state.store(), user_id, &query).await?;

    Ok(Json(convert_log(log)))
}

/// GET /api/exercises/delete - Delete all exercises
async fn delete_all_exercises(
    State(state): State<AppState>,
) -> ApiResult<Json<DeleteAllResponse>> {
    info!("Deleting all exercises");

    let deleted = ExerciseService::delete_all_exercises(state.store()).await?;

    Ok(Json(DeleteAllResponse {
        message: "All exercises have been deleted!".to_string(),
        result: DeleteResult {
            acknowledged: true,
            deleted_count: deleted,
        },
    }))
}

// Helper functions for type conversion

/// The response carries the owner's id, not the new exercise's
fn convert_logged_exercise(logged: LoggedExercise) -> ExerciseResponse {
    ExerciseResponse {
        username: logged.user.username,
        description: logged.exercise.description,
        duration: logged.exercise.duration,
        date: display_date(&logged.exercise.date),
        id: logged.user.id.to_string(),
    }
}

fn convert_log(log: ExerciseLog) -> ExerciseLogResponse {
    let entries: Vec<LogEntry> = log.exercises.into_iter().map(convert_log_entry).collect();

    ExerciseLogResponse {
        id: log.user.id.to_string(),
        username: log.user.username,
        count: entries.len(),
        log: entries,
    }
}

fn convert_log_entry(exercise: Exercise) -> LogEntry {
    LogEntry {
        description: exercise.description,
        duration: exercise.duration,
        date: display_date(&exercise.date),
    }
}
