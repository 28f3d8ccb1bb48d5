//! User API routes

use crate::error::ApiResult;
use crate::extract::JsonOrForm;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use exercise_tracker_shared::{
    CreateUserRequest, DeleteAllResponse, DeleteResult, MessageResponse, User, UserListResponse,
    UserResponse,
};
use tracing::info;

const NO_USERS_MESSAGE: &str = "There are no users in the database!";

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/delete", get(delete_all_users))
}

/// GET /api/users - List all users
async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    info!("Getting all users");

    let users = UserService::list_users(state.store()).await?;

    if users.is_empty() {
        return Ok(Json(UserListResponse::Empty(MessageResponse::new(
            NO_USERS_MESSAGE,
        ))));
    }

    Ok(Json(UserListResponse::Users(
        users.into_iter().map(convert_user).collect(),
    )))
}

/// POST /api/users - Create a user
async fn create_user(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::create_user(state.store(), req).await?;

    Ok(Json(convert_user(user)))
}

/// GET /api/users/delete - Delete all users
async fn delete_all_users(State(state): State<AppState>) -> ApiResult<Json<DeleteAllResponse>> {
    info!("Deleting all users");

    let deleted = UserService::delete_all_users(state.store()).await?;

    Ok(Json(DeleteAllResponse {
        message: "All users have been deleted!".to_string(),
        result: DeleteResult {
            acknowledged: true,
            deleted_count: deleted,
        },
    }))
}

fn convert_user(user: User) -> UserResponse {
    UserResponse {
        username: user.username,
        id: user.id.to_string(),
    }
}
