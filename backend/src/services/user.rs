//! User service for user management

use crate::error::ApiError;
use crate::store::Store;
use anyhow::Context;
use exercise_tracker_shared::{CreateUserRequest, FieldError, User};
use tracing::info;
use validator::Validate;

/// User service for user operations
pub struct UserService;

impl UserService {
    /// Create a new user
    ///
    /// Usernames are not unique; a repeated name gets a new id.
    pub async fn create_user(store: &dyn Store, req: CreateUserRequest) -> Result<User, ApiError> {
        req.validate()?;
        let username = req.username.ok_or(FieldError::Missing("username"))?;

        info!(%username, "Creating a new user");

        let user = store
            .create_user(&username)
            .await
            .context("User creation failed!")?;

        Ok(user)
    }

    /// List every user
    pub async fn list_users(store: &dyn Store) -> Result<Vec<User>, ApiError> {
        let users = store
            .list_users()
            .await
            .context("Getting all users failed!")?;

        Ok(users)
    }

    /// Delete every user, returning how many were removed
    ///
    /// Exercises are left in place.
    pub async fn delete_all_users(store: &dyn Store) -> Result<u64, ApiError> {
        let deleted = store
            .delete_all_users()
            .await
            .context("Deleting all users failed!")?;

        info!(deleted, "Deleted all users");
        Ok(deleted)
    }
}
