//! Data models for the Exercise Tracker application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person exercises are logged against
///
/// Usernames are not unique; two users may share one and still get
/// distinct ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// A single logged exercise
///
/// `username` is copied from the owning user when the exercise is created.
/// `date` keeps the ISO `YYYY-MM-DD` text so range filters can compare it
/// lexicographically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub description: String,
    pub duration: i32,
    pub date: String,
    pub created_at: DateTime<Utc>,
}
