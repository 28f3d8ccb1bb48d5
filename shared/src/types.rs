//! API request and response types
//!
//! Field names follow the JSON contract existing clients of the exercise
//! tracker already consume, so identifiers go over the wire as `_id` and the
//! deletion summary uses `deletedCount`.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Plain message body, used when there is nothing else to return
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A numeric form field that may arrive as a JSON number or as text
///
/// HTML forms submit everything as strings while JSON clients send numbers;
/// both are accepted and parsed later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Integer(i64),
    Float(f64),
    Text(String),
}

// ============================================================================
// Users
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(
        required(message = "username is required"),
        length(min = 1, message = "username is required")
    )]
    pub username: Option<String>,
}

/// User as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
}

/// Body of `GET /api/users`
///
/// An empty collection is reported with a message rather than `[]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserListResponse {
    Users(Vec<UserResponse>),
    Empty(MessageResponse),
}

// ============================================================================
// Exercises
// ============================================================================

/// Add exercise request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AddExerciseRequest {
    #[validate(
        required(message = "description is required"),
        length(min = 1, message = "description is required")
    )]
    pub description: Option<String>,
    #[validate(required(message = "duration is required"))]
    pub duration: Option<NumberOrText>,
    /// ISO date; today (UTC) when absent or blank
    #[serde(default)]
    pub date: Option<String>,
}

/// Response to a successful exercise creation
///
/// `id` carries the owning user's id, not the exercise's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: i32,
    pub date: String,
    #[serde(rename = "_id")]
    pub id: String,
}

/// Query parameters for `GET /api/users/:id/logs`
///
/// Kept as raw text: blank or non-numeric values fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseLogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// One entry of an exercise log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i32,
    pub date: String,
}

/// A user's filtered exercise log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseLogResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

// ============================================================================
// Administration
// ============================================================================

/// Outcome of a bulk delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    pub acknowledged: bool,
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

/// Body of the bulk delete endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAllResponse {
    pub message: String,
    pub result: DeleteResult,
}
