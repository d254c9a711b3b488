// src/models/response.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'exam_responses' table in the database.
/// One row per exam attempt; `roll_number` is unique, so a participant can
/// submit at most once.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ExamResponse {
    pub id: i64,
    pub roll_number: String,
    pub name: String,
    pub department: String,
    pub section: String,
    pub score: i32,
    pub total_questions: i32,
    pub was_tab_switched: bool,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// DTO for submitting an exam attempt.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitExamRequest {
    #[validate(length(min = 1, message = "roll_number must not be empty"))]
    pub roll_number: String,
    pub name: String,
    pub department: String,
    pub section: String,
    #[validate(range(min = 0, message = "score must be non-negative"))]
    pub score: i32,
    #[validate(range(min = 1, message = "total_questions must be positive"))]
    pub total_questions: i32,
    pub was_tab_switched: bool,
}

/// Aggregates served by the stats endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamStats {
    pub total_submissions: i64,
    pub average_score: f64,
    pub tab_switch_count: i64,
}
