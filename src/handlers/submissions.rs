// src/handlers/submissions.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use sqlx::MySqlPool;
use validator::Validate;

use crate::{error::AppError, models::response::SubmitExamRequest};

/// Records one exam submission.
///
/// The UNIQUE constraint on `roll_number` is the sole duplicate guard: there
/// is no prior existence check, so two concurrent submissions for the same
/// roll number race at the insert and exactly one wins.
pub async fn submit_exam(
    State(pool): State<MySqlPool>,
    Json(payload): Json<SubmitExamRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    sqlx::query(
        r#"
        INSERT INTO exam_responses
        (roll_number, name, department, section, score, total_questions, was_tab_switched, submitted_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, NOW())
        "#,
    )
    .bind(&payload.roll_number)
    .bind(&payload.name)
    .bind(&payload.department)
    .bind(&payload.section)
    .bind(payload.score)
    .bind(payload.total_questions)
    .bind(payload.was_tab_switched)
    .execute(&pool)
    .await
    .map_err(|e| {
        if e.as_database_error().is_some_and(|db| db.is_unique_violation()) {
            AppError::DuplicateSubmission
        } else {
            AppError::Storage(e)
        }
    })?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Exam submitted successfully"
    })))
}

/// Advisory pre-check for clients. The authoritative guard stays in
/// `submit_exam`.
pub async fn check_roll(
    State(pool): State<MySqlPool>,
    Path(roll_number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM exam_responses WHERE roll_number = ?")
            .bind(&roll_number)
            .fetch_one(&pool)
            .await?;

    Ok(Json(serde_json::json!({ "exists": count > 0 })))
}
