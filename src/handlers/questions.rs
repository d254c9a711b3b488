// src/handlers/questions.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use sqlx::MySqlPool;
use validator::Validate;

use crate::{
    error::AppError,
    models::question::{QuestionPayload, QuestionRow, encode_options},
};

/// Lists the whole question bank, ascending by id, with `options` decoded.
///
/// A row whose stored options fail to parse fails the entire listing with a
/// corrupt-record error instead of being dropped.
pub async fn list_questions(State(pool): State<MySqlPool>) -> Result<impl IntoResponse, AppError> {
    let rows: Vec<QuestionRow> = sqlx::query_as(
        r#"
        SELECT id, question, options, correct_answer
        FROM exam_questions
        ORDER BY id ASC
        "#,
    )
    .fetch_all(&pool)
    .await?;

    let questions = rows
        .into_iter()
        .map(QuestionRow::into_question)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": questions
    })))
}

/// Creates a new question and returns the store-assigned id.
pub async fn create_question(
    State(pool): State<MySqlPool>,
    Json(payload): Json<QuestionPayload>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let options_text = encode_options(&payload.options);

    let result = sqlx::query(
        "INSERT INTO exam_questions (question, options, correct_answer) VALUES (?, ?, ?)",
    )
    .bind(&payload.question)
    .bind(&options_text)
    .bind(&payload.correct_answer)
    .execute(&pool)
    .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "id": result.last_insert_id()
    })))
}

/// Fully replaces a question's mutable fields.
///
/// Zero rows affected is still a success: an update against an id that no
/// longer exists stays an idempotent no-op.
pub async fn update_question(
    State(pool): State<MySqlPool>,
    Path(id): Path<i64>,
    Json(payload): Json<QuestionPayload>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let options_text = encode_options(&payload.options);

    sqlx::query("UPDATE exam_questions SET question = ?, options = ?, correct_answer = ? WHERE id = ?")
        .bind(&payload.question)
        .bind(&options_text)
        .bind(&payload.correct_answer)
        .bind(id)
        .execute(&pool)
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Question updated"
    })))
}

/// Deletes a question by id. Deleting a missing id is a no-op success.
pub async fn delete_question(
    State(pool): State<MySqlPool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    sqlx::query("DELETE FROM exam_questions WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Question deleted"
    })))
}
