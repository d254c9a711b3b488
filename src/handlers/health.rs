// src/handlers/health.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::MySqlPool;

use crate::error::AppError;

/// Liveness probe. Does not touch storage.
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "OK",
        "message": "Online Exam Server is running"
    }))
}

/// Storage-connectivity probe: round-trips a trivial statement through the
/// pool without side effects.
pub async fn db_check(State(pool): State<MySqlPool>) -> Result<impl IntoResponse, AppError> {
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Database connected successfully!"
    })))
}
