// src/handlers/stats.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::MySqlPool;

use crate::{
    error::AppError,
    models::response::{ExamResponse, ExamStats},
};

/// Aggregates over all recorded submissions.
///
/// All three aggregates come from a single statement so they reflect one
/// snapshot: a submission landing mid-request is either in all of them or in
/// none.
pub async fn get_stats(State(pool): State<MySqlPool>) -> Result<impl IntoResponse, AppError> {
    let (total, score_sum, tab_switches): (i64, i64, i64) = sqlx::query_as(
        r#"
        SELECT
            COUNT(*),
            CAST(COALESCE(SUM(score), 0) AS SIGNED),
            CAST(COALESCE(SUM(was_tab_switched), 0) AS SIGNED)
        FROM exam_responses
        "#,
    )
    .fetch_one(&pool)
    .await?;

    let stats = ExamStats {
        total_submissions: total,
        average_score: mean_score(score_sum, total),
        tab_switch_count: tab_switches,
    };

    Ok(Json(serde_json::json!({
        "success": true,
        "data": stats
    })))
}

/// Arithmetic mean rounded to two decimal places; 0.00 for an empty table.
fn mean_score(score_sum: i64, count: i64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (score_sum as f64 / count as f64 * 100.0).round() / 100.0
}

/// Lists every recorded submission, most recent first.
pub async fn list_responses(State(pool): State<MySqlPool>) -> Result<impl IntoResponse, AppError> {
    let responses: Vec<ExamResponse> = sqlx::query_as(
        r#"
        SELECT
            id, roll_number, name, department, section,
            score, total_questions, was_tab_switched, submitted_at
        FROM exam_responses
        ORDER BY submitted_at DESC
        "#,
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": responses
    })))
}
