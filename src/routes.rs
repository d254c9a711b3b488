// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{health, questions, stats, submissions},
    state::AppState,
};

/// Assembles the main application router.
///
/// * The route table is static: path + method map directly to a handler.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool + Config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
        "http://localhost:5173".parse().unwrap(),
        "http://127.0.0.1:5173".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let api_routes = Router::new()
        .route("/test", get(health::db_check))
        .route("/submit-exam", post(submissions::submit_exam))
        .route("/check-roll/{roll_number}", get(submissions::check_roll))
        .route("/responses", get(stats::list_responses))
        .route("/stats", get(stats::get_stats))
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route(
            "/questions/{id}",
            put(questions::update_question).delete(questions::delete_question),
        );

    Router::new()
        .route("/", get(health::health_check))
        .nest("/api", api_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
