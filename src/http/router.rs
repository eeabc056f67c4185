//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Entry CRUD
        .route("/entries", post(handlers::create_entry))
        .route("/entries/{id}", get(handlers::get_entry))
        .route("/entries/{id}", patch(handlers::update_entry))
        .route("/entries/{id}", delete(handlers::deactivate_entry))
        // Advisory conflict check
        .route("/conflict-check", post(handlers::check_conflict))
        // Listings
        .route("/batches/{batch_id}/entries", get(handlers::list_by_batch))
        .route(
            "/teachers/{teacher_id}/entries",
            get(handlers::list_by_teacher),
        )
        .route("/levels/{level_id}/entries", get(handlers::list_by_level))
        // Calendar export
        .route(
            "/batches/{batch_id}/calendar",
            get(handlers::export_calendar),
        )
        .route(
            "/batches/{batch_id}/calendar.ics",
            get(handlers::export_calendar_ics),
        )
        // Dashboard
        .route("/timetable/weekly", get(handlers::weekly_grouping));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
