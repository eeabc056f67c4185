//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the engine
//! facade for business logic.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use super::dto::{
    ConflictCheckRequest, ConflictCheckResponse, CreateEntryRequest, EntryListResponse,
    HealthResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{BatchId, DayOfWeek, EntryId, EntrySummary, LevelId, TeacherId, TimetableEntry};
use crate::models::EntryChanges;
use crate::services::calendar;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store_status = match state.engine.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        store: store_status,
    }))
}

// =============================================================================
// Entry CRUD
// =============================================================================

/// POST /v1/entries
///
/// Create a new timetable entry. Returns 409 with the conflicting entries
/// when the slot is already taken in batch or teacher scope.
pub async fn create_entry(
    State(state): State<AppState>,
    Json(request): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<TimetableEntry>), AppError> {
    let draft = request.into_draft()?;
    let entry = state.engine.create_entry(draft).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /v1/entries/{id}
///
/// Fetch one entry by id, active or not.
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<TimetableEntry> {
    let entry = state.engine.get_entry(EntryId::new(id)).await?;
    Ok(Json(entry))
}

/// PATCH /v1/entries/{id}
///
/// Partially update an active entry. The merged entry is re-validated and
/// re-checked for conflicts, excluding its own prior state.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(changes): Json<EntryChanges>,
) -> HandlerResult<TimetableEntry> {
    let entry = state.engine.update_entry(EntryId::new(id), changes).await?;
    Ok(Json(entry))
}

/// DELETE /v1/entries/{id}
///
/// Deactivate an entry (soft delete). Idempotent.
pub async fn deactivate_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.engine.deactivate(EntryId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Conflict Check
// =============================================================================

/// POST /v1/conflict-check
///
/// Advisory conflict check. Reserves nothing; a create issued afterwards
/// is still re-checked atomically.
pub async fn check_conflict(
    State(state): State<AppState>,
    Json(request): Json<ConflictCheckRequest>,
) -> HandlerResult<ConflictCheckResponse> {
    let draft = request.into_draft()?;
    let report = state.engine.check_conflict(&draft).await?;
    Ok(Json(report.into()))
}

// =============================================================================
// Listings
// =============================================================================

/// GET /v1/batches/{batch_id}/entries
pub async fn list_by_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<i64>,
) -> HandlerResult<EntryListResponse> {
    let entries = state.engine.list_by_batch(BatchId::new(batch_id)).await?;
    Ok(Json(entries.into()))
}

/// GET /v1/teachers/{teacher_id}/entries
pub async fn list_by_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<i64>,
) -> HandlerResult<EntryListResponse> {
    let entries = state
        .engine
        .list_by_teacher(TeacherId::new(teacher_id))
        .await?;
    Ok(Json(entries.into()))
}

/// GET /v1/levels/{level_id}/entries
pub async fn list_by_level(
    State(state): State<AppState>,
    Path(level_id): Path<i64>,
) -> HandlerResult<EntryListResponse> {
    let entries = state.engine.list_by_level(LevelId::new(level_id)).await?;
    Ok(Json(entries.into()))
}

// =============================================================================
// Calendar & Dashboard
// =============================================================================

/// GET /v1/batches/{batch_id}/calendar
///
/// JSON calendar export: one event per active entry, anchored at its next
/// occurrence relative to now, plus a weekly RRULE.
pub async fn export_calendar(
    State(state): State<AppState>,
    Path(batch_id): Path<i64>,
) -> HandlerResult<calendar::CalendarExport> {
    let export = state
        .engine
        .export_calendar(BatchId::new(batch_id), Utc::now())
        .await?;
    Ok(Json(export))
}

/// GET /v1/batches/{batch_id}/calendar.ics
///
/// The same export rendered as a VCALENDAR document.
pub async fn export_calendar_ics(
    State(state): State<AppState>,
    Path(batch_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let export = state
        .engine
        .export_calendar(BatchId::new(batch_id), Utc::now())
        .await?;
    let body = calendar::render_ics(&export);

    Ok((
        [(header::CONTENT_TYPE, "text/calendar; charset=utf-8")],
        body,
    ))
}

/// GET /v1/timetable/weekly
///
/// Active entries grouped by day of week for the dashboard grid.
pub async fn weekly_grouping(
    State(state): State<AppState>,
) -> HandlerResult<BTreeMap<DayOfWeek, Vec<EntrySummary>>> {
    let grouping = state.engine.weekly_grouping().await?;
    Ok(Json(grouping))
}
