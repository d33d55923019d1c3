use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Weekday};
use serde_json::{json, Value};
use uuid::Uuid;

use patient_cell::models::Patient;
use shared_models::error::AppError;
use shared_store::Repository;

use crate::models::{
    CreateSessionRequest, NavigateQuery, ScheduleQuery, Session, UpdateSessionRequest,
};
use crate::services::schedule::{self, Direction, ViewMode};
use crate::services::SessionService;

#[derive(Clone)]
pub struct SessionState {
    pub sessions: Arc<dyn Repository<Session>>,
    pub patients: Arc<dyn Repository<Patient>>,
    pub week_start: Weekday,
}

fn parse_reference(date: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid reference date '{}'", date)))
}

#[axum::debug_handler]
pub async fn create_session(
    State(state): State<SessionState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<Value>, AppError> {
    let service = SessionService::new(state.sessions.clone(), state.patients.clone());

    let session = service.create_session(request).await?;

    Ok(Json(json!(session)))
}

#[axum::debug_handler]
pub async fn get_session(
    State(state): State<SessionState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = SessionService::new(state.sessions.clone(), state.patients.clone());

    let session = service.get_session(session_id).await?;

    Ok(Json(json!(session)))
}

#[axum::debug_handler]
pub async fn update_session(
    State(state): State<SessionState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<UpdateSessionRequest>,
) -> Result<Json<Value>, AppError> {
    let service = SessionService::new(state.sessions.clone(), state.patients.clone());

    let session = service.update_session(session_id, request).await?;

    Ok(Json(json!(session)))
}

#[axum::debug_handler]
pub async fn list_sessions(
    State(state): State<SessionState>,
) -> Result<Json<Value>, AppError> {
    let service = SessionService::new(state.sessions.clone(), state.patients.clone());

    let sessions = service.list_sessions().await?;

    Ok(Json(json!({
        "sessions": sessions,
        "total": sessions.len()
    })))
}

/// The bucketed calendar view-model for a reference date and view mode.
#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<SessionState>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<Value>, AppError> {
    let reference = parse_reference(&query.date)?;
    let mode: ViewMode = query.view.parse()?;

    let service = SessionService::new(state.sessions.clone(), state.patients.clone());
    let view = service.schedule(reference, mode, state.week_start).await?;

    Ok(Json(json!({
        "reference": reference,
        "schedule": view
    })))
}

/// Shifts the reference date by one unit of the view mode.
#[axum::debug_handler]
pub async fn navigate_schedule(
    State(_state): State<SessionState>,
    Query(query): Query<NavigateQuery>,
) -> Result<Json<Value>, AppError> {
    let reference = parse_reference(&query.date)?;
    let mode: ViewMode = query.view.parse()?;
    let direction: Direction = query.direction.parse()?;

    let shifted = schedule::navigate(reference, mode, direction)?;

    Ok(Json(json!({
        "reference": shifted
    })))
}
