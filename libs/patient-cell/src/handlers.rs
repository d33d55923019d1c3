use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_store::Repository;

use crate::models::{CreatePatientRequest, Patient, PatientListQuery, UpdatePatientRequest};
use crate::services::PatientService;

#[derive(Clone)]
pub struct PatientState {
    pub patients: Arc<dyn Repository<Patient>>,
}

#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<PatientState>,
    Json(request): Json<CreatePatientRequest>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(state.patients.clone());

    let patient = service.create_patient(request).await?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<PatientState>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(state.patients.clone());

    let patient = service.get_patient(patient_id).await?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn update_patient(
    State(state): State<PatientState>,
    Path(patient_id): Path<Uuid>,
    Json(request): Json<UpdatePatientRequest>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(state.patients.clone());

    let patient = service.update_patient(patient_id, request).await?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn list_patients(
    State(state): State<PatientState>,
    Query(query): Query<PatientListQuery>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(state.patients.clone());

    let patients = service.list_patients(query).await?;

    Ok(Json(json!({
        "patients": patients,
        "total": patients.len()
    })))
}
