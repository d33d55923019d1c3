use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_store::Repository;

use crate::models::{CreateRecordRequest, MedicalRecord, RecordListQuery};
use crate::services::RecordService;

#[derive(Clone)]
pub struct RecordState {
    pub records: Arc<dyn Repository<MedicalRecord>>,
}

#[axum::debug_handler]
pub async fn create_record(
    State(state): State<RecordState>,
    Json(request): Json<CreateRecordRequest>,
) -> Result<Json<Value>, AppError> {
    let service = RecordService::new(state.records.clone());

    let record = service.create_record(request).await?;

    Ok(Json(json!(record)))
}

#[axum::debug_handler]
pub async fn list_records(
    State(state): State<RecordState>,
    Query(query): Query<RecordListQuery>,
) -> Result<Json<Value>, AppError> {
    let service = RecordService::new(state.records.clone());

    let page = service.list_records(query).await?;

    Ok(Json(json!(page)))
}
