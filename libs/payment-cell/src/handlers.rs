use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_store::Repository;

use crate::models::{CreatePaymentRequest, Payment, SummaryQuery, UpdatePaymentRequest};
use crate::services::PaymentService;

#[derive(Clone)]
pub struct PaymentState {
    pub payments: Arc<dyn Repository<Payment>>,
}

#[axum::debug_handler]
pub async fn create_payment(
    State(state): State<PaymentState>,
    Json(request): Json<CreatePaymentRequest>,
) -> Result<Json<Value>, AppError> {
    let service = PaymentService::new(state.payments.clone());

    let payment = service.create_payment(request).await?;

    Ok(Json(json!(payment)))
}

#[axum::debug_handler]
pub async fn update_payment(
    State(state): State<PaymentState>,
    Path(payment_id): Path<Uuid>,
    Json(request): Json<UpdatePaymentRequest>,
) -> Result<Json<Value>, AppError> {
    let service = PaymentService::new(state.payments.clone());

    let payment = service.update_payment(payment_id, request).await?;

    Ok(Json(json!(payment)))
}

#[axum::debug_handler]
pub async fn list_payments(
    State(state): State<PaymentState>,
) -> Result<Json<Value>, AppError> {
    let service = PaymentService::new(state.payments.clone());

    let payments = service.list_payments().await?;

    Ok(Json(json!({
        "payments": payments,
        "total": payments.len()
    })))
}

#[axum::debug_handler]
pub async fn payment_summary(
    State(state): State<PaymentState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<Value>, AppError> {
    let month = match query.month {
        Some(raw) => Some(parse_month(&raw)?),
        None => None,
    };

    let service = PaymentService::new(state.payments.clone());
    let summary = service.summary(month).await?;

    Ok(Json(json!(summary)))
}

fn parse_month(raw: &str) -> Result<(i32, u32), AppError> {
    let invalid = || AppError::BadRequest(format!("Invalid month '{}', expected YYYY-MM", raw));

    let (year, month) = raw.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    Ok((year, month))
}
