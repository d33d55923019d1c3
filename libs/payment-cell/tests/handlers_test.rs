use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;

use payment_cell::demo::demo_payments;
use payment_cell::handlers::*;
use payment_cell::models::{
    CreatePaymentRequest, Payment, PaymentStatus, SummaryQuery, UpdatePaymentRequest,
};
use shared_models::error::AppError;
use shared_store::{InMemoryRepository, Repository};

fn seeded_state() -> PaymentState {
    let payments: Arc<dyn Repository<Payment>> =
        Arc::new(InMemoryRepository::with_items(demo_payments()));
    PaymentState { payments }
}

#[tokio::test]
async fn test_create_payment_success() {
    let state = seeded_state();

    let request = CreatePaymentRequest {
        date: "2024-12-21".to_string(),
        patient: "Lucas Mendes".to_string(),
        session: "Sessão individual - 50min".to_string(),
        amount: 210.0,
        status: PaymentStatus::Pending,
    };

    let result = create_payment(State(state.clone()), Json(request)).await;

    let body = result.unwrap().0;
    assert_eq!(body["patient"], "Lucas Mendes");
    assert_eq!(body["status"], "pending");

    assert_eq!(state.payments.list().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_create_payment_rejects_non_positive_amounts() {
    let state = seeded_state();

    let request = CreatePaymentRequest {
        date: "2024-12-21".to_string(),
        patient: "Lucas Mendes".to_string(),
        session: "Sessão individual - 50min".to_string(),
        amount: 0.0,
        status: PaymentStatus::Pending,
    };

    let result = create_payment(State(state), Json(request)).await;

    match result {
        Err(AppError::Validation(issues)) => {
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].field, "amount");
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_payment_marks_as_paid() {
    let state = seeded_state();
    let pending = state
        .payments
        .list()
        .await
        .unwrap()
        .into_iter()
        .find(|p| p.status == PaymentStatus::Pending)
        .unwrap();

    let request = UpdatePaymentRequest {
        status: Some(PaymentStatus::Paid),
        amount: None,
    };

    let result = update_payment(State(state), Path(pending.id), Json(request)).await;

    let body = result.unwrap().0;
    assert_eq!(body["status"], "paid");
    assert!(!body["updated_at"].is_null());
}

#[tokio::test]
async fn test_update_unknown_payment_is_not_found() {
    let state = seeded_state();

    let request = UpdatePaymentRequest {
        status: Some(PaymentStatus::Paid),
        amount: None,
    };

    let result = update_payment(State(state), Path(Uuid::new_v4()), Json(request)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_summary_totals_by_status() {
    let state = seeded_state();

    let result = payment_summary(State(state), Query(SummaryQuery { month: None })).await;

    let body = result.unwrap().0;
    assert_eq!(body["month"], 8450.0);
    assert_eq!(body["pending"], 1200.0);
    assert_eq!(body["received"], 7250.0);
}

#[tokio::test]
async fn test_summary_restricts_month_total_when_asked() {
    let state = seeded_state();
    // An overdue January payment: outside December, excluded from received.
    state
        .payments
        .create(Payment {
            id: Uuid::new_v4(),
            date: chrono::NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            patient: "Bruna Rocha".to_string(),
            session: "Sessão inicial de janeiro".to_string(),
            amount: 230.0,
            status: PaymentStatus::Overdue,
            created_at: chrono::Utc::now(),
            updated_at: None,
        })
        .await
        .unwrap();

    let result = payment_summary(
        State(state),
        Query(SummaryQuery {
            month: Some("2024-12".to_string()),
        }),
    )
    .await;

    let body = result.unwrap().0;
    assert_eq!(body["month"], 8450.0);
    assert_eq!(body["pending"], 1200.0);
    assert_eq!(body["received"], 7250.0);
}

#[tokio::test]
async fn test_summary_rejects_malformed_month() {
    let state = seeded_state();

    let result = payment_summary(
        State(state),
        Query(SummaryQuery {
            month: Some("December".to_string()),
        }),
    )
    .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}
