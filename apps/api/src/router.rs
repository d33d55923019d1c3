use std::sync::Arc;

use axum::{routing::get, Router};

use patient_cell::router::create_patient_router;
use payment_cell::router::create_payment_router;
use record_cell::router::create_record_router;
use session_cell::router::create_session_router;

use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Practice API is running!" }))
        .nest("/patients", create_patient_router(state.patients.clone()))
        .nest("/sessions", create_session_router(state.sessions.clone()))
        .nest("/payments", create_payment_router(state.payments.clone()))
        .nest("/records", create_record_router(state.records.clone()))
}
