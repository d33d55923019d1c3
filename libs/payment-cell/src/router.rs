use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::*;

pub fn create_payment_router(state: PaymentState) -> Router {
    Router::new()
        .route("/", get(list_payments))
        .route("/", post(create_payment))
        .route("/summary", get(payment_summary))
        .route("/{id}", put(update_payment))
        .with_state(state)
}
