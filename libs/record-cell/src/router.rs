use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::*;

pub fn create_record_router(state: RecordState) -> Router {
    Router::new()
        .route("/", get(list_records))
        .route("/", post(create_record))
        .with_state(state)
}
