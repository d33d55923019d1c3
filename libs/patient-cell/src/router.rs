use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::*;

pub fn create_patient_router(state: PatientState) -> Router {
    Router::new()
        .route("/", get(list_patients))
        .route("/", post(create_patient))
        .route("/{id}", get(get_patient))
        .route("/{id}", put(update_patient))
        .with_state(state)
}
