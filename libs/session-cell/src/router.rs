use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::*;

pub fn create_session_router(state: SessionState) -> Router {
    Router::new()
        .route("/", get(list_sessions))
        .route("/", post(create_session))
        .route("/schedule", get(get_schedule))
        .route("/schedule/navigate", get(navigate_schedule))
        .route("/{id}", get(get_session))
        .route("/{id}", put(update_session))
        .with_state(state)
}
