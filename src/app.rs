use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/data-entry", get(handlers::entry_form).post(handlers::submit))
        .route("/dashboard", get(handlers::dashboard))
        .route("/api/summary", get(handlers::get_summary))
        .with_state(state)
}
