use axum::{routing::{get, post}, Router};
use crate::state::AppState;
use super::handlers::{health, index, niches, scan, scan_export};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(index))
        .route("/niches", get(niches))
        .route("/scan", post(scan))
        .route("/scan/export", post(scan_export))
        .with_state(state)
}
