pub mod health;

use axum::{routing::get, Router};

use crate::dashboard::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/dashboard",
            get(handlers::handle_show_dashboard).post(handlers::handle_submit_cv),
        )
        .with_state(state)
}
