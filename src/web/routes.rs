use axum::{routing::get, Router};
use super::handler::{api_next_get, api_next_post, health, next_get, next_post, welcome, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/",         get(welcome))
        .route("/next",     get(next_get).post(next_post))
        .route("/api/next", get(api_next_get).post(api_next_post))
        .route("/health",   get(health))
        .with_state(state)
}
