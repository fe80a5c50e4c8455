pub mod characters;
pub mod health;

use crate::db::Repository;
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/character/add", post(characters::create_character))
        .route("/character/getAll", get(characters::get_all_characters))
        .route("/character/get/:id", get(characters::get_character))
        .route(
            "/character/delete/:id",
            delete(characters::delete_character),
        )
        .layer(cors)
        .with_state(state)
}
