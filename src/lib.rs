use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

pub mod auth;
pub mod config;
pub mod dto;
pub mod errors;
pub mod models;
pub mod persistence;
pub mod query;
pub mod routes;
pub mod states;
pub mod store;

pub use states::AppState;

use routes::{
    auth::{login, logout},
    dishes::{
        create_dish, delete_dish, find_by_ingredients, get_dish, list_dishes, search_dishes,
        update_dish,
    },
    health::health_check,
};

/// Builds the full application router over the given state.
pub fn app(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Public routes (no auth required)
        .route("/health", get(health_check))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        // Protected routes (bearer token required)
        .route("/dishes", get(list_dishes).post(create_dish))
        .route("/dishes/search", get(search_dishes))
        .route("/dishes/find-by-ingredients", post(find_by_ingredients))
        .route(
            "/dishes/{id}",
            get(get_dish).put(update_dish).delete(delete_dish),
        )
        .with_state(state)
        .layer(cors)
}
