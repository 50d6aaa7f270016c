use std::sync::Arc;

use dishes_api::{AppState, config::Config, persistence::JsonFileStore, store::DishStore};
use tracing::info;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env();

    let persistence = Arc::new(JsonFileStore::new(config.data_path.clone()));
    let store = Arc::new(DishStore::load(persistence).expect("Failed to load dish catalog"));

    let state = AppState {
        store,
        credentials: config.credentials,
        jwt_secret: config.jwt_secret,
    };

    let app = dishes_api::app(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /health                     - Health check");
    info!("  POST   /auth/login                 - Login with the configured credentials");
    info!("  POST   /auth/logout                - Logout (client discards its token)");
    info!("  GET    /dishes                     - List dishes, filtered/sorted/paginated (auth)");
    info!("  GET    /dishes/search              - Free-text search (auth)");
    info!("  POST   /dishes/find-by-ingredients - Dishes cookable from given ingredients (auth)");
    info!("  GET    /dishes/:id                 - Get specific dish (auth)");
    info!("  POST   /dishes                     - Create dish (auth)");
    info!("  PUT    /dishes/:id                 - Update dish (auth)");
    info!("  DELETE /dishes/:id                 - Delete dish (auth)");

    axum::serve(listener, app).await.unwrap();
}
