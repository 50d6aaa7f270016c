use axum::Json;
use std::time::{SystemTime, UNIX_EPOCH};

/// GET /health
/// Response: 200 OK with JSON
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
      "status": "healthy",
      "version": env!("CARGO_PKG_VERSION"),
      "timestamp": SystemTime::now()
          .duration_since(UNIX_EPOCH)
          .unwrap_or_default()
          .as_secs()
    }))
}
