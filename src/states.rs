use crate::{config::Credentials, store::DishStore};
use std::sync::Arc;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// The store is behind an `Arc` so every handler clone shares the same
/// catalog; credentials and the signing secret are small and cloned freely.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DishStore>,
    pub credentials: Credentials,
    pub jwt_secret: String,
}
