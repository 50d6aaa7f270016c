use crate::models::Dish;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Query parameters for GET /dishes
#[derive(Debug, Deserialize)]
pub struct DishListParams {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default = "default_order")]
    pub order: String,
    pub ingredients: Option<String>,
    pub diet: Option<String>,
    pub flavor: Option<String>,
}

pub fn default_page() -> usize {
    1
}
pub fn default_limit() -> usize {
    10
}
fn default_sort_by() -> String {
    "name".to_string()
}
fn default_order() -> String {
    "asc".to_string()
}

/// Query parameters for GET /dishes/search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

/// Paginated response wrapper
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DishPage {
    pub page: usize,
    pub limit: usize,
    pub total_dishes: usize,
    pub total_pages: usize,
    pub results: Vec<Dish>,
}
