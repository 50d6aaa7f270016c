use crate::{
    AppState,
    auth::validate_token,
    dto::{
        CreateDishRequest, DishListParams, DishPage, FindByIngredientsRequest, MessageResponse,
        SearchParams, UpdateDishRequest, validation_messages,
    },
    errors::ApiError,
    models::{Diet, Dish, DishPatch, NewDish},
    query::{self, DishFilter, SortField, SortOrder},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

const DIET_MESSAGE: &str = "Diet must be either vegetarian or non-vegetarian";

/// GET /dishes?page=1&limit=10&sort_by=name&order=asc&ingredients=&diet=&flavor=
/// Headers: Authorization: Bearer <token>
pub async fn list_dishes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<DishListParams>,
) -> Result<Json<DishPage>, ApiError> {
    validate_token(&headers, &state.jwt_secret)?;

    let sort_field = params.sort_by.parse::<SortField>().map_err(|_| {
        ApiError::Validation(vec![format!(
            "Cannot sort by unknown field '{}'",
            params.sort_by
        )])
    })?;
    let sort_order = SortOrder::parse(&params.order);

    // an empty query param ("?diet=") behaves as if it were absent
    let filter = DishFilter {
        diet: params.diet.filter(|s| !s.is_empty()),
        flavor: params.flavor.filter(|s| !s.is_empty()),
        ingredients: params.ingredients.filter(|s| !s.is_empty()),
    };

    let mut dishes = query::apply_filters(state.store.get_all(), &filter);
    query::sort_dishes(&mut dishes, sort_field, sort_order);

    Ok(Json(query::paginate(dishes, params.page, params.limit)))
}

/// GET /dishes/search?query=...
/// Headers: Authorization: Bearer <token>
pub async fn search_dishes(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Dish>>, ApiError> {
    validate_token(&headers, &state.jwt_secret)?;

    let dishes = state.store.get_all();

    Ok(Json(query::search(&dishes, &params.query)))
}

/// POST /dishes/find-by-ingredients
/// Body: { "ingredients": ["...", ...] }
pub async fn find_by_ingredients(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<FindByIngredientsRequest>,
) -> Result<Json<Vec<Dish>>, ApiError> {
    validate_token(&headers, &state.jwt_secret)?;

    payload
        .validate()
        .map_err(|e| ApiError::Validation(validation_messages(&e)))?;

    Ok(Json(state.store.find_by_ingredients(&payload.ingredients)))
}

/// GET /dishes/{id}
/// Headers: Authorization: Bearer <token>
pub async fn get_dish(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<Dish>, ApiError> {
    validate_token(&headers, &state.jwt_secret)?;

    let dish = state.store.find_by_id(&id).ok_or(ApiError::NotFound)?;

    Ok(Json(dish))
}

/// POST /dishes
/// Headers: Authorization: Bearer <token>
/// Body: new dish fields
pub async fn create_dish(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDishRequest>,
) -> Result<(StatusCode, Json<Dish>), ApiError> {
    validate_token(&headers, &state.jwt_secret)?;

    payload
        .validate()
        .map_err(|e| ApiError::Validation(validation_messages(&e)))?;

    let new_dish = NewDish {
        name: payload.name,
        ingredients: payload.ingredients,
        diet: payload
            .diet
            .parse::<Diet>()
            .map_err(|_| ApiError::Validation(vec![DIET_MESSAGE.to_string()]))?,
        prep_time: payload
            .prep_time
            .ok_or_else(|| ApiError::Validation(vec!["Prep time is required".to_string()]))?,
        cook_time: payload
            .cook_time
            .ok_or_else(|| ApiError::Validation(vec!["Cook time is required".to_string()]))?,
        flavor_profile: payload.flavor_profile,
        course: payload.course,
        state: payload.state,
        region: payload.region,
    };

    let dish = state.store.add(new_dish)?;

    info!("Dish created: {} ({})", dish.name, dish.id);

    Ok((StatusCode::CREATED, Json(dish)))
}

/// PUT /dishes/{id}
/// Headers: Authorization: Bearer <token>
/// Body: partial dish fields, at least one
pub async fn update_dish(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateDishRequest>,
) -> Result<Json<Dish>, ApiError> {
    validate_token(&headers, &state.jwt_secret)?;

    payload
        .validate()
        .map_err(|e| ApiError::Validation(validation_messages(&e)))?;

    if payload.is_empty() {
        return Err(ApiError::Validation(vec![
            "At least one field (other than ID) is required for update".to_string(),
        ]));
    }

    let diet = match payload.diet {
        Some(diet) => Some(
            diet.parse::<Diet>()
                .map_err(|_| ApiError::Validation(vec![DIET_MESSAGE.to_string()]))?,
        ),
        None => None,
    };

    let patch = DishPatch {
        name: payload.name,
        ingredients: payload.ingredients,
        diet,
        prep_time: payload.prep_time,
        cook_time: payload.cook_time,
        flavor_profile: payload.flavor_profile,
        course: payload.course,
        state: payload.state,
        region: payload.region,
    };

    let dish = state.store.update(&id, patch)?.ok_or(ApiError::NotFound)?;

    info!("Dish updated: {}", id);

    Ok(Json(dish))
}

/// DELETE /dishes/{id}
/// Headers: Authorization: Bearer <token>
pub async fn delete_dish(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_token(&headers, &state.jwt_secret)?;

    if !state.store.delete(&id)? {
        return Err(ApiError::NotFound);
    }

    info!("Dish deleted: {}", id);

    Ok(Json(MessageResponse {
        message: "Dish deleted successfully".to_string(),
    }))
}
