mod requests;
mod responses;

pub use requests::{
    CreateDishRequest, FindByIngredientsRequest, LoginRequest, UpdateDishRequest,
    validation_messages,
};
pub use responses::{
    DishListParams, DishPage, LoginResponse, MessageResponse, SearchParams, default_limit,
    default_page,
};
