use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Validate, Deserialize)]
pub struct CreateDishRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Ingredients are required"))]
    pub ingredients: String,
    #[serde(default)]
    #[validate(custom(function = "validate_diet"))]
    pub diet: String,
    #[validate(required(message = "Prep time is required"))]
    pub prep_time: Option<u32>,
    #[validate(required(message = "Cook time is required"))]
    pub cook_time: Option<u32>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Flavor profile is required"))]
    pub flavor_profile: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Course is required"))]
    pub course: String,
    pub state: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Validate, Deserialize, Default)]
pub struct UpdateDishRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Ingredients must not be empty"))]
    pub ingredients: Option<String>,
    #[validate(custom(function = "validate_diet"))]
    pub diet: Option<String>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    #[validate(length(min = 1, message = "Flavor profile must not be empty"))]
    pub flavor_profile: Option<String>,
    #[validate(length(min = 1, message = "Course must not be empty"))]
    pub course: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
}

impl UpdateDishRequest {
    /// True when the body carries nothing to merge.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.ingredients.is_none()
            && self.diet.is_none()
            && self.prep_time.is_none()
            && self.cook_time.is_none()
            && self.flavor_profile.is_none()
            && self.course.is_none()
            && self.state.is_none()
            && self.region.is_none()
    }
}

#[derive(Debug, Validate, Deserialize)]
pub struct FindByIngredientsRequest {
    #[validate(length(min = 1, message = "Ingredients list must not be empty"))]
    pub ingredients: Vec<String>,
}

fn validate_diet(diet: &str) -> Result<(), ValidationError> {
    if diet == "vegetarian" || diet == "non-vegetarian" {
        return Ok(());
    }
    let mut error = ValidationError::new("diet");
    error.message = Some("Diet must be either vegetarian or non-vegetarian".into());
    Err(error)
}

/// Flattens validator output into one human-readable message per violated
/// rule, so a 400 reports every problem at once.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect()
}
