use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    pub id: Uuid,
    pub name: String,
    /// Comma-separated list, e.g. "Tomato, Garlic, Basil".
    pub ingredients: String,
    pub diet: Diet,
    pub prep_time: u32,
    pub cook_time: u32,
    pub flavor_profile: String,
    pub course: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    Vegetarian,
    NonVegetarian,
}

impl Diet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Diet::Vegetarian => "vegetarian",
            Diet::NonVegetarian => "non-vegetarian",
        }
    }
}

impl std::str::FromStr for Diet {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vegetarian" => Ok(Diet::Vegetarian),
            "non-vegetarian" => Ok(Diet::NonVegetarian),
            _ => Err(()),
        }
    }
}

/// Fields for a dish about to be created; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewDish {
    pub name: String,
    pub ingredients: String,
    pub diet: Diet,
    pub prep_time: u32,
    pub cook_time: u32,
    pub flavor_profile: String,
    pub course: String,
    pub state: Option<String>,
    pub region: Option<String>,
}

/// Partial update: only `Some` fields are merged into the existing record.
#[derive(Debug, Clone, Default)]
pub struct DishPatch {
    pub name: Option<String>,
    pub ingredients: Option<String>,
    pub diet: Option<Diet>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub flavor_profile: Option<String>,
    pub course: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
}
