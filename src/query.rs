use std::{cmp::Ordering, str::FromStr};

use tracing::warn;

use crate::{
    dto::{DishPage, default_limit, default_page},
    models::Dish,
};

pub fn normalize_ingredient(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Splits a comma-separated ingredient string into trimmed, lowercased tokens.
pub fn tokenize_ingredients(raw: &str) -> Vec<String> {
    raw.split(',').map(normalize_ingredient).collect()
}

/// `required` entries must already be normalized.
pub fn has_all_ingredients(dish: &Dish, required: &[String]) -> bool {
    let tokens = tokenize_ingredients(&dish.ingredients);
    required.iter().all(|needed| tokens.contains(needed))
}

/// Optional criteria for `GET /dishes`; anything left `None` is a no-op.
#[derive(Debug, Default)]
pub struct DishFilter {
    pub diet: Option<String>,
    pub flavor: Option<String>,
    /// Comma-separated list; a dish passes only if it has every entry.
    pub ingredients: Option<String>,
}

pub fn apply_filters(dishes: Vec<Dish>, filter: &DishFilter) -> Vec<Dish> {
    let required: Option<Vec<String>> = filter
        .ingredients
        .as_deref()
        .map(tokenize_ingredients);

    dishes
        .into_iter()
        .filter(|dish| {
            filter
                .diet
                .as_deref()
                .map_or(true, |want| dish.diet.as_str().eq_ignore_ascii_case(want))
        })
        .filter(|dish| {
            filter
                .flavor
                .as_deref()
                .map_or(true, |want| dish.flavor_profile.eq_ignore_ascii_case(want))
        })
        .filter(|dish| {
            required
                .as_deref()
                .map_or(true, |needed| has_all_ingredients(dish, needed))
        })
        .collect()
}

/// The dish attributes a caller may sort by. Unknown names fail to parse
/// instead of silently falling back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Ingredients,
    Diet,
    PrepTime,
    CookTime,
    FlavorProfile,
    Course,
    State,
    Region,
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "ingredients" => Ok(SortField::Ingredients),
            "diet" => Ok(SortField::Diet),
            "prep_time" => Ok(SortField::PrepTime),
            "cook_time" => Ok(SortField::CookTime),
            "flavor_profile" => Ok(SortField::FlavorProfile),
            "course" => Ok(SortField::Course),
            "state" => Ok(SortField::State),
            "region" => Ok(SortField::Region),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Only the literal "desc" flips the order; everything else is ascending.
    pub fn parse(s: &str) -> Self {
        if s == "desc" { SortOrder::Desc } else { SortOrder::Asc }
    }
}

enum SortKey<'a> {
    Str(&'a str),
    Num(u32),
    Missing,
}

fn sort_key<'a>(dish: &'a Dish, field: SortField) -> SortKey<'a> {
    match field {
        SortField::Name => SortKey::Str(&dish.name),
        SortField::Ingredients => SortKey::Str(&dish.ingredients),
        SortField::Diet => SortKey::Str(dish.diet.as_str()),
        SortField::PrepTime => SortKey::Num(dish.prep_time),
        SortField::CookTime => SortKey::Num(dish.cook_time),
        SortField::FlavorProfile => SortKey::Str(&dish.flavor_profile),
        SortField::Course => SortKey::Str(&dish.course),
        SortField::State => dish.state.as_deref().map_or(SortKey::Missing, SortKey::Str),
        SortField::Region => dish.region.as_deref().map_or(SortKey::Missing, SortKey::Str),
    }
}

/// Stable sort by the requested field. String fields compare
/// case-insensitively, numeric fields numerically. Pairs where the key is
/// missing on either side keep their relative order; how often that happened
/// is logged so a bad `sort_by` choice is visible without failing the request.
pub fn sort_dishes(dishes: &mut [Dish], field: SortField, order: SortOrder) {
    let mut incomparable = 0usize;

    dishes.sort_by(|a, b| {
        let ordering = match (sort_key(a, field), sort_key(b, field)) {
            (SortKey::Str(x), SortKey::Str(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
            (SortKey::Num(x), SortKey::Num(y)) => x.cmp(&y),
            _ => {
                incomparable += 1;
                Ordering::Equal
            }
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    if incomparable > 0 {
        warn!(
            "{:?} missing on some dishes: {} pairs left in input order",
            field, incomparable
        );
    }
}

/// 1-based pagination over the filtered, sorted collection. Zero values fall
/// back to the defaults; the slice is clipped to the available length.
pub fn paginate(dishes: Vec<Dish>, page: usize, limit: usize) -> DishPage {
    let page = if page == 0 { default_page() } else { page };
    let limit = if limit == 0 { default_limit() } else { limit };

    let total_dishes = dishes.len();
    let total_pages = total_dishes.div_ceil(limit);

    let start = (page - 1).saturating_mul(limit);
    let end = start.saturating_add(limit).min(total_dishes);
    let results = if start < total_dishes {
        dishes[start..end].to_vec()
    } else {
        Vec::new()
    };

    DishPage {
        page,
        limit,
        total_dishes,
        total_pages,
        results,
    }
}

/// Free-text search: the lowercased query must be a substring of the name,
/// of any single ingredient token, or of the state/region. Results keep the
/// collection's order. An empty query matches every dish.
pub fn search(dishes: &[Dish], query: &str) -> Vec<Dish> {
    let query = query.to_lowercase();

    dishes
        .iter()
        .filter(|dish| {
            dish.name.to_lowercase().contains(&query)
                || dish
                    .ingredients
                    .to_lowercase()
                    .split(',')
                    .any(|ingredient| ingredient.trim().contains(&query))
                || dish
                    .state
                    .as_deref()
                    .is_some_and(|state| state.to_lowercase().contains(&query))
                || dish
                    .region
                    .as_deref()
                    .is_some_and(|region| region.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Diet;
    use uuid::Uuid;

    fn dish(name: &str, ingredients: &str) -> Dish {
        Dish {
            id: Uuid::new_v4(),
            name: name.to_string(),
            ingredients: ingredients.to_string(),
            diet: Diet::Vegetarian,
            prep_time: 10,
            cook_time: 20,
            flavor_profile: "spicy".to_string(),
            course: "main course".to_string(),
            state: None,
            region: None,
        }
    }

    fn catalog() -> Vec<Dish> {
        vec![
            Dish {
                name: "Pasta".to_string(),
                ingredients: "Tomato, Garlic".to_string(),
                region: Some("Italy".to_string()),
                ..dish("", "")
            },
            Dish {
                name: "Chicken Curry".to_string(),
                ingredients: "Chicken, Spices".to_string(),
                diet: Diet::NonVegetarian,
                flavor_profile: "hot".to_string(),
                region: Some("India".to_string()),
                ..dish("", "")
            },
        ]
    }

    #[test]
    fn unsupplied_criteria_are_no_ops() {
        let dishes = catalog();
        let filtered = apply_filters(dishes.clone(), &DishFilter::default());
        assert_eq!(filtered.len(), dishes.len());
    }

    #[test]
    fn diet_filter_is_case_insensitive_exact() {
        let filter = DishFilter {
            diet: Some("Non-Vegetarian".to_string()),
            ..DishFilter::default()
        };
        let filtered = apply_filters(catalog(), &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Chicken Curry");
    }

    #[test]
    fn flavor_filter_is_case_insensitive_exact() {
        let filter = DishFilter {
            flavor: Some("HOT".to_string()),
            ..DishFilter::default()
        };
        let filtered = apply_filters(catalog(), &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Chicken Curry");
    }

    #[test]
    fn ingredients_filter_requires_every_token() {
        let filter = DishFilter {
            ingredients: Some("tomato, garlic".to_string()),
            ..DishFilter::default()
        };
        let filtered = apply_filters(catalog(), &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Pasta");

        let filter = DishFilter {
            ingredients: Some("tomato, chicken".to_string()),
            ..DishFilter::default()
        };
        assert!(apply_filters(catalog(), &filter).is_empty());
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        assert!("name".parse::<SortField>().is_ok());
        assert!("prep_time".parse::<SortField>().is_ok());
        assert!("calories".parse::<SortField>().is_err());
    }

    #[test]
    fn sort_orders_strings_case_insensitively() {
        let mut dishes = vec![dish("banana bread", ""), dish("Apple pie", "")];
        sort_dishes(&mut dishes, SortField::Name, SortOrder::Asc);
        assert_eq!(dishes[0].name, "Apple pie");

        sort_dishes(&mut dishes, SortField::Name, SortOrder::Desc);
        assert_eq!(dishes[0].name, "banana bread");
    }

    #[test]
    fn sort_orders_numbers_numerically() {
        let mut a = dish("A", "");
        a.cook_time = 90;
        let mut b = dish("B", "");
        b.cook_time = 9;
        let mut dishes = vec![a, b];

        sort_dishes(&mut dishes, SortField::CookTime, SortOrder::Asc);
        assert_eq!(dishes[0].cook_time, 9);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut first = dish("First", "");
        first.prep_time = 5;
        let mut second = dish("Second", "");
        second.prep_time = 5;
        let mut dishes = vec![first, second];

        sort_dishes(&mut dishes, SortField::PrepTime, SortOrder::Asc);
        assert_eq!(dishes[0].name, "First");
        assert_eq!(dishes[1].name, "Second");
    }

    #[test]
    fn missing_sort_keys_keep_input_order() {
        // only one dish carries a state, so every comparison is incomparable
        let mut with_state = dish("Second", "");
        with_state.state = Some("Punjab".to_string());
        let mut dishes = vec![dish("First", ""), with_state, dish("Third", "")];

        sort_dishes(&mut dishes, SortField::State, SortOrder::Asc);
        assert_eq!(dishes[0].name, "First");
        assert_eq!(dishes[1].name, "Second");
        assert_eq!(dishes[2].name, "Third");
    }

    #[test]
    fn pagination_contract_holds() {
        let dishes: Vec<Dish> = (0..7).map(|i| dish(&format!("Dish {}", i), "")).collect();

        let page = paginate(dishes.clone(), 1, 3);
        assert_eq!(page.results.len(), 3);
        assert_eq!(page.total_dishes, 7);
        assert_eq!(page.total_pages, 3);

        let page = paginate(dishes.clone(), 3, 3);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].name, "Dish 6");

        // past the end: empty results, metadata intact
        let page = paginate(dishes, 4, 3);
        assert!(page.results.is_empty());
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn two_dishes_limit_one_yields_two_pages() {
        let page = paginate(catalog(), 1, 1);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.total_dishes, 2);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn zero_page_and_limit_fall_back_to_defaults() {
        let page = paginate(catalog(), 0, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
        assert_eq!(page.results.len(), 2);
    }

    #[test]
    fn empty_collection_yields_zero_pages() {
        let page = paginate(Vec::new(), 1, 10);
        assert!(page.results.is_empty());
        assert_eq!(page.total_dishes, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let results = search(&catalog(), "chicken curry");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Chicken Curry");
    }

    #[test]
    fn search_matches_single_ingredient_tokens() {
        let results = search(&catalog(), "garlic");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Pasta");
    }

    #[test]
    fn search_matches_region() {
        let results = search(&catalog(), "italy");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Pasta");
    }

    #[test]
    fn search_preserves_collection_order() {
        // "i" hits both dishes (Garlic/Italy, Chicken/India)
        let results = search(&catalog(), "i");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "Pasta");
        assert_eq!(results[1].name, "Chicken Curry");
    }

    #[test]
    fn empty_query_matches_everything() {
        let results = search(&catalog(), "");
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn search_of_empty_catalog_is_empty() {
        assert!(search(&[], "anything").is_empty());
    }
}
