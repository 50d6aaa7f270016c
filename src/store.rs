use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::{
    errors::PersistenceError,
    models::{Dish, DishPatch, NewDish},
    persistence::DishPersistence,
    query::{has_all_ingredients, normalize_ingredient},
};

/// Authoritative in-memory catalog plus its persistence mirror.
///
/// Mutations rewrite the whole persisted file while the write lock is held,
/// so writers are serialized and the file always reflects one consistent
/// state of the collection.
pub struct DishStore {
    dishes: RwLock<Vec<Dish>>,
    persistence: Arc<dyn DishPersistence>,
}

impl DishStore {
    /// Reads the full catalog from the persistence port.
    pub fn load(persistence: Arc<dyn DishPersistence>) -> Result<Self, PersistenceError> {
        let dishes = persistence.load()?;
        Ok(Self {
            dishes: RwLock::new(dishes),
            persistence,
        })
    }

    /// Cloned snapshot of the current collection. Later mutations are not
    /// reflected in the returned vector.
    pub fn get_all(&self) -> Vec<Dish> {
        self.dishes.read().unwrap().clone()
    }

    pub fn find_by_id(&self, id: &Uuid) -> Option<Dish> {
        self.dishes
            .read()
            .unwrap()
            .iter()
            .find(|dish| dish.id == *id)
            .cloned()
    }

    /// Dishes whose tokenized ingredient list contains every entry of
    /// `required` (case-insensitive, trimmed).
    pub fn find_by_ingredients(&self, required: &[String]) -> Vec<Dish> {
        let required: Vec<String> = required.iter().map(|i| normalize_ingredient(i)).collect();
        self.dishes
            .read()
            .unwrap()
            .iter()
            .filter(|dish| has_all_ingredients(dish, &required))
            .cloned()
            .collect()
    }

    pub fn add(&self, new: NewDish) -> Result<Dish, PersistenceError> {
        let dish = Dish {
            id: Uuid::new_v4(),
            name: new.name,
            ingredients: new.ingredients,
            diet: new.diet,
            prep_time: new.prep_time,
            cook_time: new.cook_time,
            flavor_profile: new.flavor_profile,
            course: new.course,
            state: new.state,
            region: new.region,
        };

        let mut dishes = self.dishes.write().unwrap();
        dishes.push(dish.clone());
        self.persistence.save(&dishes)?;

        Ok(dish)
    }

    /// Merges only the provided fields into the existing record; the id is
    /// immutable. Returns `None` when no dish has the given id.
    pub fn update(&self, id: &Uuid, patch: DishPatch) -> Result<Option<Dish>, PersistenceError> {
        let mut dishes = self.dishes.write().unwrap();

        let Some(dish) = dishes.iter_mut().find(|dish| dish.id == *id) else {
            return Ok(None);
        };

        if let Some(name) = patch.name {
            dish.name = name;
        }
        if let Some(ingredients) = patch.ingredients {
            dish.ingredients = ingredients;
        }
        if let Some(diet) = patch.diet {
            dish.diet = diet;
        }
        if let Some(prep_time) = patch.prep_time {
            dish.prep_time = prep_time;
        }
        if let Some(cook_time) = patch.cook_time {
            dish.cook_time = cook_time;
        }
        if let Some(flavor_profile) = patch.flavor_profile {
            dish.flavor_profile = flavor_profile;
        }
        if let Some(course) = patch.course {
            dish.course = course;
        }
        if let Some(state) = patch.state {
            dish.state = Some(state);
        }
        if let Some(region) = patch.region {
            dish.region = Some(region);
        }

        let updated = dish.clone();
        self.persistence.save(&dishes)?;

        Ok(Some(updated))
    }

    /// Removes the dish with the given id. Persists only when a record was
    /// actually removed.
    pub fn delete(&self, id: &Uuid) -> Result<bool, PersistenceError> {
        let mut dishes = self.dishes.write().unwrap();

        let before = dishes.len();
        dishes.retain(|dish| dish.id != *id);
        if dishes.len() == before {
            return Ok(false);
        }

        self.persistence.save(&dishes)?;
        Ok(true)
    }
}
