use std::{fs, io::ErrorKind, path::PathBuf};

use tracing::info;

use crate::{errors::PersistenceError, models::Dish};

/// Storage port for the dish catalog. The store reads the whole collection
/// once at startup and rewrites it wholesale after every mutation, so
/// implementations only need these two operations.
pub trait DishPersistence: Send + Sync {
    fn load(&self) -> Result<Vec<Dish>, PersistenceError>;
    fn save(&self, dishes: &[Dish]) -> Result<(), PersistenceError>;
}

/// Catalog persisted as a pretty-printed JSON array on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DishPersistence for JsonFileStore {
    fn load(&self) -> Result<Vec<Dish>, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No catalog file at {}, starting empty", self.path.display());
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, dishes: &[Dish]) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(dishes)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
