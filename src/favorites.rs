use std::collections::HashMap;
use std::sync::RwLock;

use crate::model::Recipe;

/// Volatile store of liked recipes, keyed by recipe id.
///
/// Lives for the life of the process and holds its contents in memory
/// only. Keys are strings so numeric-string ids from callers round-trip
/// unchanged. Writes are last-writer-wins; removing an id that was never
/// stored is a no-op.
///
/// The store is meant to be injected into whatever serves requests
/// rather than held as a global, so a persistent backing can replace it
/// later without touching the assembly logic.
#[derive(Debug, Default)]
pub struct FavoritesStore {
    inner: RwLock<HashMap<String, Recipe>>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all stored recipes, in no particular order.
    pub fn list(&self) -> Vec<Recipe> {
        self.inner
            .read()
            .expect("favorites lock poisoned")
            .values()
            .cloned()
            .collect()
    }

    pub fn put(&self, id: impl Into<String>, recipe: Recipe) {
        self.inner
            .write()
            .expect("favorites lock poisoned")
            .insert(id.into(), recipe);
    }

    pub fn remove(&self, id: &str) {
        self.inner
            .write()
            .expect("favorites lock poisoned")
            .remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner
            .read()
            .expect("favorites lock poisoned")
            .contains_key(id)
    }
}
