// ABOUTME: Food catalog store owning food records and cuisine tags
// ABOUTME: Handles seed loading, CRUD, favorite toggling, and snapshot persistence
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 BreadCrumb Contributors

//! # Food Catalog Store
//!
//! Owns the list of [`Food`] records and the set of cuisine tags. Loading is
//! layered: a persisted snapshot wins over the bundled seed resource, which
//! wins over a minimal hardcoded fallback. Load never fails to the caller.
//!
//! Every mutating operation persists the full catalog snapshot, except
//! favorite toggling which persists only the favorite-id list. The favorite
//! flag is derived state reapplied onto freshly loaded records.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::errors::AppResult;
use crate::intelligence;
use crate::models::{Food, FoodData, UserProfile};
use crate::storage::{self, keys, KeyValueStore};

/// Bundled seed catalog shipped with the app
const SEED_CATALOG: &str = include_str!("data/foods.json");

/// Parameters for adding a new food to the catalog
///
/// The id is assigned by the catalog, never by the caller.
#[derive(Debug, Clone)]
pub struct NewFood {
    /// Display name
    pub name: String,
    /// Cuisine tag
    pub cuisine: String,
    /// Calories per single serving
    pub calories: u32,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Free-text description; empty text is stored as absent
    pub description: String,
}

/// Store owning the food catalog and cuisine tags
pub struct FoodCatalog {
    foods: Vec<Food>,
    cuisines: Vec<String>,
    store: Arc<dyn KeyValueStore>,
    last_error: Option<String>,
}

impl FoodCatalog {
    /// Create a catalog backed by `store`, loading from the persisted
    /// snapshot, then the bundled seed, then the hardcoded fallback
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_seed(store, SEED_CATALOG)
    }

    /// Create a catalog with a caller-supplied seed resource
    ///
    /// The seed stands in for the bundled resource; an unparseable seed falls
    /// back to the minimal hardcoded catalog, exactly like a corrupt bundle.
    pub fn with_seed(store: Arc<dyn KeyValueStore>, seed: &str) -> Self {
        let mut catalog = Self {
            foods: Vec::new(),
            cuisines: Vec::new(),
            store,
            last_error: None,
        };
        catalog.load_catalog(seed);
        catalog.load_favorites();
        catalog
    }

    /// All foods in catalog order
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    /// All known cuisine tags
    pub fn cuisines(&self) -> &[String] {
        &self.cuisines
    }

    /// Most recent persistence error message surfaced to the user, if any
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Load the catalog, never failing to the caller
    fn load_catalog(&mut self, seed: &str) {
        // A persisted snapshot reflects user edits and wins over the bundle.
        match storage::get_json::<FoodData>(self.store.as_ref(), keys::FOOD_CATALOG) {
            Ok(Some(data)) => {
                self.apply_food_data(data);
                debug!(count = self.foods.len(), "loaded catalog from snapshot");
                return;
            }
            Ok(None) => {}
            Err(e) => warn!("persisted catalog snapshot unreadable, using seed: {e}"),
        }

        match serde_json::from_str::<FoodData>(seed) {
            Ok(data) => {
                self.apply_food_data(data);
                debug!(count = self.foods.len(), "loaded catalog from seed");
            }
            Err(e) => {
                warn!("seed catalog failed to parse, using fallback: {e}");
                self.apply_food_data(Self::fallback_catalog());
            }
        }
    }

    fn apply_food_data(&mut self, data: FoodData) {
        self.foods = data.foods;
        if data.cuisines.is_empty() {
            let mut derived: Vec<String> =
                self.foods.iter().map(|f| f.cuisine.clone()).collect();
            derived.sort();
            derived.dedup();
            self.cuisines = derived;
        } else {
            self.cuisines = data.cuisines;
        }
    }

    /// Minimal catalog used when no other source is readable
    fn fallback_catalog() -> FoodData {
        let food = |id: &str, name: &str, cuisine: &str, calories, protein, carbs, fat| Food {
            id: id.to_owned(),
            name: name.to_owned(),
            cuisine: cuisine.to_owned(),
            calories,
            protein,
            carbs,
            fat,
            image: None,
            description: None,
            is_favorite: false,
        };
        FoodData {
            foods: vec![
                food("1", "Butter Chicken", "Indian", 490, 27.0, 10.0, 38.0),
                food("2", "Tacos", "Mexican", 320, 15.0, 30.0, 16.0),
                food("3", "Kung Pao Chicken", "Chinese", 410, 30.0, 24.0, 22.0),
            ],
            cuisines: vec!["Indian".to_owned(), "Mexican".to_owned(), "Chinese".to_owned()],
        }
    }

    /// Reapply persisted favorite ids onto the loaded foods
    fn load_favorites(&mut self) {
        match storage::get_json::<Vec<String>>(self.store.as_ref(), keys::FAVORITE_FOODS) {
            Ok(Some(favorite_ids)) => {
                for food in &mut self.foods {
                    food.is_favorite = favorite_ids.contains(&food.id);
                }
            }
            Ok(None) => {}
            Err(e) => warn!("favorite ids unreadable, leaving favorites unset: {e}"),
        }
    }

    /// Add a new food, assigning the next numeric id
    pub fn add_food(&mut self, new_food: NewFood) -> Food {
        let highest_id = self
            .foods
            .iter()
            .filter_map(|f| f.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        let food = Food {
            id: (highest_id + 1).to_string(),
            name: new_food.name,
            cuisine: new_food.cuisine,
            calories: new_food.calories,
            protein: new_food.protein,
            carbs: new_food.carbs,
            fat: new_food.fat,
            image: None,
            description: if new_food.description.is_empty() {
                None
            } else {
                Some(new_food.description)
            },
            is_favorite: false,
        };

        self.foods.push(food.clone());
        self.persist_catalog();
        food
    }

    /// Replace the catalog entry matching `food.id`; silent no-op if absent
    pub fn update_food(&mut self, food: Food) {
        if let Some(index) = self.foods.iter().position(|f| f.id == food.id) {
            self.foods[index] = food;
            self.persist_catalog();
        }
    }

    /// Remove all entries matching `id`
    pub fn delete_food(&mut self, id: &str) {
        self.foods.retain(|f| f.id != id);
        self.persist_catalog();
    }

    /// Flip the favorite flag for the entry matching `id`
    ///
    /// Persists only the favorite-id list, not the whole catalog.
    pub fn toggle_favorite(&mut self, id: &str) {
        if let Some(food) = self.foods.iter_mut().find(|f| f.id == id) {
            food.is_favorite = !food.is_favorite;
            self.persist_favorites();
        }
    }

    /// Append a cuisine tag if not already present (case-sensitive exact
    /// match); returns whether it was newly added
    pub fn add_cuisine(&mut self, tag: &str) -> bool {
        if self.cuisines.iter().any(|c| c == tag) {
            return false;
        }
        self.cuisines.push(tag.to_owned());
        self.persist_catalog();
        true
    }

    /// Foods with an exact-matching cuisine tag, in catalog order
    pub fn foods_by_cuisine(&self, tag: &str) -> Vec<Food> {
        self.foods.iter().filter(|f| f.cuisine == tag).cloned().collect()
    }

    /// Ranked recommendations for `profile` over the full catalog
    pub fn recommend(&self, profile: &UserProfile) -> Vec<Food> {
        intelligence::recommend_foods(profile, &self.foods)
    }

    fn persist_catalog(&mut self) {
        let snapshot = FoodData {
            foods: self.foods.clone(),
            cuisines: self.cuisines.clone(),
        };
        self.record_write(storage::set_json(
            self.store.as_ref(),
            keys::FOOD_CATALOG,
            &snapshot,
        ));
    }

    fn persist_favorites(&mut self) {
        let favorite_ids: Vec<&str> = self
            .foods
            .iter()
            .filter(|f| f.is_favorite)
            .map(|f| f.id.as_str())
            .collect();
        self.record_write(storage::set_json(
            self.store.as_ref(),
            keys::FAVORITE_FOODS,
            &favorite_ids,
        ));
    }

    /// Write failures surface as a message; in-memory state stays authoritative
    fn record_write(&mut self, result: AppResult<()>) {
        match result {
            Ok(()) => self.last_error = None,
            Err(e) => {
                error!("catalog persistence failed: {e}");
                self.last_error = Some(format!("Failed to save foods: {e}"));
            }
        }
    }
}
