// ABOUTME: Application controller owning the stores and the session gate
// ABOUTME: Single entry point the presentation layer drives and observes
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 BreadCrumb Contributors

//! # Application Controller
//!
//! [`App`] owns the catalog, meal log, and session manager, and is the single
//! mutation path the presentation layer uses. Meal operations pass through
//! the authentication gate: without a session they no-op (queries return
//! zero/empty) and a "must be signed in" message is surfaced through the
//! event bus. Catalog operations are ungated, matching shipped behavior.

use std::sync::Arc;

use crate::catalog::{FoodCatalog, NewFood};
use crate::events::{AppEvent, EventBus};
use crate::intelligence;
use crate::meal_log::MealLog;
use crate::models::{Food, MealEntry, MealType, UserProfile};
use crate::session::SessionManager;
use crate::storage::KeyValueStore;

/// Application controller owning all core state
pub struct App {
    catalog: FoodCatalog,
    meals: MealLog,
    session: SessionManager,
    events: EventBus,
}

impl App {
    /// Create the controller, loading all stores from `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            catalog: FoodCatalog::new(Arc::clone(&store)),
            meals: MealLog::new(Arc::clone(&store)),
            session: SessionManager::new(store),
            events: EventBus::new(),
        }
    }

    /// The food catalog, read-only; mutate through the controller
    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    /// The meal log, read-only; mutate through the controller
    pub fn meals(&self) -> &MealLog {
        &self.meals
    }

    /// The session manager, read-only; mutate through the controller
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Subscribe to change notifications
    pub fn subscribe(&self) -> std::sync::mpsc::Receiver<AppEvent> {
        self.events.subscribe()
    }

    // ── Session ─────────────────────────────────────────────────────────

    /// Run the credential flow and establish a remote session
    pub fn sign_in(&mut self) {
        self.session.sign_in();
        self.events
            .publish(&AppEvent::SessionChanged(self.session.state()));
    }

    /// End the current session; `clear_data` also erases meal and favorite
    /// data in local mode
    pub fn sign_out(&mut self, clear_data: bool) {
        self.session.sign_out(clear_data);
        self.events
            .publish(&AppEvent::SessionChanged(self.session.state()));
    }

    /// Enter local-only mode with a default profile
    pub fn use_local_storage_only(&mut self) {
        self.session.use_local_storage_only();
        self.events
            .publish(&AppEvent::SessionChanged(self.session.state()));
    }

    /// Enter local-only mode with an onboarding-built profile
    pub fn complete_onboarding(&mut self, profile: UserProfile) {
        self.session.complete_onboarding(profile);
        self.events
            .publish(&AppEvent::SessionChanged(self.session.state()));
    }

    // ── Meal management (guarded) ───────────────────────────────────────

    /// Log a meal; no-ops with a surfaced message outside a session
    pub fn add_meal_entry(&mut self, food: Food, meal_type: MealType, quantity: f64) {
        if !self.gate() {
            return;
        }
        self.meals.add_entry(food, meal_type, quantity);
        self.events.publish(&AppEvent::MealsChanged);
    }

    /// Remove entries at absolute positions in the full entry list (guarded)
    pub fn remove_meal_entries(&mut self, indices: &[usize]) {
        if !self.gate() {
            return;
        }
        self.meals.remove_entries(indices);
        self.events.publish(&AppEvent::MealsChanged);
    }

    /// Sum of calories logged today; 0 outside a session
    pub fn calories_consumed_today(&mut self) -> i64 {
        if !self.gate() {
            return 0;
        }
        self.meals.calories_consumed_today()
    }

    /// Today's entries, most recent first; empty outside a session
    pub fn entries_for_today(&mut self) -> Vec<MealEntry> {
        if !self.gate() {
            return Vec::new();
        }
        self.meals.entries_for_today()
    }

    // ── Food management ─────────────────────────────────────────────────

    /// Add a food to the catalog
    pub fn add_food(&mut self, new_food: NewFood) -> Food {
        let food = self.catalog.add_food(new_food);
        self.events.publish(&AppEvent::CatalogChanged);
        food
    }

    /// Replace a catalog entry by id
    pub fn update_food(&mut self, food: Food) {
        self.catalog.update_food(food);
        self.events.publish(&AppEvent::CatalogChanged);
    }

    /// Delete a catalog entry by id
    pub fn delete_food(&mut self, id: &str) {
        self.catalog.delete_food(id);
        self.events.publish(&AppEvent::CatalogChanged);
    }

    /// Flip a food's favorite flag
    pub fn toggle_favorite_food(&mut self, id: &str) {
        self.catalog.toggle_favorite(id);
        self.events.publish(&AppEvent::CatalogChanged);
    }

    /// Add a cuisine tag; returns whether it was newly added
    pub fn add_cuisine(&mut self, tag: &str) -> bool {
        let added = self.catalog.add_cuisine(tag);
        if added {
            self.events.publish(&AppEvent::CatalogChanged);
        }
        added
    }

    /// Foods with an exact-matching cuisine tag
    pub fn foods_by_cuisine(&self, tag: &str) -> Vec<Food> {
        self.catalog.foods_by_cuisine(tag)
    }

    // ── Profile management (guarded) ────────────────────────────────────

    /// Update the daily calorie goal on the active profile
    pub fn update_calorie_goal(&mut self, goal: u32) {
        if !self.gate() {
            return;
        }
        self.session.update_calorie_goal(goal);
        self.events.publish(&AppEvent::ProfileChanged);
    }

    /// Toggle a cuisine in the active profile's favorites
    pub fn toggle_favorite_cuisine(&mut self, cuisine: &str) {
        if !self.gate() {
            return;
        }
        self.session.toggle_favorite_cuisine(cuisine);
        self.events.publish(&AppEvent::ProfileChanged);
    }

    // ── Recommendations ─────────────────────────────────────────────────

    /// Catalog-driven food suggestions for the active profile
    pub fn food_suggestions(&self) -> Vec<Food> {
        self.catalog.recommend(&self.effective_profile())
    }

    /// Dashboard widget recommendations for the active profile
    pub fn dashboard_recommendations(&self) -> Vec<Food> {
        intelligence::dashboard_recommendations(&self.effective_profile(), self.catalog.foods())
    }

    /// The active profile, or the pre-onboarding default
    fn effective_profile(&self) -> UserProfile {
        self.session
            .profile()
            .cloned()
            .unwrap_or_else(|| UserProfile::new("User"))
    }

    /// Authentication gate: surface a message through the bus on failure
    fn gate(&mut self) -> bool {
        if self.session.verify_authenticated() {
            return true;
        }
        if let Some(message) = self.session.last_error() {
            self.events
                .publish(&AppEvent::ErrorSurfaced(message.to_owned()));
        }
        false
    }
}
