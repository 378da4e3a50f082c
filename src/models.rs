// ABOUTME: Core data models for the BreadCrumb nutrition core
// ABOUTME: Defines Food, MealEntry, UserProfile, and related value types
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 BreadCrumb Contributors

//! # Data Models
//!
//! Value types shared by every component of the core. These carry no behavior
//! beyond derived fields; the stores own all lifecycle and persistence logic.
//!
//! Serde field names match the wire names the app has always persisted
//! (`meal_type`, `daily_calorie_goal`, ...), so existing blobs keep decoding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default daily calorie goal applied to new profiles
pub const DEFAULT_DAILY_CALORIE_GOAL: u32 = 2000;

/// A food record in the catalog
///
/// Identity is the string `id`, unique within the catalog. The favorite flag
/// is derived state: it is excluded from the catalog snapshot and reapplied
/// from the separately persisted favorite-id list on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    /// Unique catalog id, assigned as max-existing-numeric-id + 1
    pub id: String,
    /// Display name
    pub name: String,
    /// Cuisine tag, exact-match filterable
    pub cuisine: String,
    /// Calories per single serving
    pub calories: u32,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Optional image reference
    #[serde(default)]
    pub image: Option<String>,
    /// Optional free-text description; empty text is stored as absent
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the user marked this food as a favorite (derived, not persisted
    /// in the catalog snapshot)
    #[serde(skip)]
    pub is_favorite: bool,
}

/// Meal category for a logged entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Anything in between
    Snack,
}

impl MealType {
    /// All meal types in display order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        };
        f.write_str(name)
    }
}

/// A single logged instance of a food consumed at a point in time
///
/// The entry owns a deep copy of the food it was created from. This is
/// intentional history preservation: a later catalog edit must not
/// retroactively change logged totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    /// Generated unique id
    pub id: Uuid,
    /// Snapshot of the food at logging time
    pub food: Food,
    /// When the meal was logged
    pub date: DateTime<Utc>,
    /// Meal category
    pub meal_type: MealType,
    /// Serving multiplier, defaults to 1.0
    pub quantity: f64,
}

impl MealEntry {
    /// Create an entry for `food` with the current timestamp
    pub fn new(food: Food, meal_type: MealType, quantity: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            food,
            date: Utc::now(),
            meal_type,
            quantity,
        }
    }

    /// Total calories for this entry: `food.calories * quantity`, truncated
    #[allow(clippy::cast_possible_truncation)]
    pub fn total_calories(&self) -> i64 {
        (f64::from(self.food.calories) * self.quantity) as i64
    }
}

/// Self-reported activity level for calorie-goal estimation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Some weekly exercise
    #[default]
    Moderate,
    /// Frequent intense exercise
    Active,
}

impl ActivityLevel {
    /// Display title shown in the profile and onboarding screens
    pub const fn title(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::Moderate => "Moderately Active",
            Self::Active => "Very Active",
        }
    }
}

/// The active user's profile, one per session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Target daily calorie intake
    pub daily_calorie_goal: u32,
    /// Preferred cuisine tags; toggle logic keeps this duplicate-free
    pub favorite_cuisines: Vec<String>,
    /// Current weight in kilograms; 0 means unset
    pub weight: f64,
    /// Target weight in kilograms; 0 means unset
    pub goal_weight: f64,
    /// Self-reported activity level
    pub activity_level: ActivityLevel,
}

impl UserProfile {
    /// Create a profile with defaults applied
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            daily_calorie_goal: DEFAULT_DAILY_CALORIE_GOAL,
            favorite_cuisines: Vec::new(),
            weight: 0.0,
            goal_weight: 0.0,
            activity_level: ActivityLevel::default(),
        }
    }
}

/// Seed/snapshot record format for the food catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodData {
    /// All catalog foods
    pub foods: Vec<Food>,
    /// Known cuisine tags; when empty on load, tags are derived from `foods`
    pub cuisines: Vec<String>,
}

/// Process-wide authentication state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No session; guarded operations no-op
    #[default]
    Unauthenticated,
    /// Signed in through the remote credential flow
    AuthenticatedRemote,
    /// Local-only mode, bypassing remote authentication
    AuthenticatedLocal,
}

impl SessionState {
    /// Whether guarded operations are allowed in this state
    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::AuthenticatedRemote | Self::AuthenticatedLocal)
    }
}
