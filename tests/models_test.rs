// ABOUTME: Integration tests for the core data models
// ABOUTME: Covers serde wire names, round-trips, and derived fields
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 BreadCrumb Contributors

mod common;

use anyhow::Result;
use breadcrumb_core::models::{ActivityLevel, MealEntry, MealType, UserProfile};
use serde_json::json;

use common::food;

#[test]
fn user_profile_round_trips_through_json() -> Result<()> {
    let mut profile = UserProfile::new("Ana");
    profile.daily_calorie_goal = 1850;
    profile.favorite_cuisines = vec!["Indian".to_owned(), "Thai".to_owned()];
    profile.weight = 72.5;
    profile.goal_weight = 68.0;
    profile.activity_level = ActivityLevel::Active;

    let encoded = serde_json::to_string(&profile)?;
    let decoded: UserProfile = serde_json::from_str(&encoded)?;
    assert_eq!(decoded, profile);
    Ok(())
}

#[test]
fn user_profile_uses_the_persisted_wire_names() -> Result<()> {
    let profile = UserProfile::new("Ana");
    let value = serde_json::to_value(&profile)?;

    assert!(value.get("daily_calorie_goal").is_some());
    assert!(value.get("favorite_cuisines").is_some());
    assert!(value.get("goal_weight").is_some());
    assert_eq!(value.get("activity_level"), Some(&json!("moderate")));
    Ok(())
}

#[test]
fn meal_type_serializes_with_display_names() -> Result<()> {
    assert_eq!(serde_json::to_value(MealType::Breakfast)?, json!("Breakfast"));
    assert_eq!(serde_json::to_value(MealType::Snack)?, json!("Snack"));
    let decoded: MealType = serde_json::from_value(json!("Dinner"))?;
    assert_eq!(decoded, MealType::Dinner);
    Ok(())
}

#[test]
fn meal_entry_round_trips_and_renames_meal_type() -> Result<()> {
    let entry = MealEntry::new(food("1", "Tacos", "Mexican", 320, 15.0), MealType::Lunch, 2.0);

    let value = serde_json::to_value(&entry)?;
    assert!(value.get("meal_type").is_some());

    let decoded: MealEntry = serde_json::from_value(value)?;
    assert_eq!(decoded, entry);
    Ok(())
}

#[test]
fn favorite_flag_is_excluded_from_the_food_wire_format() -> Result<()> {
    let mut favorite = food("1", "Tacos", "Mexican", 320, 15.0);
    favorite.is_favorite = true;

    let value = serde_json::to_value(&favorite)?;
    assert!(value.get("is_favorite").is_none());

    // Decoding always yields an unset flag; the catalog reapplies it.
    let decoded: breadcrumb_core::models::Food = serde_json::from_value(value)?;
    assert!(!decoded.is_favorite);
    Ok(())
}

#[test]
fn total_calories_truncates_fractional_results() {
    let entry = MealEntry::new(food("1", "Soup", "Japanese", 165, 6.0), MealType::Snack, 0.5);
    // 165 * 0.5 = 82.5, truncated like the shipped app's Int conversion.
    assert_eq!(entry.total_calories(), 82);
}

#[test]
fn meal_type_display_and_all_order() {
    assert_eq!(MealType::Breakfast.to_string(), "Breakfast");
    assert_eq!(
        MealType::ALL,
        [MealType::Breakfast, MealType::Lunch, MealType::Dinner, MealType::Snack]
    );
}

#[test]
fn activity_level_titles() {
    assert_eq!(ActivityLevel::Sedentary.title(), "Sedentary");
    assert_eq!(ActivityLevel::Moderate.title(), "Moderately Active");
    assert_eq!(ActivityLevel::Active.title(), "Very Active");
}
