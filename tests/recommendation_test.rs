// ABOUTME: Integration tests for both recommendation variants
// ABOUTME: Covers weight-goal branches, favorites handling, truncation, and goal math
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 BreadCrumb Contributors

mod common;

use breadcrumb_core::intelligence::{
    dashboard_recommendations, recommend_foods, suggested_calorie_goal, MAX_RECOMMENDATIONS,
};
use breadcrumb_core::models::{ActivityLevel, Food, UserProfile};

use common::food;

fn profile_with_weights(weight: f64, goal_weight: f64) -> UserProfile {
    let mut profile = UserProfile::new("Tester");
    profile.weight = weight;
    profile.goal_weight = goal_weight;
    profile
}

#[test]
fn losing_weight_ranks_by_protein_to_calorie_ratio() {
    let profile = profile_with_weights(80.0, 70.0);
    let candidates = vec![
        food("B", "B", "Thai", 200, 10.0),  // ratio 0.05
        food("A", "A", "Thai", 300, 30.0),  // ratio 0.10
    ];

    let ranked = recommend_foods(&profile, &candidates);
    assert_eq!(ranked[0].id, "A");
    assert_eq!(ranked[1].id, "B");
}

#[test]
fn zero_calorie_food_ranks_as_ratio_zero() {
    let profile = profile_with_weights(80.0, 70.0);
    let candidates = vec![
        food("zero", "Water", "Thai", 0, 50.0),
        food("real", "Salmon", "Japanese", 400, 34.0),
    ];

    let ranked = recommend_foods(&profile, &candidates);
    assert_eq!(ranked[0].id, "real");
    assert_eq!(ranked[1].id, "zero");
}

#[test]
fn gaining_weight_ranks_by_calories_descending() {
    let profile = profile_with_weights(60.0, 70.0);
    let candidates = vec![
        food("low", "A", "Thai", 200, 10.0),
        food("high", "B", "Thai", 600, 10.0),
        food("mid", "C", "Thai", 400, 10.0),
    ];

    let ranked = recommend_foods(&profile, &candidates);
    let ids: Vec<&str> = ranked.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, ["high", "mid", "low"]);
}

#[test]
fn favorites_partition_places_preferred_cuisines_first() {
    let mut profile = profile_with_weights(80.0, 70.0);
    profile.favorite_cuisines = vec!["Indian".to_owned()];
    let candidates = vec![
        // Highest ratio overall, but not a favorite cuisine.
        food("fish", "Salmon", "Japanese", 400, 40.0),
        food("dal", "Dal", "Indian", 300, 15.0),
        food("naan", "Naan", "Indian", 350, 9.0),
    ];

    let ranked = recommend_foods(&profile, &candidates);
    let ids: Vec<&str> = ranked.iter().map(|f| f.id.as_str()).collect();
    // Indian entries lead, keeping their ratio order; salmon trails despite
    // out-ranking both on ratio.
    assert_eq!(ids, ["dal", "naan", "fish"]);
}

#[test]
fn result_is_truncated_to_the_recommendation_limit() {
    let profile = profile_with_weights(60.0, 70.0);
    let candidates: Vec<Food> = (0..8)
        .map(|i| food(&i.to_string(), "F", "Thai", 100 + i, 5.0))
        .collect();

    let ranked = recommend_foods(&profile, &candidates);
    assert_eq!(ranked.len(), MAX_RECOMMENDATIONS);
}

#[test]
fn shuffle_branch_asserts_membership_only() {
    // No weight goal set: order is an explicit shuffle, so only set
    // properties hold.
    let profile = UserProfile::new("Tester");
    let candidates = vec![
        food("1", "A", "Thai", 100, 5.0),
        food("2", "B", "Indian", 200, 5.0),
        food("3", "C", "Mexican", 300, 5.0),
    ];

    let ranked = recommend_foods(&profile, &candidates);
    assert_eq!(ranked.len(), 3);
    for food in &ranked {
        assert!(candidates.iter().any(|c| c.id == food.id));
    }
}

#[test]
fn dashboard_losing_branch_prefers_low_calories() {
    let profile = profile_with_weights(80.0, 70.0);
    let candidates = vec![
        food("heavy", "A", "Thai", 600, 10.0),
        food("light", "B", "Thai", 150, 10.0),
    ];

    let ranked = dashboard_recommendations(&profile, &candidates);
    assert_eq!(ranked[0].id, "light");
}

#[test]
fn dashboard_gaining_branch_prefers_high_protein() {
    let profile = profile_with_weights(60.0, 70.0);
    let candidates = vec![
        food("low", "A", "Thai", 600, 8.0),
        food("high", "B", "Thai", 150, 35.0),
    ];

    let ranked = dashboard_recommendations(&profile, &candidates);
    assert_eq!(ranked[0].id, "high");
}

#[test]
fn dashboard_neutral_branch_uses_id_order() {
    let profile = UserProfile::new("Tester");
    let candidates = vec![
        food("3", "C", "Thai", 300, 5.0),
        food("1", "A", "Thai", 100, 5.0),
        food("2", "B", "Thai", 200, 5.0),
    ];

    let ranked = dashboard_recommendations(&profile, &candidates);
    let ids: Vec<&str> = ranked.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn dashboard_favorites_filter_with_fallback() {
    let mut profile = UserProfile::new("Tester");
    profile.favorite_cuisines = vec!["Indian".to_owned()];
    let candidates = vec![
        food("1", "A", "Indian", 300, 5.0),
        food("2", "B", "Thai", 100, 5.0),
    ];

    // Matching favorites filter the pool down.
    let ranked = dashboard_recommendations(&profile, &candidates);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].id, "1");

    // A favorite with no matches falls back to the full pool.
    profile.favorite_cuisines = vec!["Korean".to_owned()];
    let ranked = dashboard_recommendations(&profile, &candidates);
    assert_eq!(ranked.len(), 2);
}

#[test]
fn suggested_calorie_goal_matches_onboarding_formula() {
    // 80 * 24 * 1.2 = 2304, minus 500 for the loss goal, rounded to 1800.
    assert_eq!(suggested_calorie_goal(80.0, 70.0, ActivityLevel::Sedentary), 1800);
    // 60 * 24 * 1.5 = 2160, plus 500 for the gain goal, rounded to 2650.
    assert_eq!(suggested_calorie_goal(60.0, 70.0, ActivityLevel::Moderate), 2650);
    // 70 * 24 * 1.8 = 3024, no goal shift, rounded to 3000.
    assert_eq!(suggested_calorie_goal(70.0, 0.0, ActivityLevel::Active), 3000);
}

#[test]
fn suggested_calorie_goal_defaults_when_weight_unset() {
    assert_eq!(suggested_calorie_goal(0.0, 70.0, ActivityLevel::Moderate), 2000);
}
