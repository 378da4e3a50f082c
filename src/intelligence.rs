// ABOUTME: Recommendation engine ranking catalog foods against the user profile
// ABOUTME: Pure functions only; also hosts the onboarding calorie-goal estimate
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 BreadCrumb Contributors

//! # Recommendation Engine
//!
//! Pure ranking functions over `(UserProfile, &[Food])`. Two variants exist
//! and intentionally differ:
//!
//! - [`recommend_foods`] backs the catalog's food suggestions: weight-goal
//!   branch ordering followed by a favorites partition.
//! - [`dashboard_recommendations`] backs the dashboard widget: favorites act
//!   as a filter (with fallback), and the sort keys differ.
//!
//! The divergence is preserved as shipped, pending product clarification.
//! Neither function holds state; determinism holds for every branch except
//! the explicit shuffle fallback in [`recommend_foods`].

use rand::seq::SliceRandom;

use crate::models::{ActivityLevel, Food, UserProfile, DEFAULT_DAILY_CALORIE_GOAL};

/// Maximum number of recommendations either variant returns
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Rank `candidates` for the catalog's food suggestions
///
/// Ordering by weight goal:
///
/// 1. Losing weight (`weight > goal_weight`, both set): protein-to-calorie
///    ratio, descending. A zero-calorie entry ranks as ratio 0.
/// 2. Gaining weight (`weight < goal_weight`, both set): calories, descending.
/// 3. No weight goal: a fresh shuffle each call.
///
/// When the profile has favorite cuisines, the ordered result is partitioned
/// into favorite-cuisine entries followed by the rest, preserving relative
/// order within each group. At most [`MAX_RECOMMENDATIONS`] entries return.
pub fn recommend_foods(profile: &UserProfile, candidates: &[Food]) -> Vec<Food> {
    let mut recommended: Vec<Food> = candidates.to_vec();

    let has_weight_goal = profile.weight > 0.0 && profile.goal_weight > 0.0;
    if has_weight_goal && profile.weight > profile.goal_weight {
        recommended.sort_by(|a, b| protein_ratio(b).total_cmp(&protein_ratio(a)));
    } else if has_weight_goal && profile.weight < profile.goal_weight {
        recommended.sort_by(|a, b| b.calories.cmp(&a.calories));
    } else {
        recommended.shuffle(&mut rand::thread_rng());
    }

    if !profile.favorite_cuisines.is_empty() {
        let (favorites, others): (Vec<Food>, Vec<Food>) = recommended
            .into_iter()
            .partition(|f| profile.favorite_cuisines.contains(&f.cuisine));
        recommended = favorites;
        recommended.extend(others);
    }

    recommended.truncate(MAX_RECOMMENDATIONS);
    recommended
}

/// Rank `candidates` for the dashboard's personalized recommendations
///
/// This variant deliberately differs from [`recommend_foods`]: favorite
/// cuisines filter the pool (falling back to all candidates when nothing
/// matches), the losing branch prefers *low* calories, the gaining branch
/// prefers high protein, and the neutral branch uses id order. The weight
/// comparison here does not require both weights to be set; that matches the
/// shipped dashboard behavior.
pub fn dashboard_recommendations(profile: &UserProfile, candidates: &[Food]) -> Vec<Food> {
    let mut pool: Vec<Food> = if profile.favorite_cuisines.is_empty() {
        candidates.to_vec()
    } else {
        let matching: Vec<Food> = candidates
            .iter()
            .filter(|f| profile.favorite_cuisines.contains(&f.cuisine))
            .cloned()
            .collect();
        if matching.is_empty() {
            candidates.to_vec()
        } else {
            matching
        }
    };

    if profile.weight > profile.goal_weight {
        pool.sort_by(|a, b| a.calories.cmp(&b.calories));
    } else if profile.weight < profile.goal_weight {
        pool.sort_by(|a, b| b.protein.total_cmp(&a.protein));
    } else {
        pool.sort_by(|a, b| a.id.cmp(&b.id));
    }

    pool.truncate(MAX_RECOMMENDATIONS);
    pool
}

/// Suggested daily calorie goal from onboarding inputs
///
/// Basal rate approximated as `weight * 24`, scaled by activity level, then
/// shifted 500 kcal toward the weight goal and rounded to the nearest 50.
/// An unset weight yields the default goal.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn suggested_calorie_goal(weight: f64, goal_weight: f64, level: ActivityLevel) -> u32 {
    if weight <= 0.0 {
        return DEFAULT_DAILY_CALORIE_GOAL;
    }

    let multiplier = match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Moderate => 1.5,
        ActivityLevel::Active => 1.8,
    };
    let mut base = weight * 24.0 * multiplier;

    if goal_weight > 0.0 {
        if goal_weight < weight {
            base -= 500.0;
        } else if goal_weight > weight {
            base += 500.0;
        }
    }

    ((base / 50.0).round() * 50.0).max(0.0) as u32
}

fn protein_ratio(food: &Food) -> f64 {
    if food.calories == 0 {
        0.0
    } else {
        food.protein / f64::from(food.calories)
    }
}
