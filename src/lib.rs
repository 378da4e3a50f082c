// ABOUTME: Main library entry point for the BreadCrumb nutrition core
// ABOUTME: Exposes the food catalog, meal log, session manager, and recommendation engine
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 BreadCrumb Contributors

#![deny(unsafe_code)]

//! # BreadCrumb Core
//!
//! The non-UI core of the BreadCrumb calorie tracker: a local food catalog,
//! a meal log with daily aggregates, a profile/session manager, and a small
//! recommendation engine. The presentation layer consumes these components
//! through their public operations and renders their outputs; nothing in this
//! crate knows about screens or navigation.
//!
//! ## Architecture
//!
//! - **Models**: Value types shared by every component (`Food`, `MealEntry`,
//!   `UserProfile`, ...)
//! - **Storage**: The `KeyValueStore` capability all persistence goes through
//! - **Catalog**: Food records and cuisine tags, seeded from a bundled resource
//! - **Meal log**: Logged entries and "today" aggregates
//! - **Session**: Authentication states, local-only mode, and the active profile
//! - **Intelligence**: Pure ranking functions over the catalog
//! - **App**: The controller that owns the stores and applies the session gate
//!
//! ## Failure philosophy
//!
//! Nothing in this crate is fatal. Seed-load failures fall back to a minimal
//! catalog, decode failures leave empty state plus a user-visible message, and
//! storage write failures never invalidate in-memory state.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use breadcrumb_core::app::App;
//! use breadcrumb_core::models::MealType;
//! use breadcrumb_core::storage::MemoryStore;
//!
//! let mut app = App::new(Arc::new(MemoryStore::new()));
//! app.use_local_storage_only();
//!
//! let food = app.catalog().foods()[0].clone();
//! app.add_meal_entry(food, MealType::Lunch, 1.0);
//! assert!(app.calories_consumed_today() > 0);
//! ```

/// Application controller owning the stores and the session gate
pub mod app;

/// Food catalog store: seed loading, CRUD, favorites, cuisine tags
pub mod catalog;

/// Unified error handling (`AppError`, `AppResult`)
pub mod errors;

/// Change-notification bus replacing ambient observable properties
pub mod events;

/// Recommendation engine and calorie-goal estimation
pub mod intelligence;

/// Structured logging initialization
pub mod logging;

/// Meal log store: entries and daily aggregates
pub mod meal_log;

/// Core data models
pub mod models;

/// Profile and session management
pub mod session;

/// Key-value storage capability and in-memory backend
pub mod storage;

pub use app::App;
pub use errors::{AppError, AppResult};
pub use models::{ActivityLevel, Food, FoodData, MealEntry, MealType, SessionState, UserProfile};
