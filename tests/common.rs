// ABOUTME: Shared test utilities for breadcrumb-core integration tests
// ABOUTME: Provides store fixtures, food builders, and a failing storage double
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 BreadCrumb Contributors
#![allow(dead_code)]

//! Shared test utilities for `breadcrumb_core`

use std::sync::Arc;

use breadcrumb_core::errors::{AppError, AppResult};
use breadcrumb_core::models::Food;
use breadcrumb_core::storage::{KeyValueStore, MemoryStore};

/// Fresh in-memory backing store
pub fn memory_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

/// Food record with the given macros and no image/description
pub fn food(id: &str, name: &str, cuisine: &str, calories: u32, protein: f64) -> Food {
    Food {
        id: id.to_owned(),
        name: name.to_owned(),
        cuisine: cuisine.to_owned(),
        calories,
        protein,
        carbs: 20.0,
        fat: 10.0,
        image: None,
        description: None,
        is_favorite: false,
    }
}

/// Storage double whose reads work but whose writes always fail
///
/// Exercises the soft-failure contract: in-memory state stays authoritative
/// and a message is surfaced instead of an error propagating.
#[derive(Default)]
pub struct FailingStore {
    inner: MemoryStore,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key before handing the store to a component
    pub fn seed(&self, key: &str, value: Vec<u8>) {
        self.inner
            .set(key, value)
            .expect("memory store writes cannot fail");
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: Vec<u8>) -> AppResult<()> {
        Err(AppError::storage("disk full"))
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}
