// ABOUTME: Key-value storage capability consumed by all stores
// ABOUTME: Defines the KeyValueStore trait, storage keys, and the in-memory backend
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 BreadCrumb Contributors

//! # Key-Value Storage
//!
//! Every persisted blob in the core goes through the [`KeyValueStore`]
//! capability: atomic whole-value get/set/remove on opaque bytes. The core
//! never performs partial updates to a persisted blob; it always reads or
//! writes a full snapshot.
//!
//! Writes are best-effort. A failed `set` surfaces as a store-level error
//! message on the owning component; in-memory state stays authoritative for
//! the process lifetime regardless.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{AppError, AppResult};

/// Storage keys used by the core
///
/// These names predate this crate; existing installs have blobs under them,
/// so the namespace must be preserved.
pub mod keys {
    /// Serialized `Vec<MealEntry>`
    pub const MEAL_ENTRIES: &str = "meal_entries";
    /// Serialized `Vec<String>` of favorite food ids
    pub const FAVORITE_FOODS: &str = "favorite_foods";
    /// Serialized `FoodData` catalog snapshot
    pub const FOOD_CATALOG: &str = "food_catalog";
    /// Serialized `UserProfile` for a remote session
    pub const USER_PROFILE: &str = "user_profile";
    /// Serialized `UserProfile` for local-only mode
    pub const LOCAL_USER_PROFILE: &str = "local_user_profile";
    /// Boolean flag: local-only mode bypasses authentication
    pub const USING_LOCAL_STORAGE: &str = "using_local_storage";
    /// Session token for a remote session
    pub const AUTH_TOKEN: &str = "auth_token";
    /// Session expiry timestamp
    pub const SESSION_EXPIRY: &str = "session_expiry";
}

/// Capability contract for opaque key-value blob storage
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under `key`, if any
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Store `value` under `key`, replacing any prior blob
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage rejects the write. Callers
    /// treat this as non-fatal and keep their in-memory state.
    fn set(&self, key: &str, value: Vec<u8>) -> AppResult<()>;

    /// Remove the blob stored under `key`, if any
    fn remove(&self, key: &str);
}

/// Decode the JSON blob under `key` into `T`
///
/// Absent data is `Ok(None)`, not an error.
///
/// # Errors
///
/// Returns a serialization error if a blob exists but fails to decode.
pub fn get_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> AppResult<Option<T>> {
    match store.get(key) {
        Some(bytes) => serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| AppError::serialization(format!("failed to decode '{key}'")).with_source(e)),
        None => Ok(None),
    }
}

/// Encode `value` as JSON and store it under `key`
///
/// # Errors
///
/// Returns a serialization error if encoding fails, or a storage error if the
/// write is rejected.
pub fn set_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> AppResult<()> {
    let bytes = serde_json::to_vec(value)
        .map_err(|e| AppError::serialization(format!("failed to encode '{key}'")).with_source(e))?;
    store.set(key, bytes)
}

/// In-memory key-value store
///
/// Default backend for tests and previews. Uses `std::sync::RwLock` since all
/// store operations are synchronous; lock poisoning is ignored because the
/// map stays structurally valid even if a writer panicked.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a blob exists under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: Vec<u8>) -> AppResult<()> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}
