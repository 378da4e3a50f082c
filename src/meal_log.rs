// ABOUTME: Meal log store owning logged entries and daily aggregates
// ABOUTME: Handles entry add/remove, today filters, and snapshot persistence
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 BreadCrumb Contributors

//! # Meal Log Store
//!
//! Owns the list of [`MealEntry`] records. Entries snapshot their food at
//! logging time, so later catalog edits never rewrite history. "Today" is the
//! local calendar day, bounded at local midnight.

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use tracing::{debug, error};

use crate::errors::AppResult;
use crate::models::{Food, MealEntry, MealType};
use crate::storage::{self, keys, KeyValueStore};

/// Store owning the meal log
pub struct MealLog {
    entries: Vec<MealEntry>,
    store: Arc<dyn KeyValueStore>,
    last_error: Option<String>,
}

impl MealLog {
    /// Create a log backed by `store`, loading any persisted entries
    ///
    /// Absent data yields an empty log. Malformed data also yields an empty
    /// log, with the decode failure surfaced through [`Self::last_error`].
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let mut log = Self {
            entries: Vec::new(),
            store,
            last_error: None,
        };
        log.load_entries();
        log
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[MealEntry] {
        &self.entries
    }

    /// Most recent persistence or decode error message, if any
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn load_entries(&mut self) {
        match storage::get_json::<Vec<MealEntry>>(self.store.as_ref(), keys::MEAL_ENTRIES) {
            Ok(Some(entries)) => {
                debug!(count = entries.len(), "loaded meal entries");
                self.entries = entries;
            }
            Ok(None) => self.entries = Vec::new(),
            Err(e) => {
                error!("meal entries unreadable: {e}");
                self.entries = Vec::new();
                self.last_error = Some(format!("Failed to decode meal entries: {e}"));
            }
        }
    }

    /// Log `food` with the current timestamp
    ///
    /// The entry owns a copy of the food. The append is observable
    /// immediately; persistence is best-effort afterwards.
    pub fn add_entry(&mut self, food: Food, meal_type: MealType, quantity: f64) {
        let entry = MealEntry::new(food, meal_type, quantity);
        self.entries.push(entry);
        self.persist();
    }

    /// Remove entries at the given positions in the full entry list
    ///
    /// Indices are absolute: callers holding a filtered view must translate
    /// back before calling. Out-of-range indices are ignored.
    pub fn remove_entries(&mut self, indices: &[usize]) {
        let mut ordered: Vec<usize> = indices.to_vec();
        ordered.sort_unstable();
        ordered.dedup();
        // Remove back to front so earlier removals don't shift later indices.
        for index in ordered.into_iter().rev() {
            if index < self.entries.len() {
                self.entries.remove(index);
            }
        }
        self.persist();
    }

    /// Sum of total calories over today's entries
    pub fn calories_consumed_today(&self) -> i64 {
        self.entries
            .iter()
            .filter(|e| is_today(e.date))
            .map(MealEntry::total_calories)
            .sum()
    }

    /// Today's entries, most recent first
    pub fn entries_for_today(&self) -> Vec<MealEntry> {
        let mut today: Vec<MealEntry> = self
            .entries
            .iter()
            .filter(|e| is_today(e.date))
            .cloned()
            .collect();
        today.sort_by(|a, b| b.date.cmp(&a.date));
        today
    }

    fn persist(&mut self) {
        self.record_write(storage::set_json(
            self.store.as_ref(),
            keys::MEAL_ENTRIES,
            &self.entries,
        ));
    }

    /// Write failures surface as a message; in-memory state stays authoritative
    fn record_write(&mut self, result: AppResult<()>) {
        match result {
            Ok(()) => self.last_error = None,
            Err(e) => {
                error!("meal log persistence failed: {e}");
                self.last_error = Some(format!("Failed to save meals: {e}"));
            }
        }
    }
}

/// Whether `date` falls on the current local calendar day
fn is_today(date: DateTime<Utc>) -> bool {
    date.with_timezone(&Local).date_naive() == Local::now().date_naive()
}
