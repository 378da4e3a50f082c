// ABOUTME: Change-notification bus for store mutations
// ABOUTME: Explicit subscribe/publish replacing ambient observable properties
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 BreadCrumb Contributors

//! # Events
//!
//! The presentation layer observes the core through an explicit bus instead
//! of ambient published properties. Subscribers receive every event published
//! after they subscribe; a dropped receiver is pruned on the next publish.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Mutex, PoisonError};

use crate::models::SessionState;

/// A change notification emitted after a successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Food catalog contents or cuisine tags changed
    CatalogChanged,
    /// Meal log entries changed
    MealsChanged,
    /// The active user profile changed
    ProfileChanged,
    /// The session moved to a new state
    SessionChanged(SessionState),
    /// A user-visible error message was surfaced
    ErrorSurfaced(String),
}

/// Fan-out bus delivering [`AppEvent`]s to every live subscriber
#[derive(Default)]
pub struct EventBus {
    subscribers: Mutex<Vec<Sender<AppEvent>>>,
}

impl EventBus {
    /// Create a bus with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber; events publish from this point on
    pub fn subscribe(&self) -> Receiver<AppEvent> {
        let (tx, rx) = channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }

    /// Deliver `event` to every live subscriber, pruning dropped receivers
    pub fn publish(&self, event: &AppEvent) {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|tx| tx.send(event.clone()).is_ok());
    }
}
