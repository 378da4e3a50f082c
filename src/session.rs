// ABOUTME: Profile and session manager with auth states and local-only mode
// ABOUTME: Handles session restore, sign-in/out, and guarded profile mutations
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 BreadCrumb Contributors

//! # Profile & Session Manager
//!
//! Owns the single active [`UserProfile`] and the process-wide
//! [`SessionState`]. Three states exist: unauthenticated, authenticated
//! through the remote credential flow, and local-only mode which bypasses
//! remote authentication entirely.
//!
//! Session restore on construction is fail-closed: a stored token with a
//! future expiry and a decodable profile restores the remote session;
//! anything else purges every cached auth artifact.
//!
//! Mutations are guarded. Outside an authenticated or local session they
//! no-op and surface a "must be signed in" message rather than failing the
//! caller.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::{SessionState, UserProfile};
use crate::storage::{self, keys, KeyValueStore};

/// How long a remote session stays valid
pub const SESSION_TTL_DAYS: i64 = 7;

/// Message surfaced when a guarded operation runs without a session
const SIGNED_IN_REQUIRED: &str = "You must be signed in to access this feature";

/// Manager owning the active profile and session state
pub struct SessionManager {
    state: SessionState,
    profile: Option<UserProfile>,
    auth_token: Option<String>,
    store: Arc<dyn KeyValueStore>,
    last_error: Option<String>,
}

impl SessionManager {
    /// Create a manager backed by `store`, restoring any stored session
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let mut manager = Self {
            state: SessionState::Unauthenticated,
            profile: None,
            auth_token: None,
            store,
            last_error: None,
        };
        manager.restore_session();
        manager
    }

    /// Current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The active profile, if a session is loaded
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Most recent user-visible error message, if any
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether guarded operations may run, surfacing a message when not
    ///
    /// This is the authentication gate shared by every guarded operation.
    /// Local-only mode always passes.
    pub fn verify_authenticated(&mut self) -> bool {
        if self.state.is_authenticated() {
            return true;
        }
        self.last_error = Some(SIGNED_IN_REQUIRED.to_owned());
        false
    }

    /// Restore a stored session, fail-closed
    fn restore_session(&mut self) {
        // Local-only mode short-circuits remote validation entirely.
        if self.using_local_storage() {
            match storage::get_json::<UserProfile>(self.store.as_ref(), keys::LOCAL_USER_PROFILE) {
                Ok(Some(profile)) => {
                    debug!("restored local-only session");
                    self.profile = Some(profile);
                    self.state = SessionState::AuthenticatedLocal;
                    return;
                }
                Ok(None) | Err(_) => {
                    warn!("local-mode flag set but profile unreadable, clearing local mode");
                    self.store.remove(keys::USING_LOCAL_STORAGE);
                    self.store.remove(keys::LOCAL_USER_PROFILE);
                }
            }
        }

        let token = storage::get_json::<String>(self.store.as_ref(), keys::AUTH_TOKEN)
            .ok()
            .flatten();
        let expiry = storage::get_json::<DateTime<Utc>>(self.store.as_ref(), keys::SESSION_EXPIRY)
            .ok()
            .flatten();

        let (Some(token), Some(expiry)) = (token, expiry) else {
            self.invalidate_session();
            return;
        };

        if Utc::now() > expiry {
            info!("stored session expired, purging auth artifacts");
            self.invalidate_session();
            return;
        }

        match storage::get_json::<UserProfile>(self.store.as_ref(), keys::USER_PROFILE) {
            Ok(Some(profile)) => {
                debug!("restored remote session");
                self.profile = Some(profile);
                self.auth_token = Some(token);
                self.state = SessionState::AuthenticatedRemote;
            }
            Ok(None) | Err(_) => {
                warn!("stored session token valid but profile unreadable, purging");
                self.invalidate_session();
            }
        }
    }

    /// Drop all session state and purge cached auth artifacts
    fn invalidate_session(&mut self) {
        self.state = SessionState::Unauthenticated;
        self.profile = None;
        self.auth_token = None;
        self.store.remove(keys::AUTH_TOKEN);
        self.store.remove(keys::SESSION_EXPIRY);
        self.store.remove(keys::USER_PROFILE);
    }

    /// Run the credential flow and establish a remote session
    ///
    /// The flow offers no cancel path once started; signing in is a product
    /// requirement, not an oversight. On success a session token is generated
    /// with an expiry [`SESSION_TTL_DAYS`] out, and token, expiry, and the
    /// new profile are persisted.
    pub fn sign_in(&mut self) {
        let token = Uuid::new_v4().to_string();
        let expiry = Utc::now() + Duration::days(SESSION_TTL_DAYS);
        let profile = UserProfile::new("Demo User");

        self.record_write(storage::set_json(self.store.as_ref(), keys::AUTH_TOKEN, &token));
        self.record_write(storage::set_json(
            self.store.as_ref(),
            keys::SESSION_EXPIRY,
            &expiry,
        ));
        self.record_write(storage::set_json(
            self.store.as_ref(),
            keys::USER_PROFILE,
            &profile,
        ));

        self.auth_token = Some(token);
        self.profile = Some(profile);
        self.state = SessionState::AuthenticatedRemote;
        info!("remote session established");
    }

    /// End the current session
    ///
    /// Local-only mode clears the local flag and profile; meal and food data
    /// is deliberately left in place unless `clear_data` opts in to erasing
    /// it. Remote sessions purge token, expiry, and cached profile.
    pub fn sign_out(&mut self, clear_data: bool) {
        if self.using_local_storage() {
            self.store.remove(keys::USING_LOCAL_STORAGE);
            self.store.remove(keys::LOCAL_USER_PROFILE);
            if clear_data {
                self.store.remove(keys::MEAL_ENTRIES);
                self.store.remove(keys::FAVORITE_FOODS);
            }
        }
        self.invalidate_session();
        info!("signed out");
    }

    /// Enter local-only mode with a default profile
    pub fn use_local_storage_only(&mut self) {
        self.complete_onboarding(UserProfile::new("Local User"));
    }

    /// Enter local-only mode with `profile` as the active profile
    ///
    /// Serves both onboarding paths: the quick setup (name, goal, cuisines)
    /// and the full setup that also carries weight and activity level. Any
    /// prior profile is replaced. Never contacts a remote identity provider.
    pub fn complete_onboarding(&mut self, profile: UserProfile) {
        self.record_write(storage::set_json(
            self.store.as_ref(),
            keys::LOCAL_USER_PROFILE,
            &profile,
        ));
        self.record_write(storage::set_json(
            self.store.as_ref(),
            keys::USING_LOCAL_STORAGE,
            &true,
        ));
        self.profile = Some(profile);
        self.state = SessionState::AuthenticatedLocal;
        info!("local-only session established");
    }

    /// Update the daily calorie goal on the active profile (guarded)
    pub fn update_calorie_goal(&mut self, goal: u32) {
        if !self.verify_authenticated() {
            return;
        }
        let Some(profile) = self.profile.as_mut() else {
            self.last_error = Some("No active user session".to_owned());
            return;
        };
        profile.daily_calorie_goal = goal;
        self.persist_profile();
    }

    /// Toggle `cuisine` in the active profile's favorites (guarded)
    ///
    /// Adds if absent, removes if present, so double-application restores the
    /// original list and no duplicates can accumulate.
    pub fn toggle_favorite_cuisine(&mut self, cuisine: &str) {
        if !self.verify_authenticated() {
            return;
        }
        let Some(profile) = self.profile.as_mut() else {
            self.last_error = Some("User profile not found".to_owned());
            return;
        };
        if let Some(index) = profile.favorite_cuisines.iter().position(|c| c == cuisine) {
            profile.favorite_cuisines.remove(index);
        } else {
            profile.favorite_cuisines.push(cuisine.to_owned());
        }
        self.persist_profile();
    }

    /// Persist the active profile under the key matching the session kind
    fn persist_profile(&mut self) {
        let Some(profile) = self.profile.clone() else {
            return;
        };
        let key = match self.state {
            SessionState::AuthenticatedLocal => keys::LOCAL_USER_PROFILE,
            _ => keys::USER_PROFILE,
        };
        self.record_write(storage::set_json(self.store.as_ref(), key, &profile));
    }

    fn using_local_storage(&self) -> bool {
        storage::get_json::<bool>(self.store.as_ref(), keys::USING_LOCAL_STORAGE)
            .ok()
            .flatten()
            .unwrap_or(false)
    }

    /// Write failures surface as a message; in-memory state stays authoritative
    fn record_write(&mut self, result: crate::errors::AppResult<()>) {
        if let Err(e) = result {
            warn!("session persistence failed: {e}");
            self.last_error = Some(format!("Failed to save session data: {e}"));
        }
    }
}
