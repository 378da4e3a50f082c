// ABOUTME: Unified error handling for the BreadCrumb nutrition core
// ABOUTME: Defines error codes, the AppError type, and convenience constructors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 BreadCrumb Contributors

//! # Unified Error Handling
//!
//! Centralized error types used across the core. The stores deliberately keep
//! most failures out of their return types (skipped operation plus a surfaced
//! message); `AppError` covers the paths where a caller can meaningfully
//! react, chiefly storage and serialization.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Operation requires an authenticated or local session
    #[serde(rename = "AUTH_REQUIRED")]
    AuthRequired,
    /// Stored session token exists but its expiry has passed
    #[serde(rename = "SESSION_EXPIRED")]
    SessionExpired,
    /// Operation needs an active user profile and none is loaded
    #[serde(rename = "PROFILE_MISSING")]
    ProfileMissing,
    /// Caller-provided value is invalid
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Referenced record does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// Key-value store read/write failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError,
    /// Persisted blob failed to encode or decode
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    pub const fn description(self) -> &'static str {
        match self {
            Self::AuthRequired => "You must be signed in to access this feature",
            Self::SessionExpired => "The stored session has expired",
            Self::ProfileMissing => "No active user profile",
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested record was not found",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the core
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Authentication required
    pub fn auth_required() -> Self {
        Self::new(ErrorCode::AuthRequired, "authentication required")
    }

    /// Session expired
    pub fn session_expired() -> Self {
        Self::new(ErrorCode::SessionExpired, "session expired")
    }

    /// No active user profile
    pub fn profile_missing() -> Self {
        Self::new(ErrorCode::ProfileMissing, "no user profile loaded")
    }

    /// Invalid caller input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Record not found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceNotFound, message)
    }

    /// Key-value store failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Encode/decode failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_description_and_message() {
        let error = AppError::storage("write to meal_entries failed");
        assert_eq!(
            error.to_string(),
            "Storage operation failed: write to meal_entries failed"
        );
    }

    #[test]
    fn source_is_preserved() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = AppError::serialization("bad blob").with_source(json_err);
        assert!(std::error::Error::source(&error).is_some());
    }
}
