// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Initializes tracing-subscriber with env-filter support
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 BreadCrumb Contributors

//! Structured logging setup for hosts embedding the core

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// The filter comes from `RUST_LOG` when set, defaulting to `info`. Safe to
/// call more than once; later calls are no-ops so embedding hosts and tests
/// can both initialize freely.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
