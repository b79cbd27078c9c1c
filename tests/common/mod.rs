//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - A temporary migrated SQLite database
//! - An in-process router and a spawned server
//! - Authentication test helpers
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;
pub mod server;

/// Install a test-writer subscriber once; `RUST_LOG` selects the output
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use database::*;
pub use server::*;
