//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the board client and the backend. These types are used for serialization
//! over the REST API and for the ordering logic both sides must agree on.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code:
//!
//! - **`kanban`** - Boards, lists, cards, notifications and their API payloads
//! - **`position`** - The order-key model for ordered collections
//! - **`validation`** - Title and email checks
//! - **`error`** - Errors detectable on both sides
//! - **`config`** - Client application configuration

/// Kanban entities and request/response payloads
pub mod kanban;

/// Position model for ordered collections
pub mod position;

/// Input validation helpers
pub mod validation;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
pub use kanban::{Board, BoardRole, Card, List, Notification, OrderUpdate};
pub use position::Ordered;
