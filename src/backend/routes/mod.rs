//! Routes Module
//!
//! This module configures all HTTP routes of the backend.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports and documentation
//! ├── router.rs      - Main router: layers, health check, state
//! └── api_routes.rs  - Public and protected `/api` routes
//! ```
//!
//! # Route Overview
//!
//! ## Public
//! - `GET /api/health`
//! - `POST /api/auth/register`, `POST /api/auth/login`
//!
//! ## Protected (bearer token required)
//! - `GET /api/auth/me`
//! - `/api/boards`, `/api/lists`, `/api/cards`, `/api/notifications`

/// Main router configuration
pub mod router;

/// API route configuration
pub mod api_routes;

pub use router::create_router;
