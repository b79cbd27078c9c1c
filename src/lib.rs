//! Kanflow - Main Library
//!
//! Kanflow is a Kanban board service: boards hold ordered lists, lists hold
//! ordered cards, and a drag-and-drop client keeps that ordering in step with
//! an authoritative server.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and backend
//!   - Boards, lists, cards and their API payloads
//!   - The order-key model (append, sort, renumber)
//!   - Validation and error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server over SQLite
//!   - Authentication, boards and membership, notifications
//!   - Transactional batch reorder endpoints
//!
//! - **`client`** - Board client
//!   - In-memory board store and container resolver
//!   - Drag reconciler and background persistence
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules and the `kanflow-server` binary
//!
//! # Usage
//!
//! ```rust,no_run
//! # #[cfg(feature = "ssr")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use kanflow::backend::{create_app, ServerConfig};
//!
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// Board client
pub mod client;
