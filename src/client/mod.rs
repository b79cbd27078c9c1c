//! Board Client
//!
//! Everything a board view needs to keep drag-and-drop ordering in step
//! with the server.
//!
//! # Module Structure
//!
//! - **`config`** - Server URL and bearer token
//! - **`store`** - `BoardStore`: lists and per-list ordered cards
//! - **`resolver`** - Drag identifier to owning list
//! - **`reconciler`** - Drag state machine producing store updates and calls
//! - **`api`** - `BoardApi` persistence seam and its HTTP implementation
//! - **`dispatch`** - Background sending of persistence calls
//! - **`session`** - One open board: load, drag, reconcile
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use kanflow::client::{BoardSession, Config, HttpBoardApi};
//! use kanflow::client::resolver::{card_drag_id, list_drag_id};
//! # use uuid::Uuid;
//!
//! # async fn example(board_id: Uuid, card_id: Uuid, list_id: Uuid) -> Result<(), kanflow::client::ClientError> {
//! let mut api = HttpBoardApi::new(Config::new());
//! api.set_token("...");
//! let mut session = BoardSession::load(Arc::new(api), board_id).await?;
//!
//! session.drag_start(&card_drag_id(card_id));
//! session.drag_end(Some(&list_drag_id(list_id)));
//!
//! session.reconcile().await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod dispatch;
pub mod reconciler;
pub mod resolver;
pub mod session;
pub mod store;

#[cfg(test)]
pub(crate) mod fake_api;

pub use api::{BoardApi, ClientError, HttpBoardApi};
pub use config::Config;
pub use dispatch::{DispatchFailure, DispatchReport, Dispatcher};
pub use reconciler::{AbortReason, Collection, DragPhase, DropOutcome, PersistCall, Reconciler};
pub use session::BoardSession;
pub use store::{BoardStore, CrossMove};
