//! Persistence Dispatcher
//!
//! Sends the calls produced by one drop without blocking the caller. Each
//! drop runs on its own tokio task; its calls go out in order and a failing
//! call does not stop the ones after it. Failures are logged and reported
//! on a channel so the owner can reconcile the affected collections later.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::client::api::{BoardApi, ClientError};
use crate::client::reconciler::{Collection, PersistCall};
use crate::shared::kanban::MoveCardRequest;

/// A call the server did not accept
#[derive(Debug)]
pub struct DispatchFailure {
    pub call: PersistCall,
    pub error: ClientError,
}

/// Summary of one dispatched drop
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    pub succeeded: usize,
    /// Collections touched by failed calls
    pub failed: Vec<Collection>,
}

impl DispatchReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Fire-and-forget sender of persistence calls
pub struct Dispatcher<A> {
    api: Arc<A>,
    failures: UnboundedSender<DispatchFailure>,
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            failures: self.failures.clone(),
        }
    }
}

impl<A: BoardApi + 'static> Dispatcher<A> {
    /// Create a dispatcher and the receiving end of its failure channel
    pub fn new(api: Arc<A>) -> (Self, UnboundedReceiver<DispatchFailure>) {
        let (failures, receiver) = mpsc::unbounded_channel();
        (Self { api, failures }, receiver)
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    /// Send `calls` on a background task
    pub fn dispatch(&self, calls: Vec<PersistCall>) -> JoinHandle<DispatchReport> {
        let api = Arc::clone(&self.api);
        let failures = self.failures.clone();
        tokio::spawn(async move { send_all(api.as_ref(), calls, &failures).await })
    }

    /// Send `calls` and wait for every response
    pub async fn execute(&self, calls: Vec<PersistCall>) -> DispatchReport {
        send_all(self.api.as_ref(), calls, &self.failures).await
    }
}

async fn send_all<A: BoardApi>(
    api: &A,
    calls: Vec<PersistCall>,
    failures: &UnboundedSender<DispatchFailure>,
) -> DispatchReport {
    let mut report = DispatchReport::default();
    for call in calls {
        match send(api, &call).await {
            Ok(()) => report.succeeded += 1,
            Err(error) => {
                let collections = call.collections();
                warn!(?collections, %error, "Persistence call failed");
                report.failed.extend(collections);
                if failures.send(DispatchFailure { call, error }).is_err() {
                    debug!("Failure receiver dropped");
                }
            }
        }
    }
    report
}

async fn send<A: BoardApi>(api: &A, call: &PersistCall) -> Result<(), ClientError> {
    match call {
        PersistCall::MoveCard {
            card_id,
            to_list,
            order,
            ..
        } => {
            let request = MoveCardRequest {
                list_id: *to_list,
                order: *order,
            };
            api.move_card(*card_id, request).await.map(|_| ())
        }
        PersistCall::ReorderCards { cards, .. } => {
            api.reorder_cards(cards.clone()).await.map(|_| ())
        }
        PersistCall::ReorderLists { lists, .. } => {
            api.reorder_lists(lists.clone()).await.map(|_| ())
        }
    }
}
