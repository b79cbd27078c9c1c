//! Board Session
//!
//! Owns everything one open board needs: the [`BoardStore`], the drag
//! [`Reconciler`] and a [`Dispatcher`]. Drops mutate the store at once and
//! their calls run in the background. A call the server rejects leaves the
//! store in its optimistic state; the collections it touched are recorded
//! as unreconciled until [`BoardSession::reconcile`] refetches them.

use std::collections::BTreeSet;
use std::mem;
use std::sync::Arc;

use futures_util::future::join_all;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

use crate::client::api::{BoardApi, ClientError};
use crate::client::dispatch::{DispatchFailure, DispatchReport, Dispatcher};
use crate::client::reconciler::{Collection, DropOutcome, Reconciler};
use crate::client::store::BoardStore;

pub struct BoardSession<A> {
    store: BoardStore,
    reconciler: Reconciler,
    dispatcher: Dispatcher<A>,
    failures: UnboundedReceiver<DispatchFailure>,
    in_flight: Vec<JoinHandle<DispatchReport>>,
    unreconciled: BTreeSet<Collection>,
}

impl<A: BoardApi + 'static> BoardSession<A> {
    /// Fetch a board's lists and the active cards of every list
    pub async fn load(api: Arc<A>, board_id: Uuid) -> Result<Self, ClientError> {
        let (dispatcher, failures) = Dispatcher::new(api);
        let mut session = Self {
            store: BoardStore::new(board_id),
            reconciler: Reconciler::new(),
            dispatcher,
            failures,
            in_flight: Vec::new(),
            unreconciled: BTreeSet::new(),
        };
        session.refresh_lists().await?;
        info!(
            %board_id,
            lists = session.store.lists().len(),
            "Board loaded"
        );
        Ok(session)
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    /// Direct store access for entities created outside a drag
    pub fn store_mut(&mut self) -> &mut BoardStore {
        &mut self.store
    }

    pub fn drag_start(&mut self, active: &str) {
        self.reconciler.drag_start(active);
    }

    pub fn drag_cancel(&mut self) {
        self.reconciler.drag_cancel();
    }

    /// Finish a drag, updating the store and dispatching its calls
    ///
    /// Returns as soon as the store is updated; the calls run on their own
    /// task.
    pub fn drag_end(&mut self, over: Option<&str>) -> DropOutcome {
        let outcome = self.reconciler.drag_end(over, &mut self.store);
        if outcome.is_mutation() {
            // Finished drops have already reported failures on the channel
            self.in_flight.retain(|handle| !handle.is_finished());
            let handle = self.dispatcher.dispatch(outcome.calls().to_vec());
            self.in_flight.push(handle);
        }
        outcome
    }

    /// Wait for every dispatched drop to finish
    ///
    /// Reports cover the drops still tracked; a drop that finished before a
    /// later `drag_end` is no longer tracked.
    pub async fn settle(&mut self) -> Vec<DispatchReport> {
        let mut reports = Vec::new();
        for handle in mem::take(&mut self.in_flight) {
            match handle.await {
                Ok(report) => reports.push(report),
                Err(e) => warn!(error = %e, "Dispatch task failed"),
            }
        }
        self.collect_failures();
        reports
    }

    /// Collections whose server state may differ from the store
    pub fn unreconciled(&mut self) -> Vec<Collection> {
        self.collect_failures();
        self.unreconciled.iter().copied().collect()
    }

    /// Replace every unreconciled collection with server state
    ///
    /// Waits for in-flight calls first. A collection that cannot be fetched
    /// stays unreconciled; the first such error is returned after the others
    /// have been tried. Returns the number of collections refetched.
    pub async fn reconcile(&mut self) -> Result<usize, ClientError> {
        self.settle().await;

        let mut refetched = 0;
        let mut first_error = None;
        for collection in mem::take(&mut self.unreconciled) {
            let result = match collection {
                Collection::Cards(list_id) => self.refresh_cards(list_id).await,
                Collection::Lists(_) => self.refresh_lists().await,
            };
            match result {
                Ok(()) => refetched += 1,
                Err(e) => {
                    warn!(?collection, error = %e, "Refetch failed");
                    self.unreconciled.insert(collection);
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => {
                info!(refetched, "Board reconciled");
                Ok(refetched)
            }
        }
    }

    fn collect_failures(&mut self) {
        while let Ok(failure) = self.failures.try_recv() {
            self.unreconciled.extend(failure.call.collections());
        }
    }

    async fn refresh_lists(&mut self) -> Result<(), ClientError> {
        let api = Arc::clone(self.dispatcher.api());
        let lists = api.get_lists(self.store.board_id()).await?;
        self.store.set_lists(lists);

        let list_ids: Vec<Uuid> = self.store.lists().iter().map(|list| list.id).collect();
        let results = join_all(list_ids.iter().map(|id| api.get_cards(*id))).await;
        for (list_id, cards) in list_ids.into_iter().zip(results) {
            self.store.set_cards(list_id, cards?);
        }
        Ok(())
    }

    async fn refresh_cards(&mut self, list_id: Uuid) -> Result<(), ClientError> {
        let api = Arc::clone(self.dispatcher.api());
        let cards = api.get_cards(list_id).await?;
        self.store.set_cards(list_id, cards);
        Ok(())
    }
}
