//! Reorder Reconciler
//!
//! Turns a finished drag gesture into an optimistic [`BoardStore`] mutation
//! plus the persistence calls that bring the server to the same state.
//!
//! A gesture is a small state machine: `Idle → Dragging(active) → Idle`.
//! [`Reconciler::drag_start`] only records the active identifier;
//! [`Reconciler::drag_end`] resolves both ends, mutates the store and
//! returns a [`DropOutcome`]. The reconciler never talks to the network
//! itself; the outcome's calls are handed to the dispatcher.
//!
//! # Card drops
//!
//! - Same list, same index: no-op.
//! - Same list, new index: array-move, renumber `1..=N`, one card batch.
//! - Other list: the card is inserted at the target index (appended when
//!   dropped on the container itself) and its `list_id` rewritten. One
//!   move call for the card, one batch for the full destination, and a
//!   batch for the source when the removal left a gap in a non-empty list.
//!
//! # List drops
//!
//! Dragging a list container onto another list, or onto any card of another
//! list, reorders the lists of the board and emits one list batch.

use std::mem;

use tracing::debug;
use uuid::Uuid;

use crate::client::resolver::{resolve, Resolved};
use crate::client::store::BoardStore;
use crate::shared::kanban::OrderUpdate;

/// Drag gesture state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging { active: String },
}

/// A collection whose server-side order a call writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    /// Cards of one list
    Cards(Uuid),
    /// Lists of one board
    Lists(Uuid),
}

/// One call to the persistence API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistCall {
    /// `PUT /api/cards/{id}`
    MoveCard {
        card_id: Uuid,
        from_list: Uuid,
        to_list: Uuid,
        order: i64,
    },
    /// `PATCH /api/cards/reorder`
    ReorderCards {
        list_id: Uuid,
        cards: Vec<OrderUpdate>,
    },
    /// `PATCH /api/lists/reorder`
    ReorderLists {
        board_id: Uuid,
        lists: Vec<OrderUpdate>,
    },
}

impl PersistCall {
    /// Collections left out of sync if this call fails
    pub fn collections(&self) -> Vec<Collection> {
        match self {
            PersistCall::MoveCard {
                from_list, to_list, ..
            } => vec![Collection::Cards(*from_list), Collection::Cards(*to_list)],
            PersistCall::ReorderCards { list_id, .. } => vec![Collection::Cards(*list_id)],
            PersistCall::ReorderLists { board_id, .. } => vec![Collection::Lists(*board_id)],
        }
    }
}

/// Why a drop was discarded without touching the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// `drag_end` without a preceding `drag_start`
    NotDragging,
    /// Released outside any droppable
    NoDropTarget,
    /// The dragged identifier matches nothing on the board
    UnresolvedSource,
    /// The drop target matches nothing on the board
    UnresolvedDestination,
}

/// Result of a finished drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Aborted(AbortReason),
    NoOp,
    /// A card moved inside its list
    Reordered(Vec<PersistCall>),
    /// A card moved to another list
    Moved(Vec<PersistCall>),
    /// The board's lists were reordered
    ListsReordered(Vec<PersistCall>),
}

impl DropOutcome {
    pub fn calls(&self) -> &[PersistCall] {
        match self {
            DropOutcome::Reordered(calls)
            | DropOutcome::Moved(calls)
            | DropOutcome::ListsReordered(calls) => calls,
            DropOutcome::Aborted(_) | DropOutcome::NoOp => &[],
        }
    }

    pub fn into_calls(self) -> Vec<PersistCall> {
        match self {
            DropOutcome::Reordered(calls)
            | DropOutcome::Moved(calls)
            | DropOutcome::ListsReordered(calls) => calls,
            DropOutcome::Aborted(_) | DropOutcome::NoOp => Vec::new(),
        }
    }

    /// Whether the store was changed
    pub fn is_mutation(&self) -> bool {
        !self.calls().is_empty()
    }
}

/// Drag-and-drop state machine for one board view
#[derive(Debug, Default)]
pub struct Reconciler {
    phase: DragPhase,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Record the dragged identifier
    ///
    /// A second start replaces the first.
    pub fn drag_start(&mut self, active: &str) {
        debug!(active, "Drag started");
        self.phase = DragPhase::Dragging {
            active: active.to_string(),
        };
    }

    /// Abandon the current gesture
    pub fn drag_cancel(&mut self) {
        self.phase = DragPhase::Idle;
    }

    /// Finish the gesture over `over` (`None` when released outside any
    /// droppable)
    ///
    /// The reconciler is back to `Idle` afterwards whatever the outcome.
    pub fn drag_end(&mut self, over: Option<&str>, store: &mut BoardStore) -> DropOutcome {
        let outcome = match mem::take(&mut self.phase) {
            DragPhase::Idle => DropOutcome::Aborted(AbortReason::NotDragging),
            DragPhase::Dragging { active } => drop_on(&active, over, store),
        };
        debug!(?outcome, "Drag finished");
        outcome
    }
}

fn drop_on(active: &str, over: Option<&str>, store: &mut BoardStore) -> DropOutcome {
    let Some(over) = over else {
        return DropOutcome::Aborted(AbortReason::NoDropTarget);
    };
    let Some(source) = resolve(active, store) else {
        return DropOutcome::Aborted(AbortReason::UnresolvedSource);
    };
    let Some(target) = resolve(over, store) else {
        return DropOutcome::Aborted(AbortReason::UnresolvedDestination);
    };

    let outcome = match source {
        Resolved::List { list_id } => drop_list(list_id, target, store),
        Resolved::Card {
            card_id,
            list_id,
            index,
        } => drop_card(card_id, list_id, index, target, store),
    };
    outcome.unwrap_or(DropOutcome::Aborted(AbortReason::UnresolvedDestination))
}

fn drop_list(list_id: Uuid, target: Resolved, store: &mut BoardStore) -> Option<DropOutcome> {
    let from = store.list_index(list_id)?;
    let to = store.list_index(target.list_id())?;
    if from == to {
        return Some(DropOutcome::NoOp);
    }

    let lists = store.move_list(from, to)?;
    Some(DropOutcome::ListsReordered(vec![PersistCall::ReorderLists {
        board_id: store.board_id(),
        lists,
    }]))
}

fn drop_card(
    card_id: Uuid,
    from_list: Uuid,
    from_index: usize,
    target: Resolved,
    store: &mut BoardStore,
) -> Option<DropOutcome> {
    let to_list = target.list_id();

    if from_list == to_list {
        let to_index = match target {
            Resolved::Card { index, .. } => index,
            // Dropping on the own container moves the card to the end.
            Resolved::List { .. } => store.cards(to_list).len().saturating_sub(1),
        };
        if to_index == from_index {
            return Some(DropOutcome::NoOp);
        }
        let cards = store.reorder_within(from_list, from_index, to_index)?;
        return Some(DropOutcome::Reordered(vec![PersistCall::ReorderCards {
            list_id: from_list,
            cards,
        }]));
    }

    let to_index = match target {
        Resolved::Card { index, .. } => index,
        Resolved::List { .. } => store.cards(to_list).len(),
    };
    let moved = store.move_across(card_id, from_list, to_list, to_index)?;

    let mut calls = vec![
        PersistCall::MoveCard {
            card_id,
            from_list,
            to_list,
            order: moved.moved_order,
        },
        PersistCall::ReorderCards {
            list_id: to_list,
            cards: moved.destination,
        },
    ];
    if let Some(cards) = moved.source {
        calls.push(PersistCall::ReorderCards {
            list_id: from_list,
            cards,
        });
    }
    Some(DropOutcome::Moved(calls))
}
