//! Board Store
//!
//! The client's in-memory view of one board: its lists in display order and,
//! per list, the active cards in display order. The store is the single
//! owner of that state; every mutation goes through a method here and
//! returns the `{id, order}` payload the server needs to converge.

use std::collections::HashMap;

use uuid::Uuid;

use crate::shared::kanban::{Card, List, OrderUpdate};
use crate::shared::position::{is_consecutive, move_within, renumber, sort_members, FIRST_ORDER};

/// Result of moving a card into another list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossMove {
    /// Final order of the moved card in the destination
    pub moved_order: i64,
    /// Full renumbered destination ordering
    pub destination: Vec<OrderUpdate>,
    /// Renumbered source ordering, when the removal left a gap
    pub source: Option<Vec<OrderUpdate>>,
}

/// Lists of a board and the active cards of each list
#[derive(Debug, Clone)]
pub struct BoardStore {
    board_id: Uuid,
    lists: Vec<List>,
    cards: HashMap<Uuid, Vec<Card>>,
}

impl BoardStore {
    pub fn new(board_id: Uuid) -> Self {
        Self {
            board_id,
            lists: Vec::new(),
            cards: HashMap::new(),
        }
    }

    pub fn board_id(&self) -> Uuid {
        self.board_id
    }

    /// Replace the lists of the board
    ///
    /// Cards already loaded for a retained list are kept; lists that
    /// disappeared take their cards with them.
    pub fn set_lists(&mut self, mut lists: Vec<List>) {
        sort_members(&mut lists);
        let mut cards = HashMap::with_capacity(lists.len());
        for list in &lists {
            let existing = self.cards.remove(&list.id).unwrap_or_default();
            cards.insert(list.id, existing);
        }
        self.cards = cards;
        self.lists = lists;
    }

    /// Replace the cards of one list with server state
    ///
    /// Archived cards are dropped. Returns `false` when the list is unknown.
    pub fn set_cards(&mut self, list_id: Uuid, mut cards: Vec<Card>) -> bool {
        let Some(slot) = self.cards.get_mut(&list_id) else {
            return false;
        };
        cards.retain(|card| !card.is_archived);
        sort_members(&mut cards);
        *slot = cards;
        true
    }

    /// Lists in display order
    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    /// Cards of a list in display order; empty for an unknown list
    pub fn cards(&self, list_id: Uuid) -> &[Card] {
        self.cards.get(&list_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_list(&self, list_id: Uuid) -> bool {
        self.cards.contains_key(&list_id)
    }

    pub fn list_index(&self, list_id: Uuid) -> Option<usize> {
        self.lists.iter().position(|list| list.id == list_id)
    }

    /// List holding the card and the card's index in it
    pub fn find_card(&self, card_id: Uuid) -> Option<(Uuid, usize)> {
        self.cards.iter().find_map(|(list_id, cards)| {
            cards
                .iter()
                .position(|card| card.id == card_id)
                .map(|index| (*list_id, index))
        })
    }

    /// Move a card inside its list and renumber the list
    ///
    /// Returns the full `{id, order}` list, or `None` when the list or
    /// index is unknown.
    pub fn reorder_within(&mut self, list_id: Uuid, from: usize, to: usize) -> Option<Vec<OrderUpdate>> {
        let cards = self.cards.get_mut(&list_id)?;
        if !move_within(cards, from, to) {
            return None;
        }
        Some(renumber(cards))
    }

    /// Move a card from one list into another at `index`
    ///
    /// `index` past the end appends. The destination is renumbered in full;
    /// the source is renumbered too, and reported only when that changed a
    /// stored order of a remaining card.
    pub fn move_across(
        &mut self,
        card_id: Uuid,
        from_list: Uuid,
        to_list: Uuid,
        index: usize,
    ) -> Option<CrossMove> {
        if from_list == to_list || !self.contains_list(to_list) {
            return None;
        }

        let source = self.cards.get_mut(&from_list)?;
        let position = source.iter().position(|card| card.id == card_id)?;
        let mut card = source.remove(position);
        let source_updates = if !source.is_empty() && !is_consecutive(source) {
            Some(renumber(source))
        } else {
            None
        };

        card.list_id = to_list;
        let destination = self.cards.get_mut(&to_list)?;
        let index = index.min(destination.len());
        destination.insert(index, card);

        Some(CrossMove {
            moved_order: FIRST_ORDER + index as i64,
            destination: renumber(destination),
            source: source_updates,
        })
    }

    /// Move a list within the board and renumber every list
    pub fn move_list(&mut self, from: usize, to: usize) -> Option<Vec<OrderUpdate>> {
        if !move_within(&mut self.lists, from, to) {
            return None;
        }
        Some(renumber(&mut self.lists))
    }

    /// Insert a list created on the server
    pub fn add_list(&mut self, list: List) {
        self.cards.entry(list.id).or_default();
        self.lists.retain(|existing| existing.id != list.id);
        self.lists.push(list);
        sort_members(&mut self.lists);
    }

    /// Insert or replace a card with server state
    ///
    /// An archived card is removed from the active ordering. Returns
    /// `false` when the card's list is not on this board.
    pub fn upsert_card(&mut self, card: Card) -> bool {
        if !self.contains_list(card.list_id) {
            return false;
        }
        self.remove_card(card.id);
        if card.is_archived {
            return true;
        }
        if let Some(cards) = self.cards.get_mut(&card.list_id) {
            cards.push(card);
            sort_members(cards);
        }
        true
    }

    /// Drop a card from whichever list holds it
    pub fn remove_card(&mut self, card_id: Uuid) -> Option<Card> {
        let (list_id, index) = self.find_card(card_id)?;
        self.cards.get_mut(&list_id).map(|cards| cards.remove(index))
    }
}
