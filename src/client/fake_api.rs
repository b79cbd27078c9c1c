//! In-memory [`BoardApi`] used by the client unit tests

use std::collections::HashSet;
use std::sync::Mutex;

use uuid::Uuid;

use crate::client::api::{BoardApi, ClientError};
use crate::shared::kanban::{Card, List, MoveCardRequest, OrderUpdate, ReorderResponse};
use crate::shared::position::sort_members;

#[derive(Debug, Default)]
pub struct FakeApi {
    lists: Mutex<Vec<List>>,
    cards: Mutex<Vec<Card>>,
    failing: Mutex<HashSet<&'static str>>,
    requests: Mutex<Vec<&'static str>>,
}

impl FakeApi {
    pub fn with_board(lists: Vec<List>, cards: Vec<Card>) -> Self {
        Self {
            lists: Mutex::new(lists),
            cards: Mutex::new(cards),
            ..Default::default()
        }
    }

    /// Make every later call to `method` fail with a 500
    pub fn fail_on(&self, method: &'static str) {
        self.failing.lock().unwrap().insert(method);
    }

    pub fn recover(&self) {
        self.failing.lock().unwrap().clear();
    }

    pub fn requests(&self) -> Vec<&'static str> {
        self.requests.lock().unwrap().clone()
    }

    pub fn card(&self, id: Uuid) -> Option<Card> {
        self.cards.lock().unwrap().iter().find(|c| c.id == id).cloned()
    }

    pub fn list(&self, id: Uuid) -> Option<List> {
        self.lists.lock().unwrap().iter().find(|l| l.id == id).cloned()
    }

    fn enter(&self, method: &'static str) -> Result<(), ClientError> {
        self.requests.lock().unwrap().push(method);
        if self.failing.lock().unwrap().contains(method) {
            return Err(ClientError::Status {
                status: 500,
                message: "Server Error".to_string(),
            });
        }
        Ok(())
    }

    fn apply_card_orders(&self, updates: &[OrderUpdate]) -> u64 {
        let mut cards = self.cards.lock().unwrap();
        let mut updated = 0;
        for update in updates {
            if let Some(card) = cards.iter_mut().find(|c| c.id == update.id) {
                card.order = update.order;
                if let Some(list_id) = update.list_id {
                    card.list_id = list_id;
                }
                updated += 1;
            }
        }
        updated
    }
}

impl BoardApi for FakeApi {
    async fn get_lists(&self, board_id: Uuid) -> Result<Vec<List>, ClientError> {
        self.enter("get_lists")?;
        let mut lists: Vec<List> = self
            .lists
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.board_id == board_id)
            .cloned()
            .collect();
        sort_members(&mut lists);
        Ok(lists)
    }

    async fn get_cards(&self, list_id: Uuid) -> Result<Vec<Card>, ClientError> {
        self.enter("get_cards")?;
        let mut cards: Vec<Card> = self
            .cards
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.list_id == list_id && !c.is_archived)
            .cloned()
            .collect();
        sort_members(&mut cards);
        Ok(cards)
    }

    async fn move_card(&self, card_id: Uuid, request: MoveCardRequest) -> Result<Card, ClientError> {
        self.enter("move_card")?;
        let mut cards = self.cards.lock().unwrap();
        let card = cards
            .iter_mut()
            .find(|c| c.id == card_id)
            .ok_or_else(|| ClientError::Status {
                status: 404,
                message: "card not found".to_string(),
            })?;
        card.list_id = request.list_id;
        card.order = request.order;
        Ok(card.clone())
    }

    async fn reorder_cards(&self, cards: Vec<OrderUpdate>) -> Result<ReorderResponse, ClientError> {
        self.enter("reorder_cards")?;
        Ok(ReorderResponse {
            updated: self.apply_card_orders(&cards),
        })
    }

    async fn reorder_lists(&self, lists: Vec<OrderUpdate>) -> Result<ReorderResponse, ClientError> {
        self.enter("reorder_lists")?;
        let mut stored = self.lists.lock().unwrap();
        let mut updated = 0;
        for update in &lists {
            if let Some(list) = stored.iter_mut().find(|l| l.id == update.id) {
                list.order = update.order;
                updated += 1;
            }
        }
        Ok(ReorderResponse { updated })
    }
}
