//! Container Resolver
//!
//! Drag identifiers are opaque strings. A list container is rendered as
//! `list-<uuid>` and a card as `card-<uuid>`, but bare ids are accepted
//! too. Resolution strips the prefix and looks the id up in the store: a
//! list id names its own container, a card id names the list holding it.
//!
//! The prefix is only an encoding hint; what the id matches decides the
//! result. Unknown or unparsable identifiers resolve to `None`, and the
//! caller must abort the drop.

use uuid::Uuid;

use crate::client::store::BoardStore;

/// Prefix marking a list container
pub const LIST_PREFIX: &str = "list-";

/// Prefix marking a card
pub const CARD_PREFIX: &str = "card-";

/// What a drag identifier refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    /// A list container
    List { list_id: Uuid },
    /// A card, with the list currently holding it and its index there
    Card {
        card_id: Uuid,
        list_id: Uuid,
        index: usize,
    },
}

impl Resolved {
    /// The owning collection
    pub fn list_id(&self) -> Uuid {
        match self {
            Resolved::List { list_id } | Resolved::Card { list_id, .. } => *list_id,
        }
    }
}

/// Render the identifier of a list container
pub fn list_drag_id(list_id: Uuid) -> String {
    format!("{}{}", LIST_PREFIX, list_id)
}

/// Render the identifier of a card
pub fn card_drag_id(card_id: Uuid) -> String {
    format!("{}{}", CARD_PREFIX, card_id)
}

/// Strip a structural prefix and parse the remaining id
pub fn parse_id(raw: &str) -> Option<Uuid> {
    let raw = raw.trim();
    let bare = raw
        .strip_prefix(LIST_PREFIX)
        .or_else(|| raw.strip_prefix(CARD_PREFIX))
        .unwrap_or(raw);
    Uuid::parse_str(bare).ok()
}

/// Resolve an identifier against the store
///
/// Lists are checked first, then every list's cards.
pub fn resolve(raw: &str, store: &BoardStore) -> Option<Resolved> {
    let id = parse_id(raw)?;
    if store.contains_list(id) {
        return Some(Resolved::List { list_id: id });
    }
    store
        .find_card(id)
        .map(|(list_id, index)| Resolved::Card {
            card_id: id,
            list_id,
            index,
        })
}

/// The list owning the identifier, if any
pub fn resolve_container(raw: &str, store: &BoardStore) -> Option<Uuid> {
    resolve(raw, store).map(|resolved| resolved.list_id())
}
