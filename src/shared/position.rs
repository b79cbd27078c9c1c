//! Position Model
//!
//! Ordered collections (cards within a list, lists within a board) are kept
//! in order by a numeric `order` key compared ascending. Ties are broken by
//! the member id, so every client and the server agree on one total order
//! even when two members share a key.
//!
//! # Policy
//!
//! - **Append**: a new member gets `max(existing) + 1`, or `1` when the
//!   collection is empty.
//! - **Reindex on reorder**: after a reorder, every member of the affected
//!   collection is renumbered to the consecutive integers `1..=N`. There are
//!   no fractional or gapped keys, so there is nothing to rebalance later.

use std::cmp::Ordering;

use uuid::Uuid;

use crate::shared::kanban::OrderUpdate;

/// Order key given to the first member of a collection
pub const FIRST_ORDER: i64 = 1;

/// A member of an ordered collection
pub trait Ordered {
    /// Stable identity of the member
    fn id(&self) -> Uuid;

    /// Current position key
    fn order(&self) -> i64;

    /// Overwrite the position key
    fn set_order(&mut self, order: i64);
}

/// Order key for a member appended to a collection whose largest key is
/// `current_max` (`None` for an empty collection)
pub fn next_order(current_max: Option<i64>) -> i64 {
    current_max.unwrap_or(0).max(0) + 1
}

/// Largest order key among `members`
pub fn max_order<'a, T, I>(members: I) -> Option<i64>
where
    T: Ordered + 'a,
    I: IntoIterator<Item = &'a T>,
{
    members.into_iter().map(Ordered::order).max()
}

/// Total order used everywhere: ascending key, then ascending id
pub fn compare<T: Ordered>(a: &T, b: &T) -> Ordering {
    a.order()
        .cmp(&b.order())
        .then_with(|| a.id().cmp(&b.id()))
}

/// Sort members into their display order
pub fn sort_members<T: Ordered>(members: &mut [T]) {
    members.sort_by(compare);
}

/// Assign `1..=N` to the members in their current sequence
///
/// Returns the full `{id, order}` list for the collection, which is exactly
/// the payload of a batch reorder call.
pub fn renumber<T: Ordered>(members: &mut [T]) -> Vec<OrderUpdate> {
    members
        .iter_mut()
        .enumerate()
        .map(|(index, member)| {
            let order = FIRST_ORDER + index as i64;
            member.set_order(order);
            OrderUpdate::new(member.id(), order)
        })
        .collect()
}

/// Whether the members already carry `1..=N` in sequence
pub fn is_consecutive<T: Ordered>(members: &[T]) -> bool {
    members
        .iter()
        .enumerate()
        .all(|(index, member)| member.order() == FIRST_ORDER + index as i64)
}

/// Move the element at `from` so that it ends up at index `to`
///
/// Array-move semantics: the element is removed first, then inserted, so
/// `to` is an index into the final sequence. `to` past the end clamps to the
/// last slot. Returns `false` without touching the slice when `from` is out
/// of range.
pub fn move_within<T>(members: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= members.len() {
        return false;
    }
    let to = to.min(members.len() - 1);
    if from != to {
        let member = members.remove(from);
        members.insert(to, member);
    }
    true
}
