//! Pick lists: the items of one picking order plus the tour endpoints.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::Position;

/// One product to pick: identifier plus shelf position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PickItem {
    pub id: String,
    pub position: Position,
}

impl PickItem {
    pub fn new(id: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

/// The items of one picking order, with the fixed start and end of the tour.
///
/// Items are unique by identifier and iterate in ascending identifier order,
/// which is the exact solver's first candidate order. The start and end
/// locations are not members of the item set.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PickList {
    items: BTreeMap<String, Position>,
    start: Position,
    end: Position,
}

impl PickList {
    pub fn new(start: Position, end: Position) -> Self {
        Self {
            items: BTreeMap::new(),
            start,
            end,
        }
    }

    pub fn with_start(mut self, start: Position) -> Self {
        self.start = start;
        self
    }

    pub fn with_end(mut self, end: Position) -> Self {
        self.end = end;
        self
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_item(mut self, item: PickItem) -> Self {
        self.insert(item);
        self
    }

    /// Adds an item; returns whether the list changed.
    ///
    /// Items whose position has a negative coordinate are dropped: the
    /// catalog uses negative coordinates for products with no known shelf
    /// location, and such items cannot be routed. An item whose identifier
    /// is already present leaves the list unchanged (first insertion wins).
    pub fn insert(&mut self, item: PickItem) -> bool {
        if item.position.is_unplaced() {
            log::debug!("dropping pick item {}: no known location", item.id);
            return false;
        }
        match self.items.entry(item.id) {
            Entry::Vacant(slot) => {
                slot.insert(item.position);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Number of items (start/end not counted).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// Items in ascending identifier order.
    pub fn items(&self) -> impl Iterator<Item = (&str, Position)> + '_ {
        self.items.iter().map(|(id, &position)| (id.as_str(), position))
    }
}
