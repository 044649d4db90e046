//! Inventory items.
//!
//! Items are identity records: two items with the same name are still
//! different items. Identity is carried by an [`ItemId`] allocated when the
//! item is created, so a clone denotes the same item as its source.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl ItemId {
    /// Allocate a fresh identifier.
    fn next() -> Self {
        Self(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single inventory item.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    id: ItemId,
    name: String,
    description: String,
}

impl Item {
    /// Create a new item with a fresh identity.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ItemId::next(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// Create an item with an empty description.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, String::new())
    }

    /// Identity of this item.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Display name (not unique).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form description shown in the detail pane.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_items_are_distinct() {
        let a = Item::new("Apple", "A fresh red apple");
        let b = Item::new("Apple", "A fresh red apple");

        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn clones_share_identity() {
        let a = Item::named("Key");
        let b = a.clone();

        assert_eq!(a, b);
        assert_eq!(b.description(), "");
    }

    #[test]
    fn item_serializes_with_id() {
        let item = Item::new("Coin", "A shiny gold coin");
        let json = serde_json::to_string(&item).unwrap();

        assert!(json.contains("\"name\":\"Coin\""));
        assert!(json.contains(&format!("\"id\":{}", item.id().0)));
    }
}
