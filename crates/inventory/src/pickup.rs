//! Placeholder loot table used by the "pick up" action.
//!
//! The table cycles by the current item count, so repeated pickups from an
//! empty inventory yield the entries in order.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uisamples_core::Item;

/// One pickup table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupEntry {
    /// Item name.
    pub name: String,
    /// Item description.
    #[serde(default)]
    pub description: String,
}

impl PickupEntry {
    /// Create a row.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Instantiate a fresh item from this row.
    pub fn to_item(&self) -> Item {
        Item::new(self.name.clone(), self.description.clone())
    }
}

/// A pickup table must have at least one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pickup table has no entries")]
pub struct EmptyPickupTable;

/// Non-empty, ordered pickup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PickupEntry>", into = "Vec<PickupEntry>")]
pub struct PickupTable {
    entries: Vec<PickupEntry>,
}

impl PickupTable {
    /// Build a table from rows.
    pub fn new(entries: Vec<PickupEntry>) -> Result<Self, EmptyPickupTable> {
        if entries.is_empty() {
            return Err(EmptyPickupTable);
        }
        Ok(Self { entries })
    }

    /// Rows in order.
    pub fn entries(&self) -> &[PickupEntry] {
        &self.entries
    }

    /// Number of rows (always at least one).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Row picked for an inventory currently holding `count` items.
    pub fn entry_for(&self, count: usize) -> &PickupEntry {
        &self.entries[count % self.entries.len()]
    }
}

impl Default for PickupTable {
    fn default() -> Self {
        Self {
            entries: vec![
                PickupEntry::new("Apple", "A fresh red apple"),
                PickupEntry::new("Bottle", "An empty glass bottle"),
                PickupEntry::new("Coin", "A shiny gold coin"),
                PickupEntry::new("Key", "An old rusty key"),
                PickupEntry::new("Stone", "A smooth round stone"),
            ],
        }
    }
}

impl TryFrom<Vec<PickupEntry>> for PickupTable {
    type Error = EmptyPickupTable;

    fn try_from(entries: Vec<PickupEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<PickupTable> for Vec<PickupEntry> {
    fn from(table: PickupTable) -> Self {
        table.entries
    }
}
