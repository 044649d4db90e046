//! Error types for inventory operations.

use crate::item::ItemId;
use thiserror::Error;

/// Reasons an inventory operation can be refused.
///
/// None of these are fatal; the boolean inventory API maps them to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Every slot is occupied.
    #[error("inventory is full ({capacity} slots)")]
    Full {
        /// Slot capacity of the inventory.
        capacity: usize,
    },
    /// The item is not in the inventory.
    #[error("item {0} is not in the inventory")]
    NotFound(ItemId),
    /// An inventory needs at least one slot.
    #[error("invalid inventory capacity {0}")]
    InvalidCapacity(usize),
}
