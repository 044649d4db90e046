#![warn(missing_docs)]
//! Core primitives shared across the workspace.

pub mod error;
pub mod item;

// Re-export commonly used types
pub use error::InventoryError;
pub use item::{Item, ItemId};

/// Default number of slots in an inventory panel.
pub const MAX_SLOTS: usize = 8;
