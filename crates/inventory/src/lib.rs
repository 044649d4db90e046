#![warn(missing_docs)]
//! Inventory slot-selection state machine.
//!
//! [`InventoryStore`] owns a fixed-capacity, gap-free list of [`Item`]s and a
//! single selection. Presentation layers drive it with slot indices and
//! react to changes through [`InventoryObserver`] callbacks.
//!
//! ```
//! use uisamples_inventory::{InventoryStore, Item};
//!
//! let mut store = InventoryStore::new();
//! assert!(store.add_item(Item::new("Apple", "A fresh red apple")));
//! store.select_slot(0);
//! let used = store.use_selected();
//! assert_eq!(used.map(|item| item.name().to_string()), Some("Apple".into()));
//! assert!(store.is_empty());
//! ```

pub mod observer;
pub mod pickup;
pub mod store;

pub use observer::{EventLog, InventoryEvent, InventoryObserver, ObserverId};
pub use pickup::{EmptyPickupTable, PickupEntry, PickupTable};
pub use store::InventoryStore;
pub use uisamples_core::{InventoryError, Item, ItemId, MAX_SLOTS};
