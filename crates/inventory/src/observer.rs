//! Observer seam between the inventory store and presentation.
//!
//! Observers are registered explicitly on the store and are notified
//! synchronously, in registration order, after the state change they
//! describe has been applied.

use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use uisamples_core::Item;

/// Handle returned by [`crate::InventoryStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);

/// Receives inventory state changes.
///
/// Every method defaults to a no-op so observers only implement what they
/// care about.
pub trait InventoryObserver {
    /// Slot `index` now holds `item` (`None` for an emptied slot).
    fn on_slot_updated(&mut self, _index: usize, _item: Option<&Item>) {}

    /// Selection moved to `index`, or was cleared when both are `None`.
    fn on_selection_changed(&mut self, _index: Option<usize>, _item: Option<&Item>) {}

    /// `item` was used. Fired before the item is removed.
    fn on_item_used(&mut self, _item: &Item) {}

    /// The inventory panel was shown (`true`) or closed (`false`).
    fn on_visibility_changed(&mut self, _visible: bool) {}
}

impl<O: InventoryObserver + ?Sized> InventoryObserver for Rc<RefCell<O>> {
    fn on_slot_updated(&mut self, index: usize, item: Option<&Item>) {
        self.borrow_mut().on_slot_updated(index, item);
    }

    fn on_selection_changed(&mut self, index: Option<usize>, item: Option<&Item>) {
        self.borrow_mut().on_selection_changed(index, item);
    }

    fn on_item_used(&mut self, item: &Item) {
        self.borrow_mut().on_item_used(item);
    }

    fn on_visibility_changed(&mut self, visible: bool) {
        self.borrow_mut().on_visibility_changed(visible);
    }
}

/// Owned record of a single observer callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InventoryEvent {
    /// See [`InventoryObserver::on_slot_updated`].
    SlotUpdated {
        /// Slot index.
        index: usize,
        /// New slot contents.
        item: Option<Item>,
    },
    /// See [`InventoryObserver::on_selection_changed`].
    SelectionChanged {
        /// Selected slot index.
        index: Option<usize>,
        /// Selected item.
        item: Option<Item>,
    },
    /// See [`InventoryObserver::on_item_used`].
    ItemUsed {
        /// The consumed item.
        item: Item,
    },
    /// See [`InventoryObserver::on_visibility_changed`].
    VisibilityChanged {
        /// Whether the panel is now showing.
        visible: bool,
    },
}

impl InventoryEvent {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            InventoryEvent::SlotUpdated { .. } => "slot_updated",
            InventoryEvent::SelectionChanged { .. } => "selection_changed",
            InventoryEvent::ItemUsed { .. } => "item_used",
            InventoryEvent::VisibilityChanged { .. } => "visibility_changed",
        }
    }
}

/// Observer that records every callback in order.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<InventoryEvent>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log wrapped in a shared handle, ready to subscribe.
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> &[InventoryEvent] {
        &self.events
    }

    /// Take all recorded events, leaving the log empty.
    pub fn take(&mut self) -> Vec<InventoryEvent> {
        std::mem::take(&mut self.events)
    }

    /// Indices of every slot-updated event, in order.
    pub fn updated_slots(&self) -> Vec<usize> {
        self.events
            .iter()
            .filter_map(|event| match event {
                InventoryEvent::SlotUpdated { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }
}

impl InventoryObserver for EventLog {
    fn on_slot_updated(&mut self, index: usize, item: Option<&Item>) {
        self.events.push(InventoryEvent::SlotUpdated {
            index,
            item: item.cloned(),
        });
    }

    fn on_selection_changed(&mut self, index: Option<usize>, item: Option<&Item>) {
        self.events.push(InventoryEvent::SelectionChanged {
            index,
            item: item.cloned(),
        });
    }

    fn on_item_used(&mut self, item: &Item) {
        self.events.push(InventoryEvent::ItemUsed { item: item.clone() });
    }

    fn on_visibility_changed(&mut self, visible: bool) {
        self.events.push(InventoryEvent::VisibilityChanged { visible });
    }
}
