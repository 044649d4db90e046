//! Fixed-capacity inventory with a single selection.
//!
//! Occupied slots always form a prefix: adds append, removals compact the
//! tail down by one. The selection tracks an item, not a slot, so it follows
//! the item when an earlier slot is removed.

use crate::observer::{InventoryObserver, ObserverId};
use crate::pickup::PickupTable;
use std::fmt;
use tracing::debug;
use uisamples_core::{InventoryError, Item, ItemId, MAX_SLOTS};

/// Inventory slot array plus selection state.
pub struct InventoryStore {
    items: Vec<Item>,
    capacity: usize,
    selected: Option<ItemId>,
    visible: bool,
    observers: Vec<(ObserverId, Box<dyn InventoryObserver>)>,
    next_observer: u64,
}

impl fmt::Debug for InventoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryStore")
            .field("items", &self.items)
            .field("capacity", &self.capacity)
            .field("selected", &self.selected)
            .field("visible", &self.visible)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore {
    /// Create an empty store with [`MAX_SLOTS`] slots.
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(MAX_SLOTS),
            capacity: MAX_SLOTS,
            selected: None,
            visible: true,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// Create an empty store with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Result<Self, InventoryError> {
        if capacity == 0 {
            return Err(InventoryError::InvalidCapacity(capacity));
        }
        let mut store = Self::new();
        store.capacity = capacity;
        store.items = Vec::with_capacity(capacity);
        Ok(store)
    }

    /// Register an observer. Observers are notified in registration order.
    pub fn subscribe(&mut self, observer: Box<dyn InventoryObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove a previously registered observer.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Occupied slots in order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Every slot, occupied or not. Always yields `capacity` entries.
    pub fn slots(&self) -> impl Iterator<Item = Option<&Item>> + '_ {
        (0..self.capacity).map(move |index| self.items.get(index))
    }

    /// Contents of slot `index`.
    pub fn slot(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Slot index holding `item`, by identity.
    pub fn position_of(&self, item: &Item) -> Option<usize> {
        self.position_of_id(item.id())
    }

    /// Whether `item` (by identity) is in the store.
    pub fn contains(&self, item: &Item) -> bool {
        self.position_of(item).is_some()
    }

    /// Currently selected slot index.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected.and_then(|id| self.position_of_id(id))
    }

    /// Currently selected item.
    pub fn selected_item(&self) -> Option<&Item> {
        self.selected_index().map(|index| &self.items[index])
    }

    /// Whether the use and discard actions are available, i.e. something is selected.
    pub fn actions_enabled(&self) -> bool {
        self.selected_index().is_some()
    }

    /// Whether the inventory panel is showing. Starts `true`.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide the inventory panel; `false` if it was already hidden.
    ///
    /// Slots and selection are untouched.
    pub fn close(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.visible = false;
        debug!("inventory closed");
        for (_, observer) in &mut self.observers {
            observer.on_visibility_changed(false);
        }
        true
    }

    /// Append `item` to the first free slot, returning its index.
    pub fn try_add_item(&mut self, item: Item) -> Result<usize, InventoryError> {
        if self.is_full() {
            return Err(InventoryError::Full {
                capacity: self.capacity,
            });
        }

        self.items.push(item);
        let index = self.items.len() - 1;
        debug!(index, item = %self.items[index], "item added");
        self.emit_slot_updated(index);
        Ok(index)
    }

    /// Append `item`; `false` when the store is full.
    pub fn add_item(&mut self, item: Item) -> bool {
        self.try_add_item(item).is_ok()
    }

    /// Remove `item` by identity, returning the slot it occupied.
    pub fn try_remove_item(&mut self, item: &Item) -> Result<usize, InventoryError> {
        let index = self
            .position_of(item)
            .ok_or(InventoryError::NotFound(item.id()))?;
        self.remove_index(index);
        Ok(index)
    }

    /// Remove `item` by identity; `false` when it is not present.
    pub fn remove_item(&mut self, item: &Item) -> bool {
        self.try_remove_item(item).is_ok()
    }

    /// Remove whatever occupies slot `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<Item> {
        if index >= self.items.len() {
            return None;
        }
        Some(self.remove_index(index))
    }

    /// Select slot `index`. Selecting an empty slot clears the selection.
    pub fn select_slot(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            self.clear_selection();
            return;
        };

        self.selected = Some(item.id());
        debug!(index, item = %item, "item selected");
        self.emit_selection_changed(Some(index));
    }

    /// Clear the selection. Always notifies observers.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        debug!("selection cleared");
        self.emit_selection_changed(None);
    }

    /// Consume the selected item: notify use, then remove it.
    pub fn use_selected(&mut self) -> Option<Item> {
        let index = self.selected_index()?;
        let item = self.items[index].clone();
        debug!(index, item = %item, "item used");
        for (_, observer) in &mut self.observers {
            observer.on_item_used(&item);
        }
        self.remove_index(index);
        Some(item)
    }

    /// Remove the selected item without a use notification.
    pub fn discard_selected(&mut self) -> Option<Item> {
        let index = self.selected_index()?;
        let item = self.remove_index(index);
        debug!(index, item = %item, "item discarded");
        Some(item)
    }

    /// Add the next row of `table`; `false` when the store is full.
    pub fn pick_up(&mut self, table: &PickupTable) -> bool {
        if self.is_full() {
            return false;
        }
        let item = table.entry_for(self.items.len()).to_item();
        self.add_item(item)
    }

    fn position_of_id(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn remove_index(&mut self, index: usize) -> Item {
        let selected_before = self.selected_index();
        let removed = self.items.remove(index);
        debug!(index, item = %removed, "item removed");

        // Everything from `index` shifted down, and the old last slot emptied.
        for slot in index..=self.items.len() {
            self.emit_slot_updated(slot);
        }

        if self.selected == Some(removed.id()) {
            self.clear_selection();
        } else if let Some(before) = selected_before.filter(|&before| before > index) {
            self.emit_selection_changed(Some(before - 1));
        }

        removed
    }

    fn emit_slot_updated(&mut self, index: usize) {
        let item = self.items.get(index);
        for (_, observer) in &mut self.observers {
            observer.on_slot_updated(index, item);
        }
    }

    fn emit_selection_changed(&mut self, index: Option<usize>) {
        let item = match index {
            Some(index) => self.items.get(index),
            None => None,
        };
        for (_, observer) in &mut self.observers {
            observer.on_selection_changed(index, item);
        }
    }
}
