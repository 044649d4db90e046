//! Property-based tests for the inventory store
//!
//! Validates store invariants under arbitrary action sequences:
//! - Item count never exceeds capacity
//! - Selection always points at an occupied slot
//! - Removal takes exactly the requested item and keeps order
//! - Used/discarded items leave the selection empty

use proptest::prelude::*;
use uisamples_inventory::{EventLog, InventoryEvent, InventoryStore, Item, MAX_SLOTS};

#[derive(Debug, Clone)]
enum Action {
    Add,
    RemoveAt(usize),
    Select(usize),
    Clear,
    Use,
    Discard,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => Just(Action::Add),
        1 => (0usize..10).prop_map(Action::RemoveAt),
        2 => (0usize..10).prop_map(Action::Select),
        1 => Just(Action::Clear),
        1 => Just(Action::Use),
        1 => Just(Action::Discard),
    ]
}

proptest! {
    /// Property: k successful adds give count k, and adds beyond capacity fail
    #[test]
    fn adds_fill_up_to_capacity(adds in 0usize..16) {
        let mut store = InventoryStore::new();
        let mut accepted = 0;
        for i in 0..adds {
            if store.add_item(Item::named(format!("Item{i}"))) {
                accepted += 1;
            }
        }

        prop_assert_eq!(accepted, adds.min(MAX_SLOTS));
        prop_assert_eq!(store.len(), adds.min(MAX_SLOTS));
        prop_assert_eq!(store.is_full(), adds >= MAX_SLOTS);
    }

    /// Property: store state matches a plain ordered model after any action sequence
    #[test]
    fn store_matches_ordered_model(actions in prop::collection::vec(action(), 0..64)) {
        let mut store = InventoryStore::new();
        let mut model: Vec<Item> = Vec::new();
        let mut selected: Option<Item> = None;
        let mut next = 0;

        for action in actions {
            match action {
                Action::Add => {
                    let item = Item::named(format!("Item{}", next % 3));
                    next += 1;
                    let added = store.add_item(item.clone());
                    prop_assert_eq!(added, model.len() < MAX_SLOTS);
                    if added {
                        model.push(item);
                    }
                }
                Action::RemoveAt(index) => {
                    let removed = store.remove_at(index);
                    if index < model.len() {
                        let expected = model.remove(index);
                        prop_assert_eq!(removed.as_ref(), Some(&expected));
                        if selected.as_ref() == Some(&expected) {
                            selected = None;
                        }
                    } else {
                        prop_assert!(removed.is_none());
                    }
                }
                Action::Select(index) => {
                    store.select_slot(index);
                    selected = model.get(index).cloned();
                }
                Action::Clear => {
                    store.clear_selection();
                    selected = None;
                }
                Action::Use | Action::Discard => {
                    let taken = if matches!(action, Action::Use) {
                        store.use_selected()
                    } else {
                        store.discard_selected()
                    };
                    prop_assert_eq!(taken.as_ref(), selected.as_ref());
                    if let Some(item) = selected.take() {
                        model.retain(|other| other != &item);
                    }
                }
            }

            prop_assert!(store.len() <= MAX_SLOTS);
            prop_assert_eq!(store.items(), model.as_slice());
            prop_assert_eq!(store.selected_item(), selected.as_ref());
            if let Some(index) = store.selected_index() {
                prop_assert!(index < store.len());
            }
        }
    }

    /// Property: removing one of several same-named items removes exactly that one
    #[test]
    fn removal_is_identity_based(copies in 2usize..=MAX_SLOTS, pick in 0usize..MAX_SLOTS) {
        let pick = pick % copies;
        let mut store = InventoryStore::new();
        let items: Vec<Item> = (0..copies).map(|_| Item::named("Apple")).collect();
        for item in &items {
            store.add_item(item.clone());
        }

        prop_assert!(store.remove_item(&items[pick]));
        prop_assert_eq!(store.len(), copies - 1);
        prop_assert!(!store.contains(&items[pick]));
        for (i, item) in items.iter().enumerate() {
            if i != pick {
                prop_assert!(store.contains(item));
            }
        }
    }

    /// Property: selecting past the occupied range always clears the selection
    #[test]
    fn selecting_empty_slot_clears(count in 0usize..=MAX_SLOTS, offset in 0usize..8) {
        let mut store = InventoryStore::new();
        for i in 0..count {
            store.add_item(Item::named(format!("Item{i}")));
        }
        if count > 0 {
            store.select_slot(0);
        }

        store.select_slot(count + offset);

        prop_assert!(store.selected_item().is_none());
    }
}

#[test]
fn fill_select_use_scenario() {
    let mut store = InventoryStore::new();
    let log = EventLog::shared();
    store.subscribe(Box::new(log.clone()));

    assert!(store.add_item(Item::new("Apple", "A fresh red apple")));
    assert_eq!(store.len(), 1);
    store.remove_at(0);

    for i in 0..MAX_SLOTS {
        assert!(store.add_item(Item::named(format!("Item{i}"))));
    }
    assert!(!store.add_item(Item::named("Item8")));
    assert_eq!(store.len(), 8);

    store.select_slot(0);
    assert_eq!(store.selected_item().map(Item::name), Some("Item0"));

    let used = store.use_selected().expect("selection present");
    assert_eq!(used.name(), "Item0");
    assert_eq!(store.len(), 7);
    assert!(store.selected_item().is_none());
    assert!(log
        .borrow()
        .events()
        .contains(&InventoryEvent::ItemUsed { item: used }));
}

#[test]
fn discard_second_of_two_scenario() {
    let mut store = InventoryStore::new();
    let first = Item::named("First");
    store.add_item(first.clone());
    store.add_item(Item::named("Second"));

    store.select_slot(1);
    store.discard_selected();

    assert_eq!(store.len(), 1);
    assert_eq!(store.slot(0), Some(&first));
    assert!(store.selected_item().is_none());
}
