//! Observers wired into headless sessions.

use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

use anyhow::Result;
use tracing::{debug, info, warn};
use uisamples_inventory::{InventoryEvent, InventoryObserver, Item};
use uisamples_menu::MenuObserver;
use uisamples_testkit::{EventRecord, JsonlSink};

/// Shared counter of the script step currently executing.
pub type StepCounter = Rc<Cell<u64>>;

/// Logs inventory and menu activity through `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl InventoryObserver for TracingObserver {
    fn on_slot_updated(&mut self, index: usize, item: Option<&Item>) {
        match item {
            Some(item) => debug!(index, name = item.name(), "slot filled"),
            None => debug!(index, "slot emptied"),
        }
    }

    fn on_selection_changed(&mut self, index: Option<usize>, item: Option<&Item>) {
        match (index, item) {
            (Some(index), Some(item)) => info!(
                index,
                name = item.name(),
                description = item.description(),
                "item selected"
            ),
            _ => info!("selection cleared"),
        }
    }

    fn on_item_used(&mut self, item: &Item) {
        info!(name = item.name(), "item used");
    }

    fn on_visibility_changed(&mut self, visible: bool) {
        info!(visible, "inventory visibility changed");
    }
}

impl MenuObserver for TracingObserver {
    fn on_game_start(&mut self) {
        info!("game start");
    }

    fn on_game_quit(&mut self) {
        info!("game quit");
    }
}

/// Writes every event to a JSONL file, tagged with the current step.
pub struct JsonlObserver {
    sink: JsonlSink,
    step: StepCounter,
}

impl JsonlObserver {
    /// Create the log file at `path`.
    pub fn create(path: &Path, step: StepCounter) -> Result<Self> {
        Ok(Self {
            sink: JsonlSink::create(path)?,
            step,
        })
    }

    /// Flush buffered records.
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()
    }

    fn record(&mut self, event: &InventoryEvent) {
        let record = EventRecord {
            step: self.step.get(),
            kind: event.kind(),
            payload: event,
        };
        if let Err(err) = self.sink.write(&record) {
            warn!("Failed to write event log record: {err:#}");
        }
    }

    fn record_menu(&mut self, kind: &str) {
        let record = EventRecord {
            step: self.step.get(),
            kind,
            payload: &(),
        };
        if let Err(err) = self.sink.write(&record) {
            warn!("Failed to write event log record: {err:#}");
        }
    }
}

impl InventoryObserver for JsonlObserver {
    fn on_slot_updated(&mut self, index: usize, item: Option<&Item>) {
        self.record(&InventoryEvent::SlotUpdated {
            index,
            item: item.cloned(),
        });
    }

    fn on_selection_changed(&mut self, index: Option<usize>, item: Option<&Item>) {
        self.record(&InventoryEvent::SelectionChanged {
            index,
            item: item.cloned(),
        });
    }

    fn on_item_used(&mut self, item: &Item) {
        self.record(&InventoryEvent::ItemUsed { item: item.clone() });
    }

    fn on_visibility_changed(&mut self, visible: bool) {
        self.record(&InventoryEvent::VisibilityChanged { visible });
    }
}

impl MenuObserver for JsonlObserver {
    fn on_game_start(&mut self) {
        self.record_menu("game_start");
    }

    fn on_game_quit(&mut self) {
        self.record_menu("game_quit");
    }
}
