//! A headless presentation session: one inventory panel plus the main menu.

use anyhow::Result;
use serde::Serialize;
use tracing::{info, warn};
use uisamples_inventory::{InventoryObserver, InventoryStore, Item, PickupTable};
use uisamples_menu::{MainMenu, MenuAction, MenuObserver, Screen};

use crate::config::SessionConfig;
use crate::observers::StepCounter;
use crate::session_script::{ScriptStep, SessionScript};

/// Result of applying a single script step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    /// The step changed state (or was a deliberate no-op such as clearing).
    Applied,
    /// The step was refused: inventory full, empty slot, or nothing selected.
    Refused,
    /// The step asked the session to stop.
    Quit,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    /// Steps executed (a quit stops the run early).
    pub steps_run: usize,
    /// Steps refused by the inventory.
    pub refused: usize,
    /// Item names left in the inventory, slot order.
    pub items: Vec<String>,
    /// Selected slot at the end of the run.
    pub selected: Option<usize>,
    /// Items consumed by "use".
    pub used: Vec<String>,
    /// Whether the inventory panel is still showing.
    pub visible: bool,
    pub screen: Screen,
    pub game_started: bool,
    pub quit_requested: bool,
}

/// Owns the store and menu for one headless session.
#[derive(Debug)]
pub struct Session {
    store: InventoryStore,
    menu: MainMenu,
    pickup: PickupTable,
    step: StepCounter,
    used: Vec<String>,
}

impl Session {
    /// Build a session from configuration.
    pub fn new(config: &SessionConfig) -> Result<Self> {
        Ok(Self {
            store: config.build_store()?,
            menu: MainMenu::new(),
            pickup: config.pickup.clone(),
            step: StepCounter::default(),
            used: Vec::new(),
        })
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn menu(&self) -> &MainMenu {
        &self.menu
    }

    /// Counter observers can read to tag events with the current step.
    pub fn step_counter(&self) -> StepCounter {
        self.step.clone()
    }

    pub fn subscribe_inventory(&mut self, observer: Box<dyn InventoryObserver>) {
        self.store.subscribe(observer);
    }

    pub fn subscribe_menu(&mut self, observer: Box<dyn MenuObserver>) {
        self.menu.subscribe(observer);
    }

    /// Apply one step.
    pub fn apply(&mut self, step: &ScriptStep) -> StepOutcome {
        match step {
            ScriptStep::Pickup => outcome(self.store.pick_up(&self.pickup)),
            ScriptStep::Add { name, description } => {
                match self.store.try_add_item(Item::new(name.clone(), description.clone())) {
                    Ok(_) => StepOutcome::Applied,
                    Err(err) => {
                        warn!(name = name.as_str(), "{err}");
                        StepOutcome::Refused
                    }
                }
            }
            ScriptStep::Select { slot } => {
                self.store.select_slot(*slot);
                outcome(self.store.selected_index().is_some())
            }
            ScriptStep::Clear => {
                self.store.clear_selection();
                StepOutcome::Applied
            }
            ScriptStep::Use => match self.store.use_selected() {
                Some(item) => {
                    self.used.push(item.name().to_string());
                    StepOutcome::Applied
                }
                None => StepOutcome::Refused,
            },
            ScriptStep::Discard => outcome(self.store.discard_selected().is_some()),
            ScriptStep::Remove { slot } => outcome(self.store.remove_at(*slot).is_some()),
            ScriptStep::Close => outcome(self.store.close()),
            ScriptStep::Menu { button } => match self.menu.press(*button) {
                MenuAction::Quit => StepOutcome::Quit,
                _ => StepOutcome::Applied,
            },
        }
    }

    /// Run every step in order, stopping at the first quit.
    pub fn run(&mut self, script: &SessionScript) -> SessionReport {
        let mut steps_run = 0;
        let mut refused = 0;

        for (index, step) in script.steps().iter().enumerate() {
            self.step.set(index as u64);
            steps_run += 1;
            match self.apply(step) {
                StepOutcome::Applied => {}
                StepOutcome::Refused => {
                    refused += 1;
                    info!(index, ?step, "step refused");
                }
                StepOutcome::Quit => {
                    info!(index, "quit requested, stopping session");
                    break;
                }
            }
        }

        self.report(steps_run, refused)
    }

    fn report(&self, steps_run: usize, refused: usize) -> SessionReport {
        SessionReport {
            steps_run,
            refused,
            items: self
                .store
                .items()
                .iter()
                .map(|item| item.name().to_string())
                .collect(),
            selected: self.store.selected_index(),
            used: self.used.clone(),
            visible: self.store.is_visible(),
            screen: self.menu.screen(),
            game_started: self.menu.is_game_started(),
            quit_requested: self.menu.quit_requested(),
        }
    }
}

fn outcome(applied: bool) -> StepOutcome {
    if applied {
        StepOutcome::Applied
    } else {
        StepOutcome::Refused
    }
}
