use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::Path};
use uisamples_menu::MenuButton;

#[derive(Debug, Deserialize)]
struct SessionScriptFile {
    steps: Vec<ScriptStep>,
}

/// One presentation action replayed against a session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Press the "pick up" button.
    Pickup,
    /// Add a specific item.
    Add {
        name: String,
        #[serde(default)]
        description: String,
    },
    /// Click an inventory slot.
    Select { slot: usize },
    /// Drop the current selection.
    Clear,
    /// Press "use".
    Use,
    /// Press "discard".
    Discard,
    /// Remove whatever sits in a slot.
    Remove { slot: usize },
    /// Close the inventory panel.
    Close,
    /// Press a main menu button.
    Menu { button: MenuButton },
}

/// Ordered session script.
///
/// Scripts are a JSON object holding a list of `{"action": ...}` steps,
/// executed in file order.
#[derive(Debug, Clone)]
pub struct SessionScript {
    steps: Vec<ScriptStep>,
}

impl SessionScript {
    /// Load a session script from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Load a session script from an in-memory JSON string.
    pub fn from_str(contents: &str) -> Result<Self> {
        let file: SessionScriptFile = serde_json::from_str(contents)?;
        if file.steps.is_empty() {
            anyhow::bail!("session script contains no steps");
        }

        let mut steps = Vec::with_capacity(file.steps.len());
        for step in file.steps {
            let step = match step {
                ScriptStep::Add { name, description } => {
                    let name = name.trim().to_string();
                    if name.is_empty() {
                        anyhow::bail!("session script adds an item with an empty name");
                    }
                    ScriptStep::Add { name, description }
                }
                other => other,
            };
            steps.push(step);
        }

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
