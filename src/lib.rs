//! uisamples - headless inventory panel and main menu controllers
//!
//! Library half of the `uisamples` binary: configuration, session scripts,
//! and the observers that log inventory activity.

pub mod config;
pub mod observers;
pub mod session;
pub mod session_script;

pub use config::SessionConfig;
pub use session::{Session, SessionReport, StepOutcome};
pub use session_script::{ScriptStep, SessionScript};
