#![warn(missing_docs)]
//! Main menu state machine.
//!
//! Models the title screen: which screen is showing, whether a game has been
//! started, and who gets told when the player starts or quits. Buttons only
//! respond while the main menu is the visible screen.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Menu action to communicate with the session driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    /// Keep displaying the current screen
    Continue,
    /// A game is running (new or continued)
    StartGame,
    /// Settings requested
    OpenSettings,
    /// Credits requested
    OpenCredits,
    /// Quit application
    Quit,
}

/// Screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Title screen with the menu buttons
    #[default]
    MainMenu,
    /// In-game screen
    Game,
}

/// Buttons on the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuButton {
    /// Start a new game
    Start,
    /// Continue an existing game
    Continue,
    /// Open settings
    Settings,
    /// Open credits
    Credits,
    /// Quit
    Quit,
}

impl MenuButton {
    /// All buttons in display order.
    pub const ALL: [MenuButton; 5] = [
        MenuButton::Start,
        MenuButton::Continue,
        MenuButton::Settings,
        MenuButton::Credits,
        MenuButton::Quit,
    ];

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            MenuButton::Start => "start",
            MenuButton::Continue => "continue",
            MenuButton::Settings => "settings",
            MenuButton::Credits => "credits",
            MenuButton::Quit => "quit",
        }
    }
}

impl fmt::Display for MenuButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised button name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown menu button `{0}`")]
pub struct UnknownButton(pub String);

impl FromStr for MenuButton {
    type Err = UnknownButton;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        MenuButton::ALL
            .into_iter()
            .find(|button| button.as_str() == name)
            .ok_or_else(|| UnknownButton(s.to_string()))
    }
}

/// Receives game start/quit notifications.
pub trait MenuObserver {
    /// A new game was started.
    fn on_game_start(&mut self) {}

    /// The player asked to quit.
    fn on_game_quit(&mut self) {}
}

impl<O: MenuObserver + ?Sized> MenuObserver for Rc<RefCell<O>> {
    fn on_game_start(&mut self) {
        self.borrow_mut().on_game_start();
    }

    fn on_game_quit(&mut self) {
        self.borrow_mut().on_game_quit();
    }
}

/// Main menu state
#[derive(Default)]
pub struct MainMenu {
    screen: Screen,
    game_started: bool,
    quit_requested: bool,
    observers: Vec<Box<dyn MenuObserver>>,
}

impl fmt::Debug for MainMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MainMenu")
            .field("screen", &self.screen)
            .field("game_started", &self.game_started)
            .field("quit_requested", &self.quit_requested)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl MainMenu {
    /// Create a menu showing the title screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. Observers are notified in registration order.
    pub fn subscribe(&mut self, observer: Box<dyn MenuObserver>) {
        self.observers.push(observer);
    }

    /// Screen currently shown.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Whether a game has been started or continued.
    pub fn is_game_started(&self) -> bool {
        self.game_started
    }

    /// Whether quit was pressed.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Handle a button press.
    pub fn press(&mut self, button: MenuButton) -> MenuAction {
        if self.screen != Screen::MainMenu {
            debug!(%button, "menu hidden, ignoring button");
            return MenuAction::Continue;
        }

        match button {
            MenuButton::Start => {
                self.enter_game();
                for observer in &mut self.observers {
                    observer.on_game_start();
                }
                info!("Game started");
                MenuAction::StartGame
            }
            MenuButton::Continue => {
                self.enter_game();
                info!("Continue game");
                MenuAction::StartGame
            }
            MenuButton::Settings => {
                info!("Open settings");
                MenuAction::OpenSettings
            }
            MenuButton::Credits => {
                info!("Open credits");
                MenuAction::OpenCredits
            }
            MenuButton::Quit => {
                self.quit_requested = true;
                for observer in &mut self.observers {
                    observer.on_game_quit();
                }
                info!("Quit game");
                MenuAction::Quit
            }
        }
    }

    fn enter_game(&mut self) {
        self.game_started = true;
        self.screen = Screen::Game;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counts {
        starts: u32,
        quits: u32,
    }

    impl MenuObserver for Counts {
        fn on_game_start(&mut self) {
            self.starts += 1;
        }

        fn on_game_quit(&mut self) {
            self.quits += 1;
        }
    }

    fn observed_menu() -> (MainMenu, Rc<RefCell<Counts>>) {
        let mut menu = MainMenu::new();
        let counts = Rc::new(RefCell::new(Counts::default()));
        menu.subscribe(Box::new(counts.clone()));
        (menu, counts)
    }

    #[test]
    fn start_enters_game_and_notifies() {
        let (mut menu, counts) = observed_menu();
        assert_eq!(menu.screen(), Screen::MainMenu);
        assert!(!menu.is_game_started());

        assert_eq!(menu.press(MenuButton::Start), MenuAction::StartGame);

        assert!(menu.is_game_started());
        assert_eq!(menu.screen(), Screen::Game);
        assert_eq!(counts.borrow().starts, 1);
    }

    #[test]
    fn continue_enters_game_without_start_notification() {
        let (mut menu, counts) = observed_menu();

        assert_eq!(menu.press(MenuButton::Continue), MenuAction::StartGame);

        assert!(menu.is_game_started());
        assert_eq!(menu.screen(), Screen::Game);
        assert_eq!(counts.borrow().starts, 0);
    }

    #[test]
    fn settings_and_credits_keep_menu_open() {
        let (mut menu, counts) = observed_menu();

        assert_eq!(menu.press(MenuButton::Settings), MenuAction::OpenSettings);
        assert_eq!(menu.press(MenuButton::Credits), MenuAction::OpenCredits);

        assert_eq!(menu.screen(), Screen::MainMenu);
        assert!(!menu.is_game_started());
        assert_eq!(counts.borrow().starts + counts.borrow().quits, 0);
    }

    #[test]
    fn quit_notifies_observers() {
        let (mut menu, counts) = observed_menu();

        assert_eq!(menu.press(MenuButton::Quit), MenuAction::Quit);

        assert!(menu.quit_requested());
        assert_eq!(counts.borrow().quits, 1);
    }

    #[test]
    fn buttons_ignored_once_in_game() {
        let (mut menu, counts) = observed_menu();
        menu.press(MenuButton::Start);

        assert_eq!(menu.press(MenuButton::Start), MenuAction::Continue);
        assert_eq!(menu.press(MenuButton::Quit), MenuAction::Continue);

        assert_eq!(counts.borrow().starts, 1);
        assert!(!menu.quit_requested());
    }

    #[test]
    fn button_names_parse() {
        assert_eq!("start".parse::<MenuButton>(), Ok(MenuButton::Start));
        assert_eq!(" Credits ".parse::<MenuButton>(), Ok(MenuButton::Credits));
        assert_eq!(
            "options".parse::<MenuButton>(),
            Err(UnknownButton("options".into()))
        );

        let button: MenuButton = serde_json::from_str(r#""continue""#).unwrap();
        assert_eq!(button, MenuButton::Continue);
    }
}
