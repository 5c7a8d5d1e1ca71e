//! The five application screens and the factory the runtime builds them with.

mod game;
mod hstable;
mod menu;
mod over;
mod splash;
pub mod widgets;

pub use game::GameScreen;
pub use hstable::HighScoreTableScreen;
pub use menu::MenuScreen;
pub use over::GameOverScreen;
pub use splash::SplashScreen;

use crate::app::AppContext;
use crate::engine::{Screen, ScreenFactory};
use crate::input::InputEvent;
use crate::types::ScreenId;

/// Builds a fresh screen for every activation.
pub struct AppScreens;

impl ScreenFactory<InputEvent, AppContext> for AppScreens {
    fn create(&mut self, id: ScreenId) -> Option<Box<dyn Screen<InputEvent, AppContext>>> {
        let screen: Box<dyn Screen<InputEvent, AppContext>> = match id {
            ScreenId::Splash => Box::new(SplashScreen::new()),
            ScreenId::Menu => Box::new(MenuScreen::new()),
            ScreenId::HighScoreTable => Box::new(HighScoreTableScreen::new()),
            ScreenId::Game => Box::new(GameScreen::new()),
            ScreenId::GameOver => Box::new(GameOverScreen::new()),
            ScreenId::Exit => return None,
        };
        Some(screen)
    }
}
