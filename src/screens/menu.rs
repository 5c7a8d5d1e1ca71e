use crossterm::event::KeyCode;

use crate::app::AppContext;
use crate::assets::{load_art, Art};
use crate::engine::Screen;
use crate::input::InputEvent;
use crate::screens::widgets::ButtonList;
use crate::term::{text, CellStyle, Rgb};
use crate::types::ScreenId;

const ITEMS: &[&str] = &["New Game", "High Scores", "Exit"];
const TARGETS: [ScreenId; 3] = [ScreenId::Game, ScreenId::HighScoreTable, ScreenId::Exit];

pub struct MenuScreen {
    art: Option<String>,
    buttons: ButtonList,
    next: ScreenId,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self {
            art: None,
            buttons: ButtonList::new(ITEMS),
            next: ScreenId::Menu,
        }
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen<InputEvent, AppContext> for MenuScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Menu
    }

    fn init(&mut self, ctx: &mut AppContext) {
        self.art = load_art(&ctx.config.asset_dir, Art::Title);
    }

    fn handle_event(&mut self, event: &InputEvent, _ctx: &mut AppContext) {
        if let InputEvent::Key(key) = event {
            if key.code == KeyCode::Esc {
                self.next = ScreenId::Exit;
                return;
            }
        }
        if let Some(i) = self.buttons.handle_event(event) {
            log::debug!("menu: {}", ITEMS[i]);
            self.next = TARGETS[i];
        }
    }

    fn update(&mut self, now_ms: u64, _ctx: &mut AppContext) -> ScreenId {
        self.buttons.update(now_ms);
        self.next
    }

    fn render(&mut self, ctx: &mut AppContext) {
        let fb = ctx.begin_frame();
        let art = self.art.as_deref().unwrap_or("TESSALATRIX");
        let (_, h) = text::measure(art);
        let top = fb.height().saturating_sub(h + 8) / 2;
        text::draw_centered(fb, top, art, CellStyle::fg(Rgb::new(120, 200, 255)).bold());
        let center = fb.width() / 2;
        self.buttons.render(fb, center, top + h + 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::input::KeyInput;

    fn press(menu: &mut MenuScreen, ctx: &mut AppContext, code: KeyCode) {
        menu.handle_event(&InputEvent::Key(KeyInput::new(code)), ctx);
    }

    #[test]
    fn enter_starts_game() {
        let mut ctx = AppContext::headless(Config::default());
        let mut menu = MenuScreen::new();
        assert_eq!(menu.update(0, &mut ctx), ScreenId::Menu);
        press(&mut menu, &mut ctx, KeyCode::Enter);
        assert_eq!(menu.update(16, &mut ctx), ScreenId::Game);
    }

    #[test]
    fn up_wraps_to_exit() {
        let mut ctx = AppContext::headless(Config::default());
        let mut menu = MenuScreen::new();
        press(&mut menu, &mut ctx, KeyCode::Up);
        press(&mut menu, &mut ctx, KeyCode::Enter);
        assert_eq!(menu.update(0, &mut ctx), ScreenId::Exit);
    }

    #[test]
    fn click_opens_high_scores() {
        let mut ctx = AppContext::headless(Config::default());
        let mut menu = MenuScreen::new();
        menu.render(&mut ctx);
        let target = (0..ctx.canvas.height())
            .find(|&y| {
                (0..ctx.canvas.width())
                    .filter_map(|x| ctx.canvas.get(x, y))
                    .map(|c| c.ch)
                    .collect::<String>()
                    .contains("High Scores")
            })
            .unwrap();
        menu.handle_event(
            &InputEvent::MouseDown {
                column: ctx.canvas.width() / 2,
                row: target,
            },
            &mut ctx,
        );
        assert_eq!(menu.update(0, &mut ctx), ScreenId::HighScoreTable);
    }
}
