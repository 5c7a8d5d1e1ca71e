use crossterm::event::KeyCode;

use crate::app::AppContext;
use crate::assets::{load_art, Art};
use crate::engine::Screen;
use crate::hiscore::HighScoreEntry;
use crate::input::InputEvent;
use crate::screens::widgets::ButtonList;
use crate::term::{text, CellStyle, Rgb};
use crate::types::{GameMode, ScreenId};

const BUTTONS: &[&str] = &["Main Menu"];

pub struct HighScoreTableScreen {
    art: Option<String>,
    mode: GameMode,
    rows: Vec<HighScoreEntry>,
    buttons: ButtonList,
    done: bool,
}

impl HighScoreTableScreen {
    pub fn new() -> Self {
        Self {
            art: None,
            mode: GameMode::default(),
            rows: Vec::new(),
            buttons: ButtonList::new(BUTTONS),
            done: false,
        }
    }
}

impl Default for HighScoreTableScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn format_row(rank: usize, entry: &HighScoreEntry) -> String {
    format!(
        "{:>2}. {:<16} {:>7} {:>5}",
        rank, entry.name, entry.score, entry.lines
    )
}

impl Screen<InputEvent, AppContext> for HighScoreTableScreen {
    fn id(&self) -> ScreenId {
        ScreenId::HighScoreTable
    }

    fn init(&mut self, ctx: &mut AppContext) {
        self.art = load_art(&ctx.config.asset_dir, Art::HighScores);
        self.mode = ctx.config.game_mode();
        self.rows = ctx.hiscores.read(self.mode);
    }

    fn handle_event(&mut self, event: &InputEvent, _ctx: &mut AppContext) {
        if let InputEvent::Key(key) = event {
            if key.code == KeyCode::Esc {
                self.done = true;
                return;
            }
        }
        if self.buttons.handle_event(event).is_some() {
            self.done = true;
        }
    }

    fn update(&mut self, now_ms: u64, _ctx: &mut AppContext) -> ScreenId {
        self.buttons.update(now_ms);
        if self.done {
            ScreenId::Menu
        } else {
            ScreenId::HighScoreTable
        }
    }

    fn render(&mut self, ctx: &mut AppContext) {
        let fb = ctx.begin_frame();
        let art = self.art.as_deref().unwrap_or("HIGH SCORES");
        let (_, art_h) = text::measure(art);
        let table_h = self.rows.len() as u16 + 2;
        let mut y = fb.height().saturating_sub(art_h + table_h + 4) / 2;

        text::draw_centered(fb, y, art, CellStyle::fg(Rgb::new(255, 200, 90)).bold());
        y += art_h + 1;

        let header = format!("    {:<16} {:>7} {:>5}", "NAME", "SCORE", "LINES");
        let left = text::draw_centered(fb, y, &header, CellStyle::default().bold()).x;
        y += 1;
        text::draw(
            fb,
            left,
            y,
            self.mode.name(),
            CellStyle::fg(Rgb::new(120, 120, 130)),
        );
        y += 1;

        for (i, entry) in self.rows.iter().enumerate() {
            let style = if entry.score > 0 {
                CellStyle::default()
            } else {
                CellStyle::fg(Rgb::new(100, 100, 110))
            };
            text::draw(fb, left, y, &format_row(i + 1, entry), style);
            y += 1;
        }

        let center = fb.width() / 2;
        self.buttons.render(fb, center, y + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::input::KeyInput;

    #[test]
    fn shows_padded_table() {
        let mut ctx = AppContext::headless(Config::default());
        ctx.hiscores.submit(GameMode::Standard, "ada", 90, 4);

        let mut screen = HighScoreTableScreen::new();
        screen.init(&mut ctx);
        assert_eq!(screen.rows.len(), crate::types::HIGH_SCORE_COUNT);
        assert_eq!(format_row(1, &screen.rows[0]), " 1. ada                   90     4");
        assert_eq!(screen.rows[1].name, "-");
    }

    #[test]
    fn enter_or_escape_returns_to_menu() {
        let mut ctx = AppContext::headless(Config::default());
        for code in [KeyCode::Enter, KeyCode::Esc] {
            let mut screen = HighScoreTableScreen::new();
            assert_eq!(screen.update(0, &mut ctx), ScreenId::HighScoreTable);
            screen.handle_event(&InputEvent::Key(KeyInput::new(code)), &mut ctx);
            assert_eq!(screen.update(16, &mut ctx), ScreenId::Menu);
        }
    }
}
