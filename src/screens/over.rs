use crossterm::event::KeyCode;

use crate::app::AppContext;
use crate::assets::{load_art, Art};
use crate::core::SessionSummary;
use crate::engine::Screen;
use crate::hiscore::clean_name;
use crate::input::InputEvent;
use crate::screens::widgets::ButtonList;
use crate::term::{text, CellStyle, Rgb};
use crate::types::{ScreenId, CURSOR_BLINK_MS, NAME_LEN_MAX};

const BUTTONS: &[&str] = &["Main Menu", "Play Again"];
const TARGETS: [ScreenId; 2] = [ScreenId::Menu, ScreenId::Game];

/// Shows the final score and, for a qualifying score, collects a name for
/// the high-score table.
pub struct GameOverScreen {
    art: Option<String>,
    summary: SessionSummary,
    /// True while a qualifying score still waits for its name.
    entering: bool,
    name: String,
    cursor_on: bool,
    buttons: ButtonList,
    next: ScreenId,
}

impl GameOverScreen {
    pub fn new() -> Self {
        Self {
            art: None,
            summary: SessionSummary::default(),
            entering: false,
            name: String::new(),
            cursor_on: true,
            buttons: ButtonList::new(BUTTONS),
            next: ScreenId::GameOver,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_entering_name(&self) -> bool {
        self.entering
    }

    fn edit_name(&mut self, code: KeyCode, ch: Option<char>) -> bool {
        match (code, ch) {
            (KeyCode::Backspace, _) => {
                self.name.pop();
                true
            }
            (_, Some(c)) if c == ' ' || c.is_ascii_graphic() => {
                if self.name.chars().count() < NAME_LEN_MAX {
                    self.name.push(c);
                }
                true
            }
            _ => false,
        }
    }

    fn activate(&mut self, index: usize, ctx: &mut AppContext) {
        if self.entering {
            self.entering = false;
            let name = clean_name(&self.name);
            let SessionSummary { mode, score, lines } = self.summary;
            if !ctx.hiscores.submit(mode, &name, score, lines) {
                log::warn!("high score for {name} was not recorded");
            }
            ctx.remember_player_name(&name);
        }
        self.next = TARGETS[index];
    }
}

impl Default for GameOverScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen<InputEvent, AppContext> for GameOverScreen {
    fn id(&self) -> ScreenId {
        ScreenId::GameOver
    }

    fn init(&mut self, ctx: &mut AppContext) {
        self.art = load_art(&ctx.config.asset_dir, Art::GameOver);
        self.summary = ctx.handoff.take().unwrap_or_else(|| {
            log::warn!("game over without a finished game");
            SessionSummary {
                mode: ctx.config.game_mode(),
                ..SessionSummary::default()
            }
        });
        self.entering = ctx.hiscores.qualifies(self.summary.mode, self.summary.score);
        self.name = ctx.config.player_name.chars().take(NAME_LEN_MAX).collect();
    }

    fn handle_event(&mut self, event: &InputEvent, ctx: &mut AppContext) {
        if let InputEvent::Key(key) = event {
            if key.code == KeyCode::Esc {
                self.activate(0, ctx);
                return;
            }
            if self.entering && self.edit_name(key.code, key.typed_char()) {
                return;
            }
        }
        if let Some(i) = self.buttons.handle_event(event) {
            self.activate(i, ctx);
        }
    }

    fn update(&mut self, now_ms: u64, _ctx: &mut AppContext) -> ScreenId {
        self.buttons.update(now_ms);
        self.cursor_on = (now_ms / CURSOR_BLINK_MS) % 2 == 0;
        self.next
    }

    fn render(&mut self, ctx: &mut AppContext) {
        let fb = ctx.begin_frame();
        let art = self.art.as_deref().unwrap_or("GAME OVER");
        let (_, art_h) = text::measure(art);
        let mut y = fb.height().saturating_sub(art_h + 12) / 2;

        text::draw_centered(fb, y, art, CellStyle::fg(Rgb::new(230, 90, 90)).bold());
        y += art_h + 1;

        let result = format!(
            "Score {}   Lines {}   ({})",
            self.summary.score,
            self.summary.lines,
            self.summary.mode.name()
        );
        text::draw_centered(fb, y, &result, CellStyle::default().bold());
        y += 2;

        if self.entering {
            text::draw_centered(
                fb,
                y,
                "New high score! Enter your name:",
                CellStyle::fg(Rgb::new(255, 220, 80)),
            );
            y += 1;
            let field = format!("{:<w$}", self.name, w = NAME_LEN_MAX);
            let rect = text::draw_centered(fb, y, &field, CellStyle::default().on(Rgb::new(40, 40, 60)));
            if self.cursor_on {
                let col = rect.x + self.name.chars().count().min(NAME_LEN_MAX - 1) as u16;
                fb.put_char(col, y, '_', CellStyle::fg(Rgb::new(255, 255, 255)).bold());
            }
        }
        y += 2;

        let center = fb.width() / 2;
        self.buttons.render(fb, center, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::hiscore::UNKNOWN_PLAYER;
    use crate::input::KeyInput;
    use crate::types::GameMode;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyInput::new(code))
    }

    fn ctx_with(score: u32, player: &str) -> AppContext {
        let mut ctx = AppContext::headless(Config {
            player_name: player.to_string(),
            ..Config::default()
        });
        ctx.handoff = Some(SessionSummary {
            mode: GameMode::Standard,
            score,
            lines: 3,
        });
        ctx
    }

    #[test]
    fn qualifying_score_collects_name() {
        let mut ctx = ctx_with(120, "bo");
        let mut over = GameOverScreen::new();
        over.init(&mut ctx);
        assert!(over.is_entering_name());
        assert_eq!(over.name(), "bo");
        assert!(ctx.handoff.is_none());

        over.handle_event(&key(KeyCode::Backspace), &mut ctx);
        over.handle_event(&InputEvent::Key(KeyInput { code: KeyCode::Char('x'), shift: true }), &mut ctx);
        over.handle_event(&key(KeyCode::Char('\u{7}')), &mut ctx);
        assert_eq!(over.name(), "bX");

        over.handle_event(&key(KeyCode::Down), &mut ctx);
        over.handle_event(&key(KeyCode::Enter), &mut ctx);
        assert_eq!(over.update(0, &mut ctx), ScreenId::Game);

        let rows = ctx.hiscores.read(GameMode::Standard);
        assert_eq!(rows[0].name, "bX");
        assert_eq!(rows[0].score, 120);
        assert_eq!(ctx.config.player_name, "bX");
    }

    #[test]
    fn submits_only_once() {
        let mut ctx = ctx_with(50, "");
        let mut over = GameOverScreen::new();
        over.init(&mut ctx);
        over.handle_event(&key(KeyCode::Enter), &mut ctx);
        over.handle_event(&key(KeyCode::Enter), &mut ctx);

        let rows = ctx.hiscores.read(GameMode::Standard);
        assert_eq!(rows[0].name, UNKNOWN_PLAYER);
        assert_eq!(rows[1].score, 0);
        assert_eq!(over.update(0, &mut ctx), ScreenId::Menu);
    }

    #[test]
    fn zero_score_skips_entry() {
        let mut ctx = ctx_with(0, "bo");
        let mut over = GameOverScreen::new();
        over.init(&mut ctx);
        assert!(!over.is_entering_name());
        over.handle_event(&key(KeyCode::Char('q')), &mut ctx);
        assert_eq!(over.name(), "bo");
    }

    #[test]
    fn missing_handoff_uses_empty_summary() {
        let mut ctx = AppContext::headless(Config::default());
        let mut over = GameOverScreen::new();
        over.init(&mut ctx);
        assert_eq!(over.summary.score, 0);
        assert!(!over.is_entering_name());
        over.handle_event(&key(KeyCode::Esc), &mut ctx);
        assert_eq!(over.update(0, &mut ctx), ScreenId::Menu);
    }

    #[test]
    fn name_is_capped() {
        let mut ctx = ctx_with(10, "");
        let mut over = GameOverScreen::new();
        over.init(&mut ctx);
        for _ in 0..NAME_LEN_MAX + 4 {
            over.handle_event(&key(KeyCode::Char('a')), &mut ctx);
        }
        assert_eq!(over.name().len(), NAME_LEN_MAX);
    }
}
