use crossterm::event::KeyCode;

use crate::app::AppContext;
use crate::core::{CatalogSelector, GameSession, SimpleRng};
use crate::engine::Screen;
use crate::input::{GameInput, InputEvent};
use crate::term::{text, CellStyle, GameView, Rgb};
use crate::types::{ScreenId, SessionSignal};

const HINT: &str = "←/→ move  ↑/z rotate  ↓/space drop  esc quit";

/// Runs one game session and hands its result to the game-over screen.
pub struct GameScreen {
    session: GameSession,
    input: GameInput,
    view: GameView,
    /// Key events seen since the last update, stamped with that update's time.
    pending: Vec<InputEvent>,
    abandoned: bool,
}

impl GameScreen {
    pub fn new() -> Self {
        Self {
            session: GameSession::seeded(Default::default(), 1),
            input: GameInput::new(),
            view: GameView::default(),
            pending: Vec::new(),
            abandoned: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen<InputEvent, AppContext> for GameScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Game
    }

    fn init(&mut self, ctx: &mut AppContext) {
        let mode = ctx.config.game_mode();
        let rng = match ctx.config.seed {
            Some(seed) => SimpleRng::new(seed),
            None => SimpleRng::from_time(),
        };
        self.session = GameSession::new(mode, CatalogSelector::new(rng));
        self.input.reset();
        self.pending.clear();
        self.abandoned = false;
        ctx.handoff = None;
        log::info!("new {} game", mode.name());
    }

    fn handle_event(&mut self, event: &InputEvent, _ctx: &mut AppContext) {
        match *event {
            InputEvent::Key(key) if key.code == KeyCode::Esc => self.abandoned = true,
            InputEvent::Key(_) | InputEvent::KeyRelease(_) => self.pending.push(*event),
            _ => {}
        }
    }

    fn update(&mut self, now_ms: u64, ctx: &mut AppContext) -> ScreenId {
        for event in self.pending.drain(..) {
            match event {
                InputEvent::Key(key) => {
                    self.input.handle_key_press(key.code, now_ms);
                }
                InputEvent::KeyRelease(code) => self.input.handle_key_release(code),
                _ => {}
            }
        }

        let cmds = self.input.take_commands(now_ms);
        let signal = self
            .session
            .tick(now_ms, cmds.lateral, cmds.rotate, cmds.hard_drop);

        if signal == SessionSignal::SessionOver || self.abandoned {
            let summary = self.session.summary();
            log::info!(
                "game {}: score {} lines {}",
                if self.abandoned { "abandoned" } else { "over" },
                summary.score,
                summary.lines
            );
            ctx.handoff = Some(summary);
            return ScreenId::GameOver;
        }
        ScreenId::Game
    }

    fn render(&mut self, ctx: &mut AppContext) {
        let viewport = ctx.viewport;
        let fb = ctx.begin_frame();
        self.view.render_into(&self.session, viewport, fb);
        let bottom = fb.height().saturating_sub(1);
        text::draw_centered(fb, bottom, HINT, CellStyle::fg(Rgb::new(110, 110, 120)));
    }
}
