//! Application context shared by all screens, and the terminal main loop.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use crossterm::event;

use crate::config::{self, Config};
use crate::core::{Clock, MonotonicClock, SessionSummary};
use crate::engine::{
    FrameOutcome, FramePacer, GlobalEvent, PacingMode, RuntimeContext, ScreenFactory,
    ScreenRuntime,
};
use crate::hiscore::HighScoreStore;
use crate::input::{map_event, InputEvent};
use crate::metrics::FpsCounter;
use crate::screens::AppScreens;
use crate::term::{FrameBuffer, TerminalRenderer, Viewport};
use crate::types::ScreenId;

/// Everything screens share. Screens draw into `canvas`; the main loop
/// presents it after every rendered frame.
pub struct AppContext {
    pub config: Config,
    /// Where the remembered player name is written. `None` disables writing.
    pub config_path: Option<PathBuf>,
    pub hiscores: HighScoreStore,
    pub canvas: FrameBuffer,
    pub viewport: Viewport,
    pub metrics: FpsCounter,
    /// Result of the last game, handed from the game screen to the game-over
    /// screen.
    pub handoff: Option<SessionSummary>,
    full_redraw: bool,
}

impl AppContext {
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        hiscores: HighScoreStore,
        viewport: Viewport,
    ) -> Self {
        Self {
            config,
            config_path,
            hiscores,
            canvas: FrameBuffer::new(viewport.width, viewport.height),
            viewport,
            metrics: FpsCounter::new(),
            handoff: None,
            full_redraw: true,
        }
    }

    /// Context for headless use: defaults, in-memory scores, 80x24.
    pub fn headless(config: Config) -> Self {
        Self::new(config, None, HighScoreStore::in_memory(), Viewport::default())
    }

    /// Canvas sized to the viewport and cleared, ready for a screen to draw.
    pub fn begin_frame(&mut self) -> &mut FrameBuffer {
        self.canvas.resize(self.viewport.width, self.viewport.height);
        self.canvas.clear(Default::default());
        &mut self.canvas
    }

    /// True once after each resize.
    pub fn take_full_redraw(&mut self) -> bool {
        std::mem::take(&mut self.full_redraw)
    }

    pub fn remember_player_name(&mut self, name: &str) {
        if self.config.player_name == name {
            return;
        }
        self.config.player_name = name.to_string();
        if let Some(path) = &self.config_path {
            if let Err(err) = config::remember_player_name(path, name) {
                log::error!("failed to remember player name: {err:#}");
            }
        }
    }
}

impl RuntimeContext for AppContext {
    fn on_global(&mut self, event: GlobalEvent) {
        match event {
            GlobalEvent::ToggleMetrics => self.metrics.toggle(),
            GlobalEvent::Resize { width, height } => {
                log::debug!("resize to {width}x{height}");
                self.viewport = Viewport::new(width, height);
                self.full_redraw = true;
            }
        }
    }
}

/// Drive the screens until one of them exits or quit is requested.
pub fn run(term: &mut TerminalRenderer, ctx: &mut AppContext) -> Result<()> {
    let clock = MonotonicClock::new();
    let mut pacer = FramePacer::with_fps(ctx.config.frame_rate, PacingMode::Blocking);
    log::info!("frame budget {}ms", pacer.frame_ms());

    let screens: Box<dyn ScreenFactory<InputEvent, AppContext>> = Box::new(AppScreens);
    let Some(mut runtime) = ScreenRuntime::start(screens, ScreenId::Splash, ctx) else {
        bail!("no splash screen");
    };

    let mut events = Vec::new();
    pacer.start(clock.now_ms());
    while runtime.is_running() {
        while event::poll(Duration::ZERO)? {
            if let Some(ev) = map_event(event::read()?) {
                events.push(ev);
            }
        }

        let now = clock.now_ms();
        if runtime.frame(events.drain(..), now, ctx) == FrameOutcome::Rendered {
            if ctx.take_full_redraw() {
                term.invalidate();
            }
            ctx.metrics.record_frame(now);
            ctx.metrics.draw(&mut ctx.canvas);
            term.draw_swap(&mut ctx.canvas)?;
        }

        let wait = pacer.finish_frame(clock.now_ms());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
    }

    runtime.shutdown(ctx);
    Ok(())
}
