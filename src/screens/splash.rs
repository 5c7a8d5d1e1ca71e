use crate::app::AppContext;
use crate::assets::{load_art, Art};
use crate::engine::Screen;
use crate::input::InputEvent;
use crate::term::{text, CellStyle, Rgb};
use crate::types::{ScreenId, SPLASH_DURATION_MS};

const FADE_MS: u64 = 600;
const ART_COLOR: Rgb = Rgb::new(120, 200, 255);

/// Fades the logo in and out, then moves on to the menu. Any key or click
/// skips ahead.
#[derive(Default)]
pub struct SplashScreen {
    art: Option<String>,
    started_ms: Option<u64>,
    elapsed_ms: u64,
    skipped: bool,
}

impl SplashScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brightness for the current point of the fade, 0..=255.
    fn level(&self) -> u8 {
        let fade_in = self.elapsed_ms;
        let fade_out = SPLASH_DURATION_MS.saturating_sub(self.elapsed_ms);
        let t = fade_in.min(fade_out).min(FADE_MS);
        ((t * 255) / FADE_MS) as u8
    }
}

impl Screen<InputEvent, AppContext> for SplashScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Splash
    }

    fn init(&mut self, ctx: &mut AppContext) {
        self.art = load_art(&ctx.config.asset_dir, Art::Splash);
    }

    fn handle_event(&mut self, event: &InputEvent, _ctx: &mut AppContext) {
        if event.is_press() {
            self.skipped = true;
        }
    }

    fn update(&mut self, now_ms: u64, _ctx: &mut AppContext) -> ScreenId {
        let started = *self.started_ms.get_or_insert(now_ms);
        self.elapsed_ms = now_ms.saturating_sub(started);
        if self.skipped || self.elapsed_ms >= SPLASH_DURATION_MS {
            ScreenId::Menu
        } else {
            ScreenId::Splash
        }
    }

    fn render(&mut self, ctx: &mut AppContext) {
        let level = self.level();
        let fb = ctx.begin_frame();
        let art = self.art.as_deref().unwrap_or("TESSALATRIX");
        let (_, h) = text::measure(art);
        let top = fb.height().saturating_sub(h + 2) / 2;
        text::draw_centered(fb, top, art, CellStyle::fg(ART_COLOR.scaled(level)).bold());
        text::draw_centered(
            fb,
            top + h + 1,
            crate::version_string().as_str(),
            CellStyle::fg(Rgb::new(160, 160, 160).scaled(level)),
        );
    }
}
