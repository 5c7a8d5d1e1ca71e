//! Frames-per-second counter and its overlay.

use crate::term::{CellStyle, FrameBuffer, Rgb};

const WINDOW_MS: u64 = 1000;

#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    visible: bool,
    frames: u32,
    window_start_ms: Option<u64>,
    fps: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        log::debug!("metrics overlay {}", if self.visible { "on" } else { "off" });
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Frames presented during the last full one-second window.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Count one presented frame.
    pub fn record_frame(&mut self, now_ms: u64) {
        let start = *self.window_start_ms.get_or_insert(now_ms);
        self.frames += 1;
        let elapsed = now_ms.saturating_sub(start);
        if elapsed >= WINDOW_MS {
            self.fps = ((self.frames as u64 * 1000) / elapsed) as u32;
            self.frames = 0;
            self.window_start_ms = Some(now_ms);
        }
    }

    /// Draw `NN fps` in the top-left corner when visible.
    pub fn draw(&self, fb: &mut FrameBuffer) {
        if !self.visible {
            return;
        }
        let style = CellStyle::fg(Rgb::new(120, 255, 120)).bold();
        fb.put_u32(0, 0, self.fps, style);
        let digits = self.fps.checked_ilog10().unwrap_or(0) as u16 + 1;
        fb.put_str(digits, 0, " fps", style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_frames_per_window() {
        let mut fps = FpsCounter::new();
        for i in 0..=60 {
            fps.record_frame(i * 1000 / 60);
        }
        assert_eq!(fps.fps(), 61);
    }

    #[test]
    fn overlay_only_when_visible() {
        let mut fb = FrameBuffer::new(10, 1);
        let mut fps = FpsCounter::new();
        fps.fps = 58;
        fps.draw(&mut fb);
        assert_eq!(fb.get(0, 0).map(|c| c.ch), Some(' '));

        fps.toggle();
        fps.draw(&mut fb);
        let text: String = (0..10).filter_map(|x| fb.get(x, 0)).map(|c| c.ch).collect();
        assert_eq!(text, "58 fps    ");
    }
}
