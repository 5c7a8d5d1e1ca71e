//! Fixed frame budget.

use std::time::Duration;

use crate::types::FRAME_MS;

/// Who owns the wait between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingMode {
    /// The loop blocks until the frame budget has elapsed.
    Blocking,
    /// An outer scheduler calls us once per frame; never wait.
    External,
}

#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_ms: u64,
    mode: PacingMode,
    last_frame_ms: u64,
}

impl FramePacer {
    pub fn new(frame_ms: u64, mode: PacingMode) -> Self {
        Self {
            frame_ms: frame_ms.max(1),
            mode,
            last_frame_ms: 0,
        }
    }

    /// Pacer targeting `fps` frames per second.
    pub fn with_fps(fps: u32, mode: PacingMode) -> Self {
        Self::new(1000 / u64::from(fps.max(1)), mode)
    }

    pub fn frame_ms(&self) -> u64 {
        self.frame_ms
    }

    pub fn mode(&self) -> PacingMode {
        self.mode
    }

    /// Anchor the first frame at `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.last_frame_ms = now_ms;
    }

    /// Close the frame that ends at `now_ms` and return how long to block
    /// before starting the next one.
    pub fn finish_frame(&mut self, now_ms: u64) -> Duration {
        let elapsed = now_ms.saturating_sub(self.last_frame_ms);
        let wait = match self.mode {
            PacingMode::Blocking => self.frame_ms.saturating_sub(elapsed),
            PacingMode::External => 0,
        };
        self.last_frame_ms = now_ms + wait;
        Duration::from_millis(wait)
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(FRAME_MS, PacingMode::Blocking)
    }
}
