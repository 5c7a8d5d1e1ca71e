//! Text layout helpers on top of [`FrameBuffer`].
//!
//! Text may span several lines; every helper works on whole blocks so the
//! same calls draw a one-word label or a multi-line piece of ASCII art.

use crate::fb::{CellStyle, FrameBuffer, Rect};

/// Width (longest line, in chars) and height (line count) of a text block.
pub fn measure(text: &str) -> (u16, u16) {
    let mut w = 0u16;
    let mut h = 0u16;
    for line in text.lines() {
        w = w.max(line.chars().count().min(u16::MAX as usize) as u16);
        h = h.saturating_add(1);
    }
    (w, h)
}

/// Draw a text block with its top-left corner at `(x, y)`. Returns the
/// covered rectangle.
pub fn draw(fb: &mut FrameBuffer, x: u16, y: u16, text: &str, style: CellStyle) -> Rect {
    for (i, line) in text.lines().enumerate() {
        fb.put_str(x, y.saturating_add(i as u16), line, style);
    }
    let (w, h) = measure(text);
    Rect::new(x, y, w, h)
}

/// Draw a text block horizontally centered on column `center_x`.
pub fn draw_around(
    fb: &mut FrameBuffer,
    center_x: u16,
    y: u16,
    text: &str,
    style: CellStyle,
) -> Rect {
    let (w, _) = measure(text);
    draw(fb, center_x.saturating_sub(w / 2), y, text, style)
}

/// Draw a text block centered in the whole framebuffer width at row `y`.
pub fn draw_centered(fb: &mut FrameBuffer, y: u16, text: &str, style: CellStyle) -> Rect {
    let center = fb.width() / 2;
    draw_around(fb, center, y, text, style)
}
