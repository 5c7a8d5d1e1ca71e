//! GameView: maps a `core::GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSession, PieceSelector};
use crate::fb::{CellStyle, FrameBuffer, Rect, Rgb};
use crate::types::PieceKind;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);

/// Block color for a piece tag.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::Square => Rgb::new(240, 220, 80),
        PieceKind::Long => Rgb::new(80, 220, 220),
        PieceKind::Ell => Rgb::new(255, 165, 0),
        PieceKind::Bell => Rgb::new(80, 120, 220),
        PieceKind::Tee => Rgb::new(200, 120, 220),
        PieceKind::Ess => Rgb::new(100, 220, 120),
        PieceKind::Bess => Rgb::new(220, 80, 80),
    }
}

/// Renders the well, locked blocks, the falling piece and a score panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer frame (border included) of the well for a board of the given size.
    pub fn well_rect(&self, board_w: u8, board_h: u8, viewport: Viewport) -> Rect {
        let frame_w = (board_w as u16) * self.cell_w + 2;
        let frame_h = (board_h as u16) * self.cell_h + 2;
        Rect::new(
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        )
    }

    /// Render the session into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into<S: PieceSelector>(
        &self,
        session: &GameSession<S>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let board = session.board();
        let well = self.well_rect(board.width(), board.height(), viewport);

        fb.fill_rect(
            well.x + 1,
            well.y + 1,
            well.w - 2,
            well.h - 2,
            ' ',
            CellStyle::default().on(WELL_BG),
        );
        fb.draw_border(well, CellStyle::fg(Rgb::new(200, 200, 200)));

        for y in 0..board.height() as i8 {
            for x in 0..board.width() as i8 {
                match board.get(x, y).flatten() {
                    Some(kind) => self.draw_block(fb, well, x, y, kind),
                    None => self.fill_cell(
                        fb,
                        well,
                        x,
                        y,
                        '·',
                        CellStyle::fg(Rgb::new(90, 90, 100)).on(WELL_BG).dimmed(),
                    ),
                }
            }
        }

        if let Some(active) = session.active() {
            for (x, y) in active.cells() {
                if !board.is_out_of_bounds(x, y) {
                    self.draw_block(fb, well, x, y, active.kind());
                }
            }
        }

        self.draw_side_panel(fb, session, viewport, well);

        if session.is_over() {
            let text = "GAME OVER";
            let x = well.x + well.w.saturating_sub(text.len() as u16) / 2;
            fb.put_str(
                x,
                well.y + well.h / 2,
                text,
                CellStyle::fg(Rgb::new(255, 255, 255)).bold(),
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<S: PieceSelector>(
        &self,
        session: &GameSession<S>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, well: Rect, x: i8, y: i8, kind: PieceKind) {
        let style = CellStyle::fg(piece_color(kind)).on(WELL_BG).bold();
        self.fill_cell(fb, well, x, y, '█', style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, well: Rect, x: i8, y: i8, ch: char, style: CellStyle) {
        if x < 0 || y < 0 {
            return;
        }
        let px = well.x + 1 + (x as u16) * self.cell_w;
        let py = well.y + 1 + (y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel<S: PieceSelector>(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession<S>,
        viewport: Viewport,
        well: Rect,
    ) {
        let panel_x = well.x.saturating_add(well.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let mut y = well.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, session.score(), value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, session.lines(), value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "MODE", label);
        fb.put_str(panel_x, y + 1, session.mode().name(), value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "DROP", label);
        fb.put_u32(panel_x, y + 1, session.drop_interval_ms() as u32, value);
        fb.put_str(
            panel_x + digits(session.drop_interval_ms() as u32),
            y + 1,
            "ms",
            value.dimmed(),
        );
    }
}

fn digits(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}
