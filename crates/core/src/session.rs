//! Game session - board, active piece, scoring and drop timing for one play-through.
//!
//! The session is driven by [`GameSession::tick`] once per frame with the
//! current clock reading and whatever commands the player queued. It never
//! renders and never fails: everything it has to report comes back as a
//! `bool` or a [`SessionSignal`].
//!
//! Per-session states:
//!
//! - no active piece: the next tick spawns one
//! - piece falling: gravity moves it down every drop interval
//! - line clearing: folded into the tick that locks a piece
//! - session over: a freshly spawned piece collided, reported by `tick`

use crate::board::Board;
use crate::pieces::PieceDefinition;
use crate::selector::{CatalogSelector, PieceSelector};
use crate::types::{
    GameMode, LateralCommand, PieceKind, RotateDirection, Rotation, SessionSignal, BOARD_HEIGHT,
    DROP_INTERVAL_FLOOR_MS, DROP_INTERVAL_MS, DROP_INTERVAL_STEP_MS, HARD_DROP_INTERVAL_MS,
    LINES_PER_SPEEDUP, LINE_SCORE, MOVE_REPEAT_MS,
};

/// The falling piece: a catalog definition plus where and how it sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePiece {
    definition: &'static PieceDefinition,
    pub x: i8,
    /// May be negative while the piece is still above the visible board.
    pub y: i8,
    pub rotation: Rotation,
}

impl ActivePiece {
    pub fn new(definition: &'static PieceDefinition, x: i8, y: i8, rotation: Rotation) -> Self {
        Self {
            definition,
            x,
            y,
            rotation,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.definition.kind()
    }

    pub fn definition(&self) -> &'static PieceDefinition {
        self.definition
    }

    /// Absolute board coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.definition
            .blocks(self.rotation)
            .iter()
            .map(move |&(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Read-only result of a finished session, handed to the game-over screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub mode: GameMode,
    pub score: u32,
    pub lines: u32,
}

/// Complete state of one play-through.
#[derive(Debug, Clone)]
pub struct GameSession<S: PieceSelector = CatalogSelector> {
    selector: S,
    mode: GameMode,
    board: Board,
    active: Option<ActivePiece>,
    score: u32,
    lines: u32,
    drop_interval_ms: u64,
    hard_drop: bool,
    over: bool,
    last_move_ms: Option<u64>,
    last_rotate_ms: Option<u64>,
    last_drop_ms: u64,
}

impl<S: PieceSelector> GameSession<S> {
    /// Create a session for `mode`. No piece is active until the first tick.
    pub fn new(mode: GameMode, selector: S) -> Self {
        let mut session = Self {
            selector,
            mode,
            board: Board::new(mode.board_width()),
            active: None,
            score: 0,
            lines: 0,
            drop_interval_ms: DROP_INTERVAL_MS,
            hard_drop: false,
            over: false,
            last_move_ms: None,
            last_rotate_ms: None,
            last_drop_ms: 0,
        };
        session.reset(mode);
        session
    }

    /// Start over: empty board sized for `mode`, counters and timers cleared.
    pub fn reset(&mut self, mode: GameMode) {
        self.mode = mode;
        self.board.reset(mode.board_width());
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.drop_interval_ms = DROP_INTERVAL_MS;
        self.hard_drop = false;
        self.over = false;
        self.last_move_ms = None;
        self.last_rotate_ms = None;
        self.last_drop_ms = 0;
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity interval, ignoring any hard drop in progress.
    pub fn drop_interval_ms(&self) -> u64 {
        self.drop_interval_ms
    }

    pub fn hard_drop_active(&self) -> bool {
        self.hard_drop
    }

    /// True once a tick has reported [`SessionSignal::SessionOver`].
    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            mode: self.mode,
            score: self.score,
            lines: self.lines,
        }
    }

    /// Spawn the next piece if none is active.
    ///
    /// The piece starts centered (column `width / 2 - 1`) one row above the
    /// board, in whatever rotation the selector picks. Returns false when that
    /// position is already blocked, which ends the session.
    pub fn try_spawn(&mut self) -> bool {
        if self.active.is_some() {
            return true;
        }

        let definition = self.selector.select(self.mode);
        let rotation = self.selector.initial_rotation();
        let x = (self.board.width() / 2) as i8 - 1;
        let y = -1;

        if !self.can_place(definition, rotation, x, y) {
            log::debug!(
                "spawn of {} blocked at ({}, {}), score {}",
                definition.kind().as_str(),
                x,
                y,
                self.score
            );
            return false;
        }

        self.active = Some(ActivePiece::new(definition, x, y, rotation));
        true
    }

    /// Whether `definition` in `rotation` fits with its origin at `(x, y)`.
    ///
    /// Cells above the board (row < 0) only have to be inside the side walls.
    pub fn can_place(
        &self,
        definition: &PieceDefinition,
        rotation: Rotation,
        x: i8,
        y: i8,
    ) -> bool {
        let width = self.board.width() as i16;
        let height = BOARD_HEIGHT as i16;

        definition.blocks(rotation).iter().all(|&(dx, dy)| {
            let cx = x as i16 + dx as i16;
            let cy = y as i16 + dy as i16;
            if cx < 0 || cx >= width || cy >= height {
                return false;
            }
            cy < 0 || !self.board.is_occupied(cx as i8, cy as i8)
        })
    }

    /// Translate the active piece if the target position is free.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let (x, y) = (active.x + dx, active.y + dy);
        if !self.can_place(active.definition, active.rotation, x, y) {
            return false;
        }

        self.active = Some(ActivePiece { x, y, ..active });
        true
    }

    /// Turn the active piece one step in place. There are no wall kicks.
    pub fn try_rotate(&mut self, direction: RotateDirection) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotation = active.rotation.rotate(direction);
        if !self.can_place(active.definition, rotation, active.x, active.y) {
            return false;
        }

        self.active = Some(ActivePiece { rotation, ..active });
        true
    }

    /// Whether the active piece rests on the floor or on locked blocks.
    pub fn is_grounded(&self) -> bool {
        match self.active {
            Some(a) => !self.can_place(a.definition, a.rotation, a.x, a.y + 1),
            None => false,
        }
    }

    /// Write the active piece into the board and award its value.
    ///
    /// The piece must exist and be unable to fall. Violating that is a bug in
    /// the caller: debug builds panic, release builds log it and leave the
    /// session untouched.
    ///
    /// Cells above row 0 are discarded, so a piece resting entirely above the
    /// board vanishes but still scores.
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active else {
            debug_assert!(false, "lock_piece called without an active piece");
            log::error!("lock_piece called without an active piece");
            return;
        };

        if !self.is_grounded() {
            debug_assert!(false, "lock_piece called while the piece can still fall");
            log::error!(
                "lock_piece called while {} at ({}, {}) can still fall",
                active.kind().as_str(),
                active.x,
                active.y
            );
            return;
        }

        let kind = active.kind();
        for (x, y) in active.cells() {
            // Cells still above the board have nowhere to go.
            self.board.set(x, y, Some(kind));
        }

        self.score = self.score.saturating_add(active.definition.value());
        self.active = None;
        self.hard_drop = false;
    }

    /// Remove every full row, bottom to top, and award the line bonus.
    ///
    /// After a row is removed the same index holds what used to be above it,
    /// so it is examined again before moving up.
    pub fn clear_completed_lines(&mut self) -> u32 {
        let mut cleared = 0u32;
        let mut y = BOARD_HEIGHT as usize;

        while y > 0 {
            if self.board.is_row_full(y - 1) {
                self.board.clear_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }

        if cleared > 0 {
            self.lines = self.lines.saturating_add(cleared);
            self.score = self.score.saturating_add(cleared * LINE_SCORE);
            self.drop_interval_ms = gravity_for_lines(self.lines);
            log::debug!(
                "cleared {} line(s), total {}, drop interval {}ms",
                cleared,
                self.lines,
                self.drop_interval_ms
            );
        }

        cleared
    }

    /// Advance the session to `now_ms`.
    ///
    /// Lateral and rotate commands are each throttled to one per
    /// [`MOVE_REPEAT_MS`]; the throttle restarts on every attempt, whether or
    /// not the piece could move. A hard-drop request stays in effect until the
    /// current piece locks; made with no piece in play, it carries over to the
    /// piece this tick spawns.
    pub fn tick(
        &mut self,
        now_ms: u64,
        lateral: Option<LateralCommand>,
        rotate: Option<RotateDirection>,
        hard_drop_requested: bool,
    ) -> SessionSignal {
        if self.over {
            return SessionSignal::SessionOver;
        }

        if let Some(cmd) = lateral {
            if throttle_elapsed(self.last_move_ms, now_ms) {
                self.try_move(cmd.dx(), 0);
                self.last_move_ms = Some(now_ms);
            }
        }

        if let Some(direction) = rotate {
            if throttle_elapsed(self.last_rotate_ms, now_ms) {
                self.try_rotate(direction);
                self.last_rotate_ms = Some(now_ms);
            }
        }

        if hard_drop_requested {
            self.hard_drop = true;
        }

        let interval = if self.hard_drop {
            HARD_DROP_INTERVAL_MS
        } else {
            self.drop_interval_ms
        };

        if self.active.is_some() && now_ms.saturating_sub(self.last_drop_ms) > interval {
            self.last_drop_ms = now_ms;
            if !self.try_move(0, 1) {
                self.lock_piece();
                self.clear_completed_lines();
                if !self.try_spawn() {
                    return self.finish();
                }
            }
        }

        if self.active.is_none() {
            if !self.try_spawn() {
                return self.finish();
            }
            self.last_drop_ms = now_ms;
        }

        SessionSignal::Continue
    }

    fn finish(&mut self) -> SessionSignal {
        log::info!(
            "session over in {} mode: score {}, lines {}",
            self.mode.name(),
            self.score,
            self.lines
        );
        self.over = true;
        SessionSignal::SessionOver
    }
}

impl GameSession<CatalogSelector> {
    /// Session dealing random pieces from a seeded generator.
    pub fn seeded(mode: GameMode, seed: u32) -> Self {
        Self::new(mode, CatalogSelector::seeded(seed))
    }
}

fn throttle_elapsed(last_ms: Option<u64>, now_ms: u64) -> bool {
    match last_ms {
        Some(last) => now_ms.saturating_sub(last) >= MOVE_REPEAT_MS,
        None => true,
    }
}

/// Gravity interval after `lines` cleared lines.
pub fn gravity_for_lines(lines: u32) -> u64 {
    let steps = (lines / LINES_PER_SPEEDUP) as u64;
    DROP_INTERVAL_MS
        .saturating_sub(steps.saturating_mul(DROP_INTERVAL_STEP_MS))
        .max(DROP_INTERVAL_FLOOR_MS)
}
