//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for the terminal.
//! It avoids widget libraries and instead renders into a simple framebuffer
//! that is diffed and flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Give every screen the same drawing surface (text, boxes, blocks)
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod text;

pub use tessalatrix_core as core;
pub use tessalatrix_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
