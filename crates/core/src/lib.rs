//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-piece rules: the piece catalog, the board,
//! and the per-session simulation. It has **no dependencies** on rendering,
//! input, or files, which makes it:
//!
//! - **Deterministic**: the same seed deals the same pieces
//! - **Testable**: sessions run headless against a manual clock
//! - **Portable**: any frontend can drive [`GameSession::tick`]
//!
//! # Module Structure
//!
//! - [`board`]: variable-width, 20-row grid with row clearing
//! - [`pieces`]: the seven shapes, their rotation tables and point values
//! - [`selector`]: the seam through which a session obtains its next piece
//! - [`session`]: board + active piece + score + drop timing
//! - [`rng`]: bounded random source and the LCG used by the game
//! - [`clock`]: monotonic millisecond clock, real and manual
//! - [`mode`]: lenient parsing of game modes coming from config or CLI
//!
//! # Rules
//!
//! - Pieces spawn centered one row above the board in a random rotation.
//! - Rotation turns in place; there are no wall kicks.
//! - A piece that cannot fall any further locks and scores its point value.
//! - Every completed row scores a flat bonus and removes itself.
//! - Gravity speeds up every ten cleared lines.
//! - The session ends when a new piece has nowhere to spawn.
//!
//! # Example
//!
//! ```
//! use tessalatrix_core::{GameSession, SessionSignal};
//! use tessalatrix_core::types::{GameMode, LateralCommand};
//!
//! let mut session = GameSession::seeded(GameMode::Standard, 12345);
//! assert_eq!(session.tick(0, None, None, false), SessionSignal::Continue);
//! assert!(session.active().is_some());
//!
//! session.tick(16, Some(LateralCommand::Left), None, false);
//! assert_eq!(session.score(), 0);
//! ```

pub mod board;
pub mod clock;
pub mod mode;
pub mod pieces;
pub mod rng;
pub mod selector;
pub mod session;

pub use tessalatrix_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use mode::resolve_mode;
pub use pieces::{catalog, definition, select, BlockOffset, PieceDefinition};
pub use rng::{RandomSource, SimpleRng};
pub use selector::{CatalogSelector, FixedSelector, PieceSelector};
pub use session::{gravity_for_lines, ActivePiece, GameSession, SessionSummary};
pub use types::SessionSignal;
