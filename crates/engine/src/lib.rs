//! Screen state machine.
//!
//! Exactly one [`Screen`] is active at a time. The [`ScreenRuntime`] forwards
//! input to it, updates and renders it once per frame, and swaps it for a new
//! screen (built by a [`ScreenFactory`]) when it asks for a defined transition.
//!
//! ```text
//! Splash -> Menu -> { Game, HighScoreTable, Exit }
//! HighScoreTable -> Menu
//! Game -> GameOver -> { Menu, Game }
//! ```

pub mod pacer;
pub mod runtime;
pub mod screen;

pub use tessalatrix_types as types;

pub use pacer::{FramePacer, PacingMode};
pub use runtime::{FrameOutcome, GlobalEvent, PlatformEvent, RuntimeContext, ScreenRuntime};
pub use screen::{Screen, ScreenFactory};
