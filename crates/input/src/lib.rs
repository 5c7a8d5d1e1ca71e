//! Terminal input.
//!
//! This crate is independent of any UI framework. It maps `crossterm` events
//! into [`engine::PlatformEvent`]s for the screen runtime and tracks held
//! gameplay keys (including on terminals without key-release events).

pub mod handler;
pub mod map;

pub use tessalatrix_engine as engine;
pub use tessalatrix_types as types;

pub use handler::{game_key, GameInput, GameKey, TickCommands, DEFAULT_DAS_MS};
pub use map::{map_event, should_quit, InputEvent, KeyInput};
