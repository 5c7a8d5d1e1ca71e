//! Lenient game-mode parsing for values that come from outside the program.

use crate::types::GameMode;

/// Resolve a mode name, falling back to the default mode when it is unknown.
pub fn resolve_mode(name: &str) -> GameMode {
    match GameMode::from_name(name) {
        Some(mode) => mode,
        None => {
            log::warn!(
                "unknown game mode {:?}, using {}",
                name,
                GameMode::default().name()
            );
            GameMode::default()
        }
    }
}
