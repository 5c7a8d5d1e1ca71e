//! Tessalatrix: a falling-block puzzle game for the terminal.
//!
//! The game rules live in dedicated crates under `crates/` and are re-exported
//! here as `tessalatrix::{core,engine,input,term,types}`. This package adds the
//! application on top: configuration, logging, high scores, and the screens.

pub use tessalatrix_core as core;
pub use tessalatrix_engine as engine;
pub use tessalatrix_input as input;
pub use tessalatrix_term as term;
pub use tessalatrix_types as types;

pub mod app;
pub mod assets;
pub mod config;
pub mod hiscore;
pub mod logging;
pub mod metrics;
pub mod screens;

/// Program name and version, e.g. `Tessalatrix V0.3.001`.
pub fn version_string() -> String {
    let part = |s: &str| s.parse::<u32>().unwrap_or(0);
    format!(
        "Tessalatrix V{}.{}.{:03}",
        part(env!("CARGO_PKG_VERSION_MAJOR")),
        part(env!("CARGO_PKG_VERSION_MINOR")),
        part(env!("CARGO_PKG_VERSION_PATCH"))
    )
}
