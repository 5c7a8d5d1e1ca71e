//! Tessalatrix terminal runner (default binary).

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use tessalatrix::app::{self, AppContext};
use tessalatrix::config::{Args, Config};
use tessalatrix::hiscore::HighScoreStore;
use tessalatrix::logging;
use tessalatrix::term::{TerminalRenderer, Viewport};

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let (config, config_path) = Config::resolve(&args)?;

    if !logging::init(config.log_level, &config.log_file) {
        log::warn!("log file {} unavailable, using stderr", config.log_file);
    }
    log::info!("{}", tessalatrix::version_string());

    let hiscores = HighScoreStore::load(&config.hiscore_file);

    let mut term = TerminalRenderer::new();
    // Console log lines would land inside the game screen.
    logging::hold_console();
    if let Err(err) = term.enter() {
        logging::release_console();
        log::error!("failed to initialise the display: {err:#}");
        eprintln!("tessalatrix: failed to initialise the display: {err:#}");
        return Ok(ExitCode::FAILURE);
    }

    let (width, height) = TerminalRenderer::size().unwrap_or((80, 24));
    let mut ctx = AppContext::new(
        config,
        Some(config_path),
        hiscores,
        Viewport::new(width, height),
    );

    let result = app::run(&mut term, &mut ctx);

    // Always try to restore terminal state.
    let _ = term.exit();
    logging::release_console();
    if let Err(err) = &result {
        log::error!("{err:#}");
    }
    log::info!("shutting down");
    result.map(|()| ExitCode::SUCCESS)
}
