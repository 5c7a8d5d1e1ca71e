//! Configuration: built-in defaults, an optional JSON file, then the command line.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::core::resolve_mode;
use crate::types::GameMode;

pub const DEFAULT_CONFIG_FILE: &str = "tessalatrix.json";
pub const DEFAULT_LOG_FILE: &str = "tessalatrix.log";
pub const DEFAULT_HISCORE_FILE: &str = "tessalatrix-scores.json";
pub const DEFAULT_ASSET_DIR: &str = "assets";
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Log verbosity, from quietest to noisiest.
///
/// `Always` disables the logger entirely; `Log` enables informational
/// messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Always,
    #[default]
    Error,
    Warn,
    Log,
    Trace,
}

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Always => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Log => LevelFilter::Info,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Falling-block puzzle game for the terminal.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tessalatrix", version, about, long_about = None)]
pub struct Args {
    /// JSON configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log verbosity.
    #[arg(short = 'l', long, value_enum, ignore_case = true)]
    pub loglevel: Option<LogLevel>,

    /// Log destination: a file path, `stdout` or `stderr`.
    #[arg(long, value_name = "PATH")]
    pub logfile: Option<String>,

    /// Seed for piece selection; every game replays the same pieces.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Game mode name.
    #[arg(long)]
    pub mode: Option<String>,

    /// Target frame rate.
    #[arg(long)]
    pub fps: Option<u32>,

    /// Default name offered when entering a high score.
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    pub log_file: String,
    pub player_name: String,
    pub hiscore_file: PathBuf,
    pub asset_dir: PathBuf,
    pub frame_rate: u32,
    pub game_mode: String,
    pub seed: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_file: DEFAULT_LOG_FILE.to_string(),
            player_name: String::new(),
            hiscore_file: PathBuf::from(DEFAULT_HISCORE_FILE),
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            frame_rate: DEFAULT_FRAME_RATE,
            game_mode: GameMode::default().name().to_string(),
            seed: None,
        }
    }
}

impl Config {
    /// Read a config file. A missing file yields the defaults; an unreadable
    /// or malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))
    }

    /// Overlay command-line values on top of this config.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(level) = args.loglevel {
            self.log_level = level;
        }
        if let Some(file) = &args.logfile {
            self.log_file = file.clone();
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        if let Some(mode) = &args.mode {
            self.game_mode = mode.clone();
        }
        if let Some(fps) = args.fps {
            self.frame_rate = fps;
        }
        if let Some(name) = &args.name {
            self.player_name = name.clone();
        }
    }

    /// Defaults, then the config file, then the command line. Also returns
    /// the config file path so settings can be written back later.
    pub fn resolve(args: &Args) -> Result<(Self, PathBuf)> {
        let path = args
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let mut config = Self::load(&path)?;
        config.apply_args(args);
        if config.frame_rate == 0 {
            config.frame_rate = DEFAULT_FRAME_RATE;
        }
        Ok((config, path))
    }

    /// The configured mode, falling back to the default for unknown names.
    pub fn game_mode(&self) -> GameMode {
        resolve_mode(&self.game_mode)
    }
}

/// Store `name` as the remembered player name in the config file at `path`,
/// keeping every other setting in that file as it is.
pub fn remember_player_name(path: &Path, name: &str) -> Result<()> {
    let mut doc = if path.exists() {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        serde_json::from_str::<serde_json::Value>(&text)
            .with_context(|| format!("parse config {}", path.display()))?
    } else {
        serde_json::Value::Object(Default::default())
    };

    let Some(obj) = doc.as_object_mut() else {
        anyhow::bail!("config {} is not a JSON object", path.display());
    };
    obj.insert(
        "player_name".to_string(),
        serde_json::Value::String(name.to_string()),
    );

    let text = serde_json::to_string_pretty(&doc)?;
    fs::write(path, text).with_context(|| format!("write config {}", path.display()))
}
