//! Per-mode high-score tables persisted as JSON.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::types::{GameMode, HIGH_SCORE_COUNT, NAME_LEN_MAX};

pub const UNKNOWN_PLAYER: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u32,
    pub lines: u32,
    /// `None` for the placeholder rows of a table that is not full yet.
    #[serde(default)]
    pub timestamp: Option<DateTime<Local>>,
}

impl HighScoreEntry {
    fn placeholder() -> Self {
        Self {
            name: "-".to_string(),
            score: 0,
            lines: 0,
            timestamp: None,
        }
    }
}

/// Trim, cap at [`NAME_LEN_MAX`] characters, and substitute
/// [`UNKNOWN_PLAYER`] for an empty name.
pub fn clean_name(name: &str) -> String {
    let name: String = name.trim().chars().take(NAME_LEN_MAX).collect();
    if name.is_empty() {
        UNKNOWN_PLAYER.to_string()
    } else {
        name
    }
}

/// High-score tables keyed by mode name.
///
/// Each table holds at most [`HIGH_SCORE_COUNT`] entries sorted by score,
/// highest first. A store without a path never touches the disk.
#[derive(Debug, Clone, Default)]
pub struct HighScoreStore {
    path: Option<PathBuf>,
    tables: BTreeMap<String, Vec<HighScoreEntry>>,
}

impl HighScoreStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the tables from `path`. A missing file starts empty; so does a
    /// corrupt one, after logging the problem.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tables = match read_tables(&path) {
            Ok(tables) => tables,
            Err(err) => {
                log::error!("discarding high scores: {err:#}");
                BTreeMap::new()
            }
        };

        let mut store = Self {
            path: Some(path),
            tables,
        };
        for table in store.tables.values_mut() {
            table.sort_by(|a, b| b.score.cmp(&a.score));
            table.truncate(HIGH_SCORE_COUNT);
        }
        log::info!("loaded high scores for {} mode(s)", store.tables.len());
        store
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Exactly [`HIGH_SCORE_COUNT`] rows for `mode`, padded with placeholders.
    pub fn read(&self, mode: GameMode) -> Vec<HighScoreEntry> {
        let mut rows = self.tables.get(mode.name()).cloned().unwrap_or_default();
        rows.resize_with(HIGH_SCORE_COUNT, HighScoreEntry::placeholder);
        rows
    }

    /// True when `score` beats the lowest row of the table.
    pub fn qualifies(&self, mode: GameMode, score: u32) -> bool {
        let lowest = self
            .tables
            .get(mode.name())
            .filter(|t| t.len() >= HIGH_SCORE_COUNT)
            .and_then(|t| t.last())
            .map_or(0, |e| e.score);
        score > lowest
    }

    /// Insert a result if it qualifies and persist the tables. Returns
    /// whether the entry was recorded and saved.
    pub fn submit(&mut self, mode: GameMode, name: &str, score: u32, lines: u32) -> bool {
        if !self.qualifies(mode, score) {
            return false;
        }

        let entry = HighScoreEntry {
            name: clean_name(name),
            score,
            lines,
            timestamp: Some(Local::now()),
        };
        log::info!(
            "new {} high score: {} {} ({} lines)",
            mode.name(),
            entry.name,
            score,
            lines
        );

        let table = self.tables.entry(mode.name().to_string()).or_default();
        // Ties go below existing entries.
        let pos = table
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(table.len());
        table.insert(pos, entry);
        table.truncate(HIGH_SCORE_COUNT);

        match self.save() {
            Ok(()) => true,
            Err(err) => {
                log::error!("failed to save high scores: {err:#}");
                false
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let text = serde_json::to_string_pretty(&self.tables)?;
        fs::write(path, text).with_context(|| format!("write {}", path.display()))
    }
}

fn read_tables(path: &Path) -> Result<BTreeMap<String, Vec<HighScoreEntry>>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))
}
