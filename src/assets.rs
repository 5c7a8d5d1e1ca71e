//! Text art shown on the non-game screens.

use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Art {
    Splash,
    Title,
    GameOver,
    HighScores,
}

impl Art {
    pub fn file_name(&self) -> &'static str {
        match self {
            Art::Splash => "splash.txt",
            Art::Title => "title.txt",
            Art::GameOver => "gameover.txt",
            Art::HighScores => "hiscore.txt",
        }
    }
}

/// Read `art` from `dir`. Failures are logged and the screen goes without.
pub fn load_art(dir: &Path, art: Art) -> Option<String> {
    let path = dir.join(art.file_name());
    match fs::read_to_string(&path) {
        Ok(text) => Some(text.trim_end().to_string()),
        Err(err) => {
            log::error!("failed to load {}: {err}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_art_is_none() {
        let dir = std::env::temp_dir().join("tessalatrix-no-such-assets");
        assert_eq!(load_art(&dir, Art::Title), None);
    }

    #[test]
    fn shipped_art_loads() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        for art in [Art::Splash, Art::Title, Art::GameOver, Art::HighScores] {
            let text = load_art(&dir, art).unwrap();
            assert!(!text.is_empty(), "{} is empty", art.file_name());
        }
    }
}
