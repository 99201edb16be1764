//! High score persistence
//!
//! The leaderboard is the only persisted state. Backends:
//! - `JsonFileStore`: JSON file on disk, written via tmp file + rename
//! - `MemoryStore`: in-process, for tests and storage-less platforms

use std::fs;
use std::path::{Path, PathBuf};

use crate::highscores::HighScores;

/// Errors from reading or writing the leaderboard
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored high scores are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Somewhere the leaderboard can be loaded from and saved to
pub trait ScoreStore {
    /// Load the table. A store with nothing saved yet returns an empty table.
    fn load(&self) -> Result<HighScores>;
    fn save(&mut self, scores: &HighScores) -> Result<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    json: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<HighScores> {
        match &self.json {
            Some(json) => decode(json),
            None => Ok(HighScores::new()),
        }
    }

    fn save(&mut self, scores: &HighScores) -> Result<()> {
        self.json = Some(serde_json::to_string(scores)?);
        Ok(())
    }
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Result<HighScores> {
        match fs::read_to_string(&self.path) {
            Ok(json) => {
                let scores = decode(&json)?;
                log::info!("Loaded {} high scores", scores.entries.len());
                Ok(scores)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high scores found, starting fresh");
                Ok(HighScores::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, scores: &HighScores) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let json = serde_json::to_string_pretty(scores)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::info!("High scores saved ({} entries)", scores.entries.len());
        Ok(())
    }
}

fn decode(json: &str) -> Result<HighScores> {
    let mut scores: HighScores = serde_json::from_str(json)?;
    scores.sanitize();
    Ok(scores)
}
