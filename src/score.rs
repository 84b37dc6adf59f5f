use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SnakeError};

const APP_DIR_NAME: &str = "wrap-snake";
const SCORE_FILE_NAME: &str = "scores.json";

/// Storage for the best score, which outlives any single game.
pub trait HighScoreStore {
    /// Returns the stored high score, `0` when nothing has been stored yet.
    fn load(&self) -> Result<u32>;

    /// Replaces the stored high score.
    fn save(&mut self, score: u32) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// High score kept as a small JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the per-user data directory.
    #[must_use]
    pub fn at_default_location() -> Self {
        Self::new(scores_path())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonScoreStore {
    fn load(&self) -> Result<u32> {
        load_high_score_from_path(&self.path)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        save_high_score_to_path(&self.path, score)
    }
}

/// In-process store; clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    value: Rc<RefCell<Option<u32>>>,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn with_score(score: u32) -> Self {
        Self {
            value: Rc::new(RefCell::new(Some(score))),
        }
    }

    /// Returns the last saved value, if any.
    #[must_use]
    pub fn stored(&self) -> Option<u32> {
        *self.value.borrow()
    }
}

impl HighScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<u32> {
        Ok(self.stored().unwrap_or(0))
    }

    fn save(&mut self, score: u32) -> Result<()> {
        *self.value.borrow_mut() = Some(score);
        Ok(())
    }
}

fn load_high_score_from_path(path: &Path) -> Result<u32> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str::<ScoreFile>(&raw)
        .map(|file| file.high_score)
        .map_err(|source| SnakeError::ScoreFormat {
            path: path.to_path_buf(),
            source,
        })
}

fn save_high_score_to_path(path: &Path, score: u32) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = ScoreFile { high_score: score };
    let json = serde_json::to_string_pretty(&payload)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::error::SnakeError;

    use super::{HighScoreStore, JsonScoreStore, MemoryScoreStore};

    #[test]
    fn score_file_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let mut store = JsonScoreStore::new(dir.path().join("nested").join("scores.json"));

        store.save(420).expect("score save should succeed");

        assert_eq!(store.load().expect("load should succeed"), 420);
    }

    #[test]
    fn missing_score_file_returns_zero() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let store = JsonScoreStore::new(dir.path().join("scores.json"));

        assert_eq!(store.load().expect("missing file should load as 0"), 0);
    }

    #[test]
    fn malformed_score_file_returns_error() {
        let dir = tempfile::tempdir().expect("temp dir should be creatable");
        let path = dir.path().join("scores.json");
        fs::write(&path, "not-json").expect("test file write should succeed");

        let result = JsonScoreStore::new(path).load();

        assert!(matches!(result, Err(SnakeError::ScoreFormat { .. })));
    }

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryScoreStore::default();
        let mut writer = store.clone();

        assert_eq!(store.load().expect("memory load"), 0);
        writer.save(30).expect("memory save");

        assert_eq!(store.stored(), Some(30));
        assert_eq!(store.load().expect("memory load"), 30);
    }
}
