//! Key/value persistence for a single game.
//!
//! Three keys, each holding one JSON document: the board (rows with `null`
//! for empty cells), the current score and the best score.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use tile_core::{GameState, Grid};
use tile_engine::RuleConfig;

use crate::SessionError;

pub const BOARD_KEY: &str = "2048-game-board";
pub const SCORE_KEY: &str = "2048-current-score";
pub const BEST_SCORE_KEY: &str = "2048-best-score";

/// Raw string storage addressed by key.
pub trait Store {
    fn load(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), SessionError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Store for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.items.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open `dir`, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| SessionError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Store for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, SessionError> {
        let path = self.path(key);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SessionError::Io { path, source }),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        let path = self.path(key);
        fs::write(&path, value).map_err(|source| SessionError::Io { path, source })
    }
}

/// Write board, score and best score.
pub fn save_state<S: Store + ?Sized>(store: &mut S, state: &GameState) -> Result<(), SessionError> {
    store.save(BOARD_KEY, &to_json(BOARD_KEY, &state.grid)?)?;
    store.save(SCORE_KEY, &to_json(SCORE_KEY, &state.score)?)?;
    store.save(BEST_SCORE_KEY, &to_json(BEST_SCORE_KEY, &state.best_score)?)?;
    debug!("saved state (score {})", state.score);
    Ok(())
}

/// Read a saved game. `None` when no board is stored; missing scores read
/// as 0. The board must fit `config` and the status is recomputed.
pub fn load_state<S: Store + ?Sized>(
    store: &S,
    config: &RuleConfig,
) -> Result<Option<GameState>, SessionError> {
    let Some(grid) = load_json::<Grid, _>(store, BOARD_KEY)? else {
        return Ok(None);
    };
    grid.validate(config.size)?;

    let score = load_json::<u64, _>(store, SCORE_KEY)?.unwrap_or(0);
    let best_score = load_best_score(store)?;
    if best_score < score {
        warn!("stored best score {best_score} below score {score}, raising it");
    }

    Ok(Some(GameState {
        status: config.evaluate(&grid),
        grid,
        score,
        best_score: best_score.max(score),
    }))
}

pub fn load_best_score<S: Store + ?Sized>(store: &S) -> Result<u64, SessionError> {
    Ok(load_json::<u64, _>(store, BEST_SCORE_KEY)?.unwrap_or(0))
}

fn load_json<T: DeserializeOwned, S: Store + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<T>, SessionError> {
    match store.load(key)? {
        Some(text) => serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| SessionError::Json {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

fn to_json<T: serde::Serialize + ?Sized>(key: &str, value: &T) -> Result<String, SessionError> {
    serde_json::to_string(value).map_err(|source| SessionError::Json {
        key: key.to_string(),
        source,
    })
}
