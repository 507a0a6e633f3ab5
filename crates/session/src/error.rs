use std::path::PathBuf;

use thiserror::Error;
use tile_core::CoreError;
use tile_engine::ConfigError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("storage I/O failed at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("stored value for {key:?} is not valid")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown policy {0:?}")]
    UnknownPolicy(String),
}
