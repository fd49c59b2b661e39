//! File logging.
//!
//! The terminal belongs to the UI, so logs go to a file. Watch them with
//! `tail -f` from another terminal.

use std::fs::File;
use std::path::{Path, PathBuf};

use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log file {path:?}: {source}")]
    FileCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a logger is already installed")]
    AlreadyInitialized,
}

/// Install a global logger writing to `path` at `level`.
pub fn init_file(path: &Path, level: LevelFilter) -> Result<(), LoggingError> {
    let file = File::create(path).map_err(|source| LoggingError::FileCreation {
        path: path.to_path_buf(),
        source,
    })?;
    WriteLogger::init(level, Config::default(), file)
        .map_err(|_| LoggingError::AlreadyInitialized)
}
