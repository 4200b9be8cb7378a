//! Replay files on disk.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::core::{GameError, PlayerProfile};

use super::log::ReplayLog;

/// Failure reading or writing a replay file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("replay file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("replay file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: GameError,
    },
}

/// `"A (HARD) VS B [5x5]"`.
#[must_use]
pub fn replay_title(players: &[PlayerProfile], board_length: usize) -> String {
    let names: Vec<String> = players.iter().map(PlayerProfile::display_name).collect();
    format!("{} [{board_length}x{board_length}]", names.join(" VS "))
}

/// Write `bytes` to the first free `"{title} {n}.{extension}"` in `dir`,
/// counting from 1. Creates `dir` if needed.
///
/// Path separators and control characters in `title` become `_`, so the
/// file always lands directly in `dir`.
pub fn save(dir: &Path, title: &str, extension: &str, bytes: &[u8]) -> Result<PathBuf, StoreError> {
    fs::create_dir_all(dir).map_err(|source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let stem = file_stem(title);
    let mut n = 1u32;
    loop {
        let path = dir.join(format!("{stem} {n}.{extension}"));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(bytes)
                    .map_err(|source| StoreError::Io { path: path.clone(), source })?;
                info!(path = %path.display(), bytes = bytes.len(), "replay saved");
                return Ok(path);
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => n += 1,
            Err(source) => return Err(StoreError::Io { path, source }),
        }
    }
}

fn file_stem(title: &str) -> String {
    title
        .chars()
        .map(|c| if c == '/' || c == '\\' || c.is_control() { '_' } else { c })
        .collect()
}

/// Encode `log` and [`save`] it.
pub fn save_log(dir: &Path, title: &str, extension: &str, log: &ReplayLog) -> Result<PathBuf, StoreError> {
    save(dir, title, extension, &log.encode())
}

/// Read and decode a replay file.
pub fn load(path: &Path) -> Result<ReplayLog, StoreError> {
    let bytes = fs::read(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ReplayLog::decode(&bytes).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}
