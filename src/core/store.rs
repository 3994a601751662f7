//! # Todo Store
//!
//! Load/save the todo list as a single JSON file (`todos.json` by default).
//!
//! Reads fail open: a missing, unreadable or malformed file loads as an empty
//! list. Writes replace the whole file through `.tmp` + `rename()`, and a file
//! that was unreadable as a todo list is copied aside before it is replaced.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;
use tokio::fs;

use crate::core::todo::Todo;

/// Store path used when neither config, env nor CLI name one.
pub const DEFAULT_STORE_PATH: &str = "todos.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not a valid todo list: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode todo list: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Handle to the on-disk todo list.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the list, telling a missing file (empty list) apart from an
    /// unreadable or malformed one.
    pub async fn load_checked(&self) -> Result<Vec<Todo>, StoreError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No store at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&json).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Read the list; any failure yields an empty list.
    pub async fn load(&self) -> Vec<Todo> {
        match self.load_checked().await {
            Ok(todos) => {
                debug!("Loaded {} todos from {}", todos.len(), self.path.display());
                todos
            }
            Err(e) => {
                warn!("{}; treating it as empty", e);
                Vec::new()
            }
        }
    }

    /// Replace the stored list with `todos`.
    pub async fn save(&self, todos: &[Todo]) -> Result<(), StoreError> {
        self.preserve_corrupt(Local::now()).await?;
        atomic_write_json(&self.path, todos).await?;
        debug!("Saved {} todos to {}", todos.len(), self.path.display());
        Ok(())
    }

    /// Copy a malformed store aside so the next save does not destroy it.
    async fn preserve_corrupt(&self, now: DateTime<Local>) -> Result<Option<PathBuf>, StoreError> {
        let Err(StoreError::Corrupt { .. }) = self.load_checked().await else {
            return Ok(None);
        };
        let backup = backup_path(&self.path, now);
        fs::copy(&self.path, &backup)
            .await
            .map_err(|source| StoreError::Io {
                path: backup.clone(),
                source,
            })?;
        warn!(
            "Store {} was corrupt; previous contents kept at {}",
            self.path.display(),
            backup.display()
        );
        Ok(Some(backup))
    }
}

/// `<path>.corrupt-<YYYYMMDDTHHMMSS>`
fn backup_path(path: &Path, now: DateTime<Local>) -> PathBuf {
    with_suffix(path, &format!(".corrupt-{}", now.format("%Y%m%dT%H%M%S")))
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Atomically write `data` as pretty JSON to `path` (via `.tmp` + rename).
async fn atomic_write_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<(), StoreError> {
    let io_err = |source: io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !fs::try_exists(parent).await.map_err(io_err)?
    {
        info!("Creating store directory {}", parent.display());
        fs::create_dir_all(parent).await.map_err(io_err)?;
    }

    let json = serde_json::to_string_pretty(data).map_err(StoreError::Encode)?;
    let tmp_path = with_suffix(path, ".tmp");
    fs::write(&tmp_path, json).await.map_err(io_err)?;
    fs::rename(&tmp_path, path).await.map_err(io_err)?;
    Ok(())
}
