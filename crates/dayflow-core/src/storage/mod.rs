//! Flat key-value persistence for planner state.
//!
//! Three independent entries live in the data directory, mirroring the
//! storage keys of the original web planner:
//! - `tasks.json` -- the task store (dates with their task lists)
//! - `streak.json` -- streak counters
//! - `dark_mode` -- literal text `true`/`false`
//!
//! Every entry is read and written wholesale. Loads fail open: a missing,
//! unreadable, or malformed entry yields the default value so a corrupted
//! file can never lock the user out of their planner.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::StorageError;
use crate::store::TaskStore;
use crate::streak::StreakState;

const TASKS_FILE: &str = "tasks.json";
const STREAK_FILE: &str = "streak.json";
const DARK_MODE_FILE: &str = "dark_mode";

/// Returns `~/.config/dayflow[-dev]/` based on DAYFLOW_ENV.
///
/// Set DAYFLOW_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DAYFLOW_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("dayflow-dev")
    } else {
        base_dir.join("dayflow")
    };

    fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// File-backed store for the three persisted entries.
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    /// Open the store in the default data directory.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self { dir: data_dir()? })
    }

    /// Open the store in an explicit directory (tests, portable setups).
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn load_tasks(&self) -> TaskStore {
        self.load_json(TASKS_FILE)
    }

    pub fn save_tasks(&self, tasks: &TaskStore) -> Result<(), StorageError> {
        self.save_json(TASKS_FILE, tasks)
    }

    pub fn load_streak(&self) -> StreakState {
        self.load_json(STREAK_FILE)
    }

    pub fn save_streak(&self, streak: &StreakState) -> Result<(), StorageError> {
        self.save_json(STREAK_FILE, streak)
    }

    /// Dark-mode flag, stored as the literal text `true`/`false`.
    pub fn load_dark_mode(&self) -> bool {
        match fs::read_to_string(self.dir.join(DARK_MODE_FILE)) {
            Ok(raw) => raw.trim() == "true",
            Err(_) => false,
        }
    }

    pub fn save_dark_mode(&self, enabled: bool) -> Result<(), StorageError> {
        let path = self.dir.join(DARK_MODE_FILE);
        fs::write(&path, if enabled { "true" } else { "false" })
            .map_err(|source| StorageError::Io { path, source })
    }

    fn load_json<T: DeserializeOwned + Default>(&self, name: &str) -> T {
        let path = self.dir.join(name);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    warn!(file = name, %err, "state file unreadable, using defaults");
                }
                return T::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(file = name, %err, "state file malformed, using defaults");
                T::default()
            }
        }
    }

    fn save_json<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StorageError> {
        let path = self.dir.join(name);
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(&path, raw).map_err(|source| StorageError::Io { path, source })
    }
}
