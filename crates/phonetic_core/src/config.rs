//! Run configuration.
//!
//! # Responsibility
//! - Turn the three command-line switches into validated run options.
//! - Resolve address-book and log locations from the environment.
//!
//! # Invariants
//! - `force` and `clean` are never both set on a `RunOptions`.

use crate::service::planner::RunMode;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

/// Pause after each live write; the system address book drops writes
/// issued back to back.
pub const DEFAULT_WRITE_PAUSE: Duration = Duration::from_millis(50);

pub const DB_PATH_ENV: &str = "PHONETIC_NAMES_DB_PATH";
pub const LOG_DIR_ENV: &str = "PHONETIC_NAMES_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "phonetic-names-contacts.db";
const DEFAULT_LOG_DIR_NAME: &str = "phonetic-names-logs";

/// Invalid flag combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ForceWithClean,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ForceWithClean => write!(f, "cannot use -f and -c at the same time."),
        }
    }
}

impl Error for ConfigError {}

/// Validated options for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: RunMode,
    pub dry_run: bool,
    pub force: bool,
    pub write_pause: Duration,
}

impl RunOptions {
    /// Builds options from the `--dry`, `--force` and `--clean` switches.
    pub fn from_flags(dry_run: bool, force: bool, clean: bool) -> Result<Self, ConfigError> {
        if force && clean {
            return Err(ConfigError::ForceWithClean);
        }

        Ok(Self {
            mode: if clean { RunMode::Clean } else { RunMode::Fill },
            dry_run,
            force,
            write_pause: DEFAULT_WRITE_PAUSE,
        })
    }

    pub fn with_write_pause(mut self, pause: Duration) -> Self {
        self.write_pause = pause;
        self
    }
}

/// Address-book path: explicit value, then `PHONETIC_NAMES_DB_PATH`, then
/// a file in the temp directory.
pub fn resolve_db_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| env_path(DB_PATH_ENV))
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME))
}

/// Log directory: `PHONETIC_NAMES_LOG_DIR`, else a temp-dir subfolder.
pub fn resolve_log_dir() -> PathBuf {
    env_path(LOG_DIR_ENV).unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME))
}

fn env_path(key: &str) -> Option<PathBuf> {
    let raw = std::env::var(key).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}
