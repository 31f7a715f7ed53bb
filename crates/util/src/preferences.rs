//! User preference persistence for Folio.
//!
//! A tiny JSON-backed store that records the reader's preferred color theme.
//! The file lives in the standard configuration directory
//! (`~/.config/folio/preferences.json` on most platforms) and can be relocated
//! with `FOLIO_PREFERENCES_PATH`. Navigation state is never persisted here.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::{env, fs, io};

use dirs_next::config_dir;
use folio_types::ThemeMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::expand_tilde;

/// Relocates the preferences file when set to a non-empty path.
pub const PREFERENCES_PATH_ENV: &str = "FOLIO_PREFERENCES_PATH";

pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("cannot access preferences file: {0}")]
    Io(#[from] io::Error),
    #[error("cannot encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

/// On-disk shape of the preferences file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPreferences {
    /// Theme picked with the header toggle; `None` until the reader picks one.
    pub preferred_theme: Option<ThemeMode>,
}

impl StoredPreferences {
    /// Reads the file at `path`. A missing or unreadable-as-JSON file yields
    /// the defaults; other I/O failures are returned.
    fn read_from(path: &Path) -> Result<Self, PreferencesError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(error) => return Err(error.into()),
        };
        Ok(serde_json::from_str(&raw).unwrap_or_else(|error| {
            warn!(path = %path.display(), %error, "ignoring malformed preferences file");
            Self::default()
        }))
    }

    fn write_to(&self, path: &Path) -> Result<(), PreferencesError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Theme preference store. Writes go straight to disk unless the store is
/// [ephemeral](UserPreferences::ephemeral).
#[derive(Debug, Default)]
pub struct UserPreferences {
    file: Option<PathBuf>,
    values: Mutex<StoredPreferences>,
}

impl UserPreferences {
    /// Opens the store at `FOLIO_PREFERENCES_PATH`, or under the platform
    /// config directory when that is unset.
    pub fn new() -> Result<Self, PreferencesError> {
        Self::at_path(resolve_path())
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Result<Self, PreferencesError> {
        let path = path.into();
        let values = StoredPreferences::read_from(&path)?;
        Ok(Self {
            file: Some(path),
            values: Mutex::new(values),
        })
    }

    /// A store that keeps changes in memory only.
    pub fn ephemeral() -> Self {
        Self::default()
    }

    /// Backing file; empty for ephemeral stores.
    pub fn path(&self) -> &Path {
        self.file.as_deref().unwrap_or_else(|| Path::new(""))
    }

    pub fn preferred_theme(&self) -> Option<ThemeMode> {
        self.values().preferred_theme
    }

    pub fn set_preferred_theme(&self, theme: Option<ThemeMode>) -> Result<(), PreferencesError> {
        let mut values = self.values();
        values.preferred_theme = theme;
        match &self.file {
            Some(path) => values.write_to(path),
            None => Ok(()),
        }
    }

    fn values(&self) -> MutexGuard<'_, StoredPreferences> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn resolve_path() -> PathBuf {
    let from_env = env::var(PREFERENCES_PATH_ENV).ok();
    match from_env.as_deref().map(str::trim) {
        Some(path) if !path.is_empty() => expand_tilde(path),
        _ => config_dir().unwrap_or_default().join("folio").join(PREFERENCES_FILE_NAME),
    }
}
