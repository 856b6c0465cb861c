use std::fs;
use std::path::PathBuf;

use rusqlite::Connection;

use crate::prefs::error::PrefsError;
use crate::prefs::migrations::MIGRATIONS;
use crate::prefs::queries;
use crate::theme::{PreferenceStore, ThemeMode, THEME_SETTING_KEY};

/// SQLite-backed preference storage. One settings table, one well-known
/// slot per preference; reads and writes open a fresh connection.
#[derive(Debug, Clone)]
pub struct PreferencesDb {
    path: PathBuf,
}

impl PreferencesDb {
    pub fn new(path: String) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    pub fn initialize(&self) -> Result<(), PrefsError> {
        if self.path.as_os_str().is_empty() {
            return Err(PrefsError::Storage(
                "preferences path must not be empty".to_string(),
            ));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|error| {
                    PrefsError::Storage(format!(
                        "failed to create preferences directory: {error}"
                    ))
                })?;
            }
        }

        let conn = self.open_connection()?;
        conn.execute_batch("PRAGMA foreign_keys=ON; PRAGMA journal_mode=WAL;")?;

        for migration in MIGRATIONS {
            conn.execute_batch(migration)?;
        }

        Ok(())
    }

    pub fn read_setting(&self, key: &str) -> Result<Option<String>, PrefsError> {
        let conn = self.open_connection()?;
        Ok(queries::find_setting(&conn, key)?)
    }

    pub fn write_setting(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let conn = self.open_connection()?;
        Ok(queries::upsert_setting(&conn, key, value)?)
    }

    fn open_connection(&self) -> Result<Connection, PrefsError> {
        Ok(Connection::open(&self.path)?)
    }
}

impl PreferenceStore for PreferencesDb {
    fn load_theme(&self) -> Result<Option<ThemeMode>, PrefsError> {
        match self.read_setting(THEME_SETTING_KEY)? {
            None => Ok(None),
            Some(stored) => match ThemeMode::parse(&stored) {
                Some(mode) => Ok(Some(mode)),
                None => Err(PrefsError::InvalidValue {
                    key: THEME_SETTING_KEY.to_string(),
                    value: stored,
                }),
            },
        }
    }

    fn save_theme(&self, mode: ThemeMode) -> Result<(), PrefsError> {
        self.write_setting(THEME_SETTING_KEY, mode.as_str())
    }
}
