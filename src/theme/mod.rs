use crate::prefs::PrefsError;

/// Settings slot holding the persisted display mode.
pub const THEME_SETTING_KEY: &str = "theme";

/// Active light/dark display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Persistence port for the theme slot. The SQLite store implements it;
/// tests substitute in-memory fakes.
pub trait PreferenceStore {
    fn load_theme(&self) -> Result<Option<ThemeMode>, PrefsError>;
    fn save_theme(&self, mode: ThemeMode) -> Result<(), PrefsError>;
}

/// Holds the active mode and writes every change through to the store.
/// A failing store never fails the toggle; the in-memory mode still moves.
pub struct ThemeContext {
    mode: ThemeMode,
    store: Box<dyn PreferenceStore>,
}

impl ThemeContext {
    /// Resolves the startup mode once: persisted value, then the window
    /// system hint, then light.
    pub fn resolve(store: Box<dyn PreferenceStore>, system_hint: Option<ThemeMode>) -> Self {
        let mode = match store.load_theme() {
            Ok(Some(stored)) => stored,
            Ok(None) => system_hint.unwrap_or(ThemeMode::Light),
            Err(error) => {
                log::debug!("theme preference unavailable, falling back: {error}");
                system_hint.unwrap_or(ThemeMode::Light)
            }
        };

        Self { mode, store }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
        if let Err(error) = self.store.save_theme(mode) {
            log::warn!("failed to persist theme preference: {error}");
        }
    }

    pub fn toggle(&mut self) {
        self.set(self.mode.toggled());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::prefs::PreferencesDb;
    use tempfile::TempDir;

    #[derive(Default)]
    struct FakeStore {
        stored: Rc<RefCell<Option<ThemeMode>>>,
        fail_load: Cell<bool>,
        fail_save: Cell<bool>,
    }

    impl PreferenceStore for FakeStore {
        fn load_theme(&self) -> Result<Option<ThemeMode>, PrefsError> {
            if self.fail_load.get() {
                return Err(PrefsError::Storage("storage disabled".to_string()));
            }
            Ok(*self.stored.borrow())
        }

        fn save_theme(&self, mode: ThemeMode) -> Result<(), PrefsError> {
            if self.fail_save.get() {
                return Err(PrefsError::Storage("storage disabled".to_string()));
            }
            *self.stored.borrow_mut() = Some(mode);
            Ok(())
        }
    }

    #[test]
    fn persisted_value_wins_over_hint_and_default() {
        let store = FakeStore::default();
        *store.stored.borrow_mut() = Some(ThemeMode::Dark);

        let context = ThemeContext::resolve(Box::new(store), Some(ThemeMode::Light));
        assert_eq!(context.mode(), ThemeMode::Dark);
    }

    #[test]
    fn system_hint_wins_when_nothing_is_persisted() {
        let context =
            ThemeContext::resolve(Box::<FakeStore>::default(), Some(ThemeMode::Dark));
        assert_eq!(context.mode(), ThemeMode::Dark);
    }

    #[test]
    fn light_is_the_final_fallback() {
        let context = ThemeContext::resolve(Box::<FakeStore>::default(), None);
        assert_eq!(context.mode(), ThemeMode::Light);
    }

    #[test]
    fn unreadable_store_falls_back_to_hint() {
        let store = FakeStore::default();
        store.fail_load.set(true);

        let context = ThemeContext::resolve(Box::new(store), Some(ThemeMode::Dark));
        assert_eq!(context.mode(), ThemeMode::Dark);
    }

    #[test]
    fn toggle_writes_through_to_the_store() {
        let store = FakeStore::default();
        let stored = Rc::clone(&store.stored);

        let mut context = ThemeContext::resolve(Box::new(store), None);
        context.toggle();

        assert_eq!(context.mode(), ThemeMode::Dark);
        assert_eq!(*stored.borrow(), Some(ThemeMode::Dark));
    }

    #[test]
    fn toggle_still_flips_when_the_store_is_unavailable() {
        let store = FakeStore::default();
        store.fail_save.set(true);
        let stored = Rc::clone(&store.stored);

        let mut context = ThemeContext::resolve(Box::new(store), None);
        context.toggle();

        assert_eq!(context.mode(), ThemeMode::Dark);
        assert!(stored.borrow().is_none(), "failed save should leave nothing stored");
    }

    #[test]
    fn toggled_mode_survives_a_restart() {
        let dir = TempDir::new().expect("tempdir should be created");
        let db_path = dir.path().join("preferences.sqlite3").to_string_lossy().to_string();

        let db = PreferencesDb::new(db_path.clone());
        db.initialize().expect("schema should initialize");

        let mut context = ThemeContext::resolve(Box::new(db), None);
        assert_eq!(context.mode(), ThemeMode::Light);
        context.toggle();

        // Fresh store handle over the same file stands in for a restart.
        let reopened = PreferencesDb::new(db_path);
        reopened.initialize().expect("schema should initialize");
        let restarted = ThemeContext::resolve(Box::new(reopened), None);
        assert_eq!(restarted.mode(), ThemeMode::Dark);
    }
}
