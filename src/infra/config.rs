#[derive(Debug, Clone)]
pub struct AppConfig {
    pub preferences_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preferences_path: "preferences.sqlite3".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_local_preferences_path() {
        let config = AppConfig::default();
        assert_eq!(config.preferences_path, "preferences.sqlite3");
    }
}
