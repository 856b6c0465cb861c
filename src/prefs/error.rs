use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum PrefsError {
    Storage(String),
    InvalidValue { key: String, value: String },
}

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(msg) => write!(f, "preference storage error: {msg}"),
            Self::InvalidValue { key, value } => {
                write!(f, "stored preference {key} holds unexpected value {value:?}")
            }
        }
    }
}

impl std::error::Error for PrefsError {}

impl From<rusqlite::Error> for PrefsError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Storage(value.to_string())
    }
}
