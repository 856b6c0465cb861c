use std::fmt::{Display, Formatter};

use crate::prefs::PrefsError;

#[derive(Debug)]
pub enum AppError {
    Prefs(PrefsError),
    Ui(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prefs(error) => write!(f, "{error}"),
            Self::Ui(msg) => write!(f, "ui error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<PrefsError> for AppError {
    fn from(value: PrefsError) -> Self {
        Self::Prefs(value)
    }
}
