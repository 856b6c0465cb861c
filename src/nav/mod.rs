use crate::i18n::TextKey;

/// The fixed route surface, one entry per page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Portfolio,
    Cv,
    Services,
    Contact,
}

impl Route {
    /// Header order.
    pub const ALL: [Route; 5] = [
        Self::Home,
        Self::Portfolio,
        Self::Cv,
        Self::Services,
        Self::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Portfolio => "/portfolio",
            Self::Cv => "/cv",
            Self::Services => "/services",
            Self::Contact => "/contact",
        }
    }

    /// Exact string match only; `/` resolves to the root and nothing else.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn label_key(self) -> TextKey {
        match self {
            Self::Home => TextKey::NavHome,
            Self::Portfolio => TextKey::NavPortfolio,
            Self::Cv => TextKey::NavCv,
            Self::Services => TextKey::NavServices,
            Self::Contact => TextKey::NavContact,
        }
    }
}

/// True iff `path` is exactly the current route's path. Recomputed on every
/// read; never cached.
pub fn is_active(current: Route, path: &str) -> bool {
    current.path() == path
}
