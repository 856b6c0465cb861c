mod translations;

/// Active display language. Exactly two locales; the toggle flips between
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Id,
}

impl Locale {
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Id,
            Self::Id => Self::En,
        }
    }

    /// Short badge shown next to the globe toggle.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Id => "ID",
        }
    }
}

/// Logical text keys used by the navigation and footer chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    NavHome,
    NavPortfolio,
    NavCv,
    NavServices,
    NavContact,
    LanguageSwitch,
    FooterTagline,
    FooterRights,
}

impl TextKey {
    pub const ALL: [TextKey; 8] = [
        Self::NavHome,
        Self::NavPortfolio,
        Self::NavCv,
        Self::NavServices,
        Self::NavContact,
        Self::LanguageSwitch,
        Self::FooterTagline,
        Self::FooterRights,
    ];
}

/// Holds the active locale and resolves text keys against it. Consumers
/// re-read on every render; nothing caches a resolved string.
#[derive(Debug, Clone)]
pub struct LocaleContext {
    locale: Locale,
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self { locale: Locale::En }
    }
}

impl LocaleContext {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn toggle(&mut self) {
        self.locale = self.locale.toggled();
    }

    pub fn text(&self, key: TextKey) -> &'static str {
        translations::resolve(self.locale, key)
    }
}
