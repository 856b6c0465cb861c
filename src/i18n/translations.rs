use crate::i18n::{Locale, TextKey};

/// Compiled-in bilingual table. Every key carries both locale strings in
/// one exhaustive match, so a missing translation fails the build.
pub(crate) fn resolve(locale: Locale, key: TextKey) -> &'static str {
    match key {
        TextKey::NavHome => match locale {
            Locale::En => "Home",
            Locale::Id => "Beranda",
        },
        TextKey::NavPortfolio => match locale {
            Locale::En => "Portfolio",
            Locale::Id => "Portofolio",
        },
        TextKey::NavCv => match locale {
            Locale::En => "CV",
            Locale::Id => "Daftar Riwayat Hidup",
        },
        TextKey::NavServices => match locale {
            Locale::En => "Services",
            Locale::Id => "Layanan",
        },
        TextKey::NavContact => match locale {
            Locale::En => "Contact",
            Locale::Id => "Kontak",
        },
        // The switch label is written in the language it switches to.
        TextKey::LanguageSwitch => match locale {
            Locale::En => "Ganti ke Bahasa Indonesia",
            Locale::Id => "Switch to English",
        },
        TextKey::FooterTagline => match locale {
            Locale::En => "Creative designer and 3D artist based in Indonesia",
            Locale::Id => "Desainer kreatif dan seniman 3D yang berbasis di Indonesia",
        },
        TextKey::FooterRights => match locale {
            Locale::En => "All rights reserved.",
            Locale::Id => "Seluruh hak cipta dilindungi.",
        },
    }
}
