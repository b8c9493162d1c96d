//! Interface language. Stored alongside the theme preference in local
//! storage and applied through a context holding the active dictionary.

use crate::i18n::{Translations, DE, EN, ES};

pub const LOCALE_STORAGE_KEY: &str = "flowl.locale";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    De,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::De, Locale::Es];

    /// BCP 47 tag, also used for `Date::to_locale_date_string`.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
            Locale::Es => "es",
        }
    }

    /// Name shown in the language picker, in its own language.
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::De => "Deutsch",
            Locale::Es => "Español",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "de" => Locale::De,
            "es" => Locale::Es,
            _ => Locale::En,
        }
    }

    pub fn translations(self) -> &'static Translations {
        match self {
            Locale::En => &EN,
            Locale::De => &DE,
            Locale::Es => &ES,
        }
    }
}

pub fn read_locale() -> Locale {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(LOCALE_STORAGE_KEY).ok().flatten());
    match stored {
        Some(raw) => Locale::parse(&raw),
        None => Locale::default(),
    }
}

pub fn write_locale(locale: Locale) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LOCALE_STORAGE_KEY, locale.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_locale() {
        for locale in Locale::ALL {
            assert_eq!(Locale::parse(locale.as_str()), locale);
        }
    }

    #[test]
    fn parse_falls_back_to_english() {
        assert_eq!(Locale::parse("fr"), Locale::En);
        assert_eq!(Locale::parse(""), Locale::En);
    }

    #[test]
    fn each_locale_has_its_own_dictionary() {
        assert_eq!(Locale::En.translations().theme_light, "Light");
        assert_ne!(
            Locale::De.translations().empty_title,
            Locale::Es.translations().empty_title
        );
    }
}
