//! Theme preference: what the user picked, and what actually gets applied.
//! "System" defers to the OS via `prefers-color-scheme`.

pub const THEME_STORAGE_KEY: &str = "flowl.theme";

/// The resolved appearance the document ends up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// What the user chose in settings. Stored verbatim in local storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Parse a stored value. Anything unrecognized falls back to System.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "light" => ThemePreference::Light,
            "dark" => ThemePreference::Dark,
            _ => ThemePreference::System,
        }
    }

    /// Collapse the preference to a concrete mode given the OS setting.
    pub fn resolve(self, prefers_dark: bool) -> ThemeMode {
        match self {
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
            ThemePreference::System => {
                if prefers_dark {
                    ThemeMode::Dark
                } else {
                    ThemeMode::Light
                }
            }
        }
    }
}

/// Load the stored preference, defaulting to System when absent.
pub fn read_preference() -> ThemePreference {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    match stored {
        Some(raw) => ThemePreference::parse(&raw),
        None => ThemePreference::default(),
    }
}

pub fn write_preference(pref: ThemePreference) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, pref.as_str());
    }
}

/// Stamp the resolved mode onto `<html data-theme="...">` so the CSS
/// variables switch over.
pub fn apply_mode(mode: ThemeMode) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", mode.as_str());
    }
}

pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_known_values() {
        for pref in [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ] {
            assert_eq!(ThemePreference::parse(pref.as_str()), pref);
        }
    }

    #[test]
    fn parse_falls_back_to_system() {
        assert_eq!(ThemePreference::parse("solarized"), ThemePreference::System);
        assert_eq!(ThemePreference::parse(""), ThemePreference::System);
    }

    #[test]
    fn explicit_preferences_ignore_the_os() {
        assert_eq!(ThemePreference::Light.resolve(true), ThemeMode::Light);
        assert_eq!(ThemePreference::Light.resolve(false), ThemeMode::Light);
        assert_eq!(ThemePreference::Dark.resolve(true), ThemeMode::Dark);
        assert_eq!(ThemePreference::Dark.resolve(false), ThemeMode::Dark);
    }

    #[test]
    fn system_follows_the_os() {
        assert_eq!(ThemePreference::System.resolve(true), ThemeMode::Dark);
        assert_eq!(ThemePreference::System.resolve(false), ThemeMode::Light);
    }
}
