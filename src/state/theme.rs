#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use inbox::{KeyValueStore, StoreError};

/// Store key for the persisted theme preference.
pub const THEME_KEY: &str = "theme";

/// Color theme reflected in the `data-theme` attribute of `<html>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Theme the toggle switches to given the current `data-theme` value.
    /// Only an explicit `light` goes back to dark.
    #[must_use]
    pub fn next_after(attribute: Option<&str>) -> Self {
        if attribute == Some("light") { Self::Dark } else { Self::Light }
    }

    /// Icon classes for the toggle button.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-sun",
            Self::Dark => "fas fa-moon",
        }
    }

    /// Saved preference, or [`Theme::Dark`] when absent or unrecognized.
    pub fn load(store: &impl KeyValueStore) -> Self {
        store
            .get(THEME_KEY)
            .and_then(|raw| Self::parse(&raw))
            .unwrap_or_default()
    }

    pub fn save(self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        store.set(THEME_KEY, self.as_str())
    }
}
