//! Theme initialization and toggle.
//!
//! Reads the saved preference, applies it as `data-theme` on `<html>`, and
//! swaps the toggle's icon. Every change, including the initial one, is
//! written back to storage.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use crate::state::theme::Theme;

pub const TOGGLE_ID: &str = "themeToggle";
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Apply the stored theme and attach the toggle handler.
pub fn init() {
    let mut store = super::storage::LocalStorage::open();
    restore(&mut store);

    #[cfg(feature = "hydrate")]
    {
        let Some(toggle) = super::dom::by_id(TOGGLE_ID) else {
            log::debug!("no #{TOGGLE_ID}; theme toggle disabled");
            return;
        };
        super::dom::on(&toggle, "click", move |_| {
            let current = super::dom::document()
                .and_then(|d| d.document_element())
                .and_then(|root| root.get_attribute(THEME_ATTRIBUTE));
            set_theme(&mut store, Theme::next_after(current.as_deref()));
        });
    }
}

/// Load the saved theme (dark when absent), apply it, and write it back.
pub fn restore(store: &mut impl inbox::KeyValueStore) -> Theme {
    let theme = Theme::load(store);
    set_theme(store, theme);
    #[cfg(feature = "hydrate")]
    log::debug!("theme restored: {}", theme.as_str());
    theme
}

/// Apply `theme` to the page and persist it. Persist failures are logged only.
pub fn set_theme(store: &mut impl inbox::KeyValueStore, theme: Theme) {
    apply(theme);
    if let Err(e) = theme.save(store) {
        #[cfg(feature = "hydrate")]
        log::warn!("theme preference not saved: {e}");
        #[cfg(not(feature = "hydrate"))]
        let _ = e;
    }
}

/// Set `data-theme` on `<html>` and the icon classes inside `#themeToggle`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(root) = super::dom::document().and_then(|d| d.document_element()) {
            let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        }
        if let Some(icon) = super::dom::query(&format!("#{TOGGLE_ID} i")) {
            icon.set_class_name(theme.icon_class());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
