//! Light/dark theme preference and toggle.
//!
//! The effective preference comes from `localStorage` when the reader has
//! toggled before, otherwise from the `prefers-color-scheme` media query.
//! Applying it means adding or removing one class on `<html>`; toggling
//! writes the new choice back under a single storage key.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::THEME_STORAGE_KEY;

/// Class applied to `<html>` while dark mode is on.
const DARK_CLASS: &str = "dark-mode";

/// Decide the effective preference from the stored value and the system
/// query. A stored value always wins, and only the exact string `"true"`
/// counts as dark; with nothing stored the system preference is followed.
#[must_use]
pub fn resolve_preference(stored: Option<&str>, system_dark: bool) -> bool {
    match stored {
        Some(value) => value == "true",
        None => system_dark,
    }
}

/// Read the effective dark mode preference for this browser.
#[must_use]
pub fn read_preference() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    let stored = match window.local_storage() {
        Ok(Some(storage)) => match storage.get_item(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(_) => None,
        },
        _ => None,
    };

    let system_dark = match window.match_media("(prefers-color-scheme: dark)") {
        Ok(Some(query)) => query.matches(),
        _ => false,
    };

    resolve_preference(stored.as_deref(), system_dark)
}

/// Apply or remove the dark mode class on `<html>`.
pub fn apply(enabled: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let result = if enabled {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };
    if result.is_err() {
        log::warn!("failed to update the {DARK_CLASS} class");
    }
}

/// Flip dark mode, apply it, and persist the new preference.
/// Returns the new state.
#[must_use]
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    persist(next);
    next
}

fn persist(enabled: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(Some(storage)) = window.local_storage() {
        let value = if enabled { "true" } else { "false" };
        if storage.set_item(THEME_STORAGE_KEY, value).is_err() {
            log::warn!("failed to persist the theme preference");
        }
    }
}
