//! Theme persistence and application.
//!
//! Reads the visitor's preference from `localStorage` and applies it as the
//! `data-theme` attribute on the `<html>` element. Toggle writes back to
//! `localStorage` and re-applies the attribute. Requires a browser
//! environment; elsewhere everything is a no-op.

use crate::state::theme::{self, Theme};

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "theme";

/// Resolve the theme to show on first load: stored preference, else the
/// system dark-mode hint, else light.
pub fn initial_theme() -> Theme {
    theme::resolve_initial(read_stored().as_deref(), system_prefers_dark())
}

/// Read the persisted preference, if any.
pub fn read_stored() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Whether the OS/browser currently prefers a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Set the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, next.as_str());
            }
        }
    }
    next
}
