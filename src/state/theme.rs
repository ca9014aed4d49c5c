#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Color theme applied through the `data-theme` attribute on `<html>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// String form used for the `data-theme` attribute and localStorage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored preference. Anything other than the two known
    /// values is treated as unset.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class for the theme toggle control: a moon invites switching
    /// to dark, a sun invites switching back.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fa-solid fa-moon",
            Self::Dark => "fa-solid fa-sun",
        }
    }
}

/// Resolve the theme shown on first load.
///
/// A stored preference wins; otherwise the system dark-mode hint decides;
/// otherwise light.
pub fn resolve_initial(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    if let Some(theme) = stored.and_then(Theme::parse) {
        return theme;
    }
    if system_prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}
