//! Color theme: an explicit light/dark choice or "follow the system".
//!
//! The chosen mode is kept in `localStorage`; the resolved scheme is applied
//! as a `light` or `dark` class on `<html>`, so stylesheets key off
//! `.dark` alone. SSR renders with the default mode and the client corrects
//! it on hydration.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding [`ThemeMode::as_str`].
pub const THEME_STORAGE_KEY: &str = "hostel-ui-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Parse a stored value; unknown values mean no preference.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Label for the top-bar toggle.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// Mode selected by the next press of the toggle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    /// Class applied to `<html>` given the system's current preference.
    #[must_use]
    pub fn scheme(self, system_prefers_dark: bool) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System if system_prefers_dark => "dark",
            Self::System => "light",
        }
    }
}

/// Mode saved by an earlier visit, or [`ThemeMode::System`].
pub fn read_preference() -> ThemeMode {
    #[cfg(feature = "hydrate")]
    {
        crate::util::browser::local_storage()
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
            .and_then(|raw| ThemeMode::parse(&raw))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemeMode::default()
    }
}

pub fn save_preference(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = crate::util::browser::local_storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, mode.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Swap the `light`/`dark` class on `<html>` to match `mode`.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::browser;

        let Some(root) = browser::root_element() else {
            return;
        };
        let classes = root.class_list();
        let _ = classes.remove_2("light", "dark");
        let _ = classes.add_1(mode.scheme(browser::prefers_dark()));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
