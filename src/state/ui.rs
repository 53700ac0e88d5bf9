//! Local UI chrome state (sidebar, theme).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the session model so layout controls
//! can change without touching auth state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::ThemeMode;

/// UI state for the application layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: ThemeMode,
    pub sidebar_collapsed: bool,
}

impl UiState {
    #[must_use]
    pub fn with_theme(theme: ThemeMode) -> Self {
        Self { theme, ..Self::default() }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
    }
}
