//! Application-wide UI state.
//!
//! Owned by the page renderer and passed down explicitly; nothing reads it
//! from globals. Lives for the whole session and needs no teardown.

use serde::{Deserialize, Serialize};

/// Color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Chrome state shared by the header, sidebar, and search palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiState {
    pub theme: ThemeMode,
    pub sidebar_open: bool,
    pub search_open: bool,
}

impl UiState {
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}
