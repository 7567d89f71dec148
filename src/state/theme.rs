//! Dark/light theme with a persisted preference.
//!
//! [`ThemeState::set_theme`] is the only transition. It writes the stored flag
//! and returns the matching [`ThemeEffects`]; the renderer applies the body
//! class and the toggle icon from that one value, so the three effects never
//! drift apart.

use crate::consts::{ICON_DARK, ICON_LIGHT, STORED_DARK, STORED_LIGHT, THEME_STORAGE_KEY};
use crate::util::storage::PreferenceStore;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Only the dark literal selects dark; absent or unknown values are light.
    pub fn from_stored(value: Option<&str>) -> Self {
        if value == Some(STORED_DARK) { Self::Dark } else { Self::Light }
    }

    pub fn stored(self) -> &'static str {
        match self {
            Self::Dark => STORED_DARK,
            Self::Light => STORED_LIGHT,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => ICON_DARK,
            Self::Light => ICON_LIGHT,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// What the document must show for a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeEffects {
    pub dark_class: bool,
    pub icon: &'static str,
}

impl From<Theme> for ThemeEffects {
    fn from(theme: Theme) -> Self {
        Self { dark_class: theme.is_dark(), icon: theme.icon() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeState {
    theme: Theme,
    storage_key: String,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(THEME_STORAGE_KEY)
    }
}

impl ThemeState {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self { theme: Theme::Light, storage_key: storage_key.into() }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Apply `theme` and persist it. A failed write is logged; the in-page
    /// theme still switches.
    pub fn set_theme(&mut self, theme: Theme, store: &mut dyn PreferenceStore) -> ThemeEffects {
        self.theme = theme;
        if let Err(err) = store.set(&self.storage_key, theme.stored()) {
            log::warn!("theme: failed to persist {theme:?}: {err}");
        }
        log::debug!("theme: {theme:?}");
        ThemeEffects::from(theme)
    }

    /// Invert the applied theme.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore) -> ThemeEffects {
        self.set_theme(self.theme.toggled(), store)
    }

    /// Startup: apply whatever the store holds, light when nothing is stored.
    pub fn restore(&mut self, store: &mut dyn PreferenceStore) -> ThemeEffects {
        let stored = store.get(&self.storage_key);
        self.set_theme(Theme::from_stored(stored.as_deref()), store)
    }
}
