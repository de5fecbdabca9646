use crate::constants::{
    COLOR_SCHEME_PROP, SURFACE_PAGE_VAR, THEME_ATTR, THEME_KEY, THEME_LABEL_DARK,
    THEME_LABEL_LIGHT,
};
use crate::page::{Page, StyleScope, Toggle};
use crate::preferences::Theme;
use crate::storage::{KeyValueStore, SafeStorage};

/// Owns the light/dark preference and everything that mirrors it.
#[derive(Clone, Debug)]
pub struct ThemeController {
    theme: Theme,
}

impl ThemeController {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn apply<P: Page, S: KeyValueStore>(
        &mut self,
        theme: Theme,
        page: &mut P,
        storage: &mut SafeStorage<S>,
    ) {
        self.theme = theme;
        let token = theme.as_str();
        page.set_root_attribute(THEME_ATTR, token);
        page.set_style_property(StyleScope::Root, COLOR_SCHEME_PROP, token);
        let dark = theme == Theme::Dark;
        let label = if dark {
            THEME_LABEL_DARK
        } else {
            THEME_LABEL_LIGHT
        };
        page.set_toggle(Toggle::Theme, dark, label);
        storage.set(THEME_KEY, token);
        refresh_theme_meta(page);
        log::debug!("[theme] applied {}", token);
    }

    pub fn toggle<P: Page, S: KeyValueStore>(&mut self, page: &mut P, storage: &mut SafeStorage<S>) {
        self.apply(self.theme.toggled(), page, storage);
    }

    /// Follow the OS color scheme unless the user has a persisted choice.
    ///
    /// Storage is consulted at event time, so a choice persisted earlier in
    /// the session silences every later system change.
    pub fn on_system_change<P: Page, S: KeyValueStore>(
        &mut self,
        prefers_dark: bool,
        page: &mut P,
        storage: &mut SafeStorage<S>,
    ) {
        if let Some(stored) = storage.get(THEME_KEY) {
            if Theme::is_token(&stored) {
                log::debug!("[theme] ignoring system change, stored={}", stored);
                return;
            }
        }
        let theme = if prefers_dark { Theme::Dark } else { Theme::Light };
        self.apply(theme, page, storage);
    }
}

/// Copy the computed page surface color into the `theme-color` meta tag.
pub fn refresh_theme_meta<P: Page>(page: &mut P) {
    let Some(color) = page.computed_root_style(SURFACE_PAGE_VAR) else {
        return;
    };
    let color = color.trim();
    if !color.is_empty() {
        page.set_theme_color(color);
    }
}
