// Recording stand-in for the browser page, shared by the host-side tests.

#![allow(dead_code)]
use folio_core::constants::{SURFACE_PAGE_VAR, THEME_ATTR};
use folio_core::{
    Capabilities, ConstellationGroup, LanguageCard, MemoryStore, Page, PageController,
    SafeStorage, StyleScope, Toggle, Viewport,
};
use std::collections::{BTreeMap, BTreeSet, HashMap};

pub const LIGHT_SURFACE: &str = "#f6f4ef";
pub const DARK_SURFACE: &str = "#05060d";

#[derive(Debug)]
pub struct FakePage {
    pub caps: Capabilities,
    pub attributes: BTreeMap<String, String>,
    pub root_styles: BTreeMap<String, String>,
    pub target_styles: BTreeMap<String, String>,
    pub style_writes: usize,
    pub theme_color: Option<String>,
    pub toggles: HashMap<Toggle, (bool, String)>,
    pub guide_expanded: Option<bool>,
    pub guide: Vec<ConstellationGroup>,
    pub guide_items: BTreeMap<String, (bool, bool)>,
    pub active_groups: BTreeSet<String>,
    pub languages: Vec<LanguageCard>,
    pub language_renders: usize,
    pub viewport: Viewport,
    pub scroll_y: f64,
    pub reduce_motion: bool,
}

impl FakePage {
    /// No optional collaborators at all.
    pub fn bare() -> Self {
        Self {
            caps: Capabilities::default(),
            attributes: BTreeMap::new(),
            root_styles: BTreeMap::new(),
            target_styles: BTreeMap::new(),
            style_writes: 0,
            theme_color: None,
            toggles: HashMap::new(),
            guide_expanded: None,
            guide: Vec::new(),
            guide_items: BTreeMap::new(),
            active_groups: BTreeSet::new(),
            languages: Vec::new(),
            language_renders: 0,
            viewport: Viewport {
                width: 1000.0,
                height: 800.0,
            },
            scroll_y: 0.0,
            reduce_motion: false,
        }
    }

    /// Hero parallax and a language list, no starfield or constellations.
    pub fn plain() -> Self {
        let mut page = Self::bare();
        page.caps.parallax_targets = true;
        page.caps.language_list = true;
        page
    }

    /// Everything: hero, starfield, guide list and panel, four groups with
    /// one repeated id.
    pub fn starfield() -> Self {
        let mut page = Self::plain();
        page.caps.starfield = true;
        page.caps.guide_list = true;
        page.caps.guide_panel = Some(false);
        page.caps.constellations = vec![
            ConstellationGroup::new("orion", Some("Orion"), Some("The hunter")),
            ConstellationGroup::new("lyra", Some("Lyra"), None),
            ConstellationGroup::new("orion", Some("Orion (belt)"), None),
            ConstellationGroup::new("cassiopeia", None, Some("The queen")),
        ];
        page
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn root_style(&self, name: &str) -> Option<&str> {
        self.root_styles.get(name).map(String::as_str)
    }

    pub fn target_style(&self, name: &str) -> Option<&str> {
        self.target_styles.get(name).map(String::as_str)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn toggle(&self, toggle: Toggle) -> Option<(bool, &str)> {
        self.toggles
            .get(&toggle)
            .map(|(pressed, label)| (*pressed, label.as_str()))
    }
}

impl Page for FakePage {
    fn capabilities(&self) -> Capabilities {
        self.caps.clone()
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn set_style_property(&mut self, scope: StyleScope, name: &str, value: &str) {
        self.style_writes += 1;
        let styles = match scope {
            StyleScope::Root => &mut self.root_styles,
            StyleScope::ParallaxTargets if self.caps.parallax_targets => &mut self.target_styles,
            StyleScope::ParallaxTargets => return,
        };
        styles.insert(name.to_string(), value.to_string());
    }

    fn remove_style_property(&mut self, scope: StyleScope, name: &str) {
        match scope {
            StyleScope::Root => self.root_styles.remove(name),
            StyleScope::ParallaxTargets => self.target_styles.remove(name),
        };
    }

    // Mimics a stylesheet keyed on data-theme, with the padding a real
    // computed custom property keeps.
    fn computed_root_style(&self, name: &str) -> Option<String> {
        if name != SURFACE_PAGE_VAR {
            return None;
        }
        let surface = match self.attribute(THEME_ATTR) {
            Some("light") => LIGHT_SURFACE,
            Some("dark") => DARK_SURFACE,
            _ => return Some("  ".to_string()),
        };
        Some(format!(" {}", surface))
    }

    fn set_theme_color(&mut self, color: &str) {
        self.theme_color = Some(color.to_string());
    }

    fn set_toggle(&mut self, toggle: Toggle, pressed: bool, label: &str) {
        self.toggles.insert(toggle, (pressed, label.to_string()));
    }

    fn set_guide_expanded(&mut self, expanded: bool) {
        if self.caps.guide_panel.is_some() {
            self.guide_expanded = Some(expanded);
        }
    }

    fn render_guide(&mut self, groups: &[ConstellationGroup]) {
        self.guide = groups.to_vec();
        self.guide_items = groups
            .iter()
            .map(|g| (g.id.clone(), (false, false)))
            .collect();
    }

    fn set_group_active(&mut self, id: &str, active: bool) {
        if active {
            self.active_groups.insert(id.to_string());
        } else {
            self.active_groups.remove(id);
        }
    }

    fn set_guide_item(&mut self, id: &str, pressed: bool, active: bool) {
        if let Some(state) = self.guide_items.get_mut(id) {
            *state = (pressed, active);
        }
    }

    fn render_languages(&mut self, cards: &[LanguageCard]) {
        self.language_renders += 1;
        self.languages = cards.to_vec();
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduce_motion
    }
}

pub type TestController = PageController<FakePage, MemoryStore>;

pub fn boot(page: FakePage, store: MemoryStore) -> TestController {
    boot_with(page, SafeStorage::new(store))
}

pub fn boot_with(page: FakePage, storage: SafeStorage<MemoryStore>) -> TestController {
    let mut controller = PageController::new(page, storage);
    controller.boot();
    controller
}

pub fn stored(controller: &TestController, key: &str) -> Option<String> {
    controller
        .storage()
        .inner()
        .and_then(|s| s.peek(key))
        .map(str::to_string)
}
