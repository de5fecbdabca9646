//! Constellation highlighting and the guide panel.

use crate::constants::{
    CONSTELLATIONS_ATTR, CONSTELLATIONS_KEY, CONSTELLATIONS_LABEL_OFF, CONSTELLATIONS_LABEL_ON,
    GUIDE_AUTO_EXPAND_MIN_WIDTH,
};
use crate::page::{Capabilities, ConstellationGroup, Page, Toggle};
use crate::preferences::Constellations;
use crate::storage::{KeyValueStore, SafeStorage};
use fnv::FnvHashSet;

/// Hovered and locked guide items. A lock always wins over a hover.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstellationSelection {
    pub hover: Option<String>,
    pub locked: Option<String>,
}

impl ConstellationSelection {
    pub fn active_id(&self) -> Option<&str> {
        self.locked.as_deref().or(self.hover.as_deref())
    }

    /// Lock `id`, or unlock it if it is already the locked item.
    pub fn toggle_lock(&mut self, id: &str) {
        if self.locked.as_deref() == Some(id) {
            self.locked = None;
        } else {
            self.locked = Some(id.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.hover = None;
        self.locked = None;
    }
}

#[derive(Clone, Debug)]
pub struct ConstellationGuide {
    state: Constellations,
    selection: ConstellationSelection,
    /// Distinct group ids, in document order.
    groups: Vec<String>,
    /// Ids that have a rendered guide item.
    items: Vec<String>,
    panel_expanded: Option<bool>,
}

impl ConstellationGuide {
    pub fn new(state: Constellations, caps: &Capabilities) -> Self {
        let groups = distinct_groups(&caps.constellations)
            .into_iter()
            .map(|g| g.id.clone())
            .collect();
        Self {
            state,
            selection: ConstellationSelection::default(),
            groups,
            items: Vec::new(),
            panel_expanded: caps.guide_panel,
        }
    }

    pub fn state(&self) -> Constellations {
        self.state
    }

    pub fn selection(&self) -> &ConstellationSelection {
        &self.selection
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// `None` when the page has no guide panel.
    pub fn panel_expanded(&self) -> Option<bool> {
        self.panel_expanded
    }

    /// The highlighted id; always `None` while the feature is off.
    pub fn active_id(&self) -> Option<&str> {
        if self.state.is_on() {
            self.selection.active_id()
        } else {
            None
        }
    }

    /// Build the guide list, one item per distinct group id.
    pub fn render<P: Page>(&mut self, caps: &Capabilities, page: &mut P) {
        if !caps.guide_list || caps.constellations.is_empty() {
            return;
        }
        let groups: Vec<ConstellationGroup> = distinct_groups(&caps.constellations)
            .into_iter()
            .cloned()
            .collect();
        page.render_guide(&groups);
        self.items = groups.into_iter().map(|g| g.id).collect();
        self.sync(page);
    }

    pub fn auto_expand<P: Page>(&mut self, viewport_width: f64, page: &mut P) {
        if self.panel_expanded.is_some() && viewport_width >= GUIDE_AUTO_EXPAND_MIN_WIDTH {
            self.set_panel(true, page);
        }
    }

    pub fn toggle_panel<P: Page>(&mut self, page: &mut P) {
        if let Some(expanded) = self.panel_expanded {
            self.set_panel(!expanded, page);
        }
    }

    fn set_panel<P: Page>(&mut self, expanded: bool, page: &mut P) {
        self.panel_expanded = Some(expanded);
        page.set_guide_expanded(expanded);
    }

    pub fn apply<P: Page, S: KeyValueStore>(
        &mut self,
        state: Constellations,
        page: &mut P,
        storage: &mut SafeStorage<S>,
    ) {
        self.state = state;
        page.set_root_attribute(CONSTELLATIONS_ATTR, state.as_str());
        let on = state.is_on();
        let label = if on {
            CONSTELLATIONS_LABEL_ON
        } else {
            CONSTELLATIONS_LABEL_OFF
        };
        page.set_toggle(Toggle::Constellations, on, label);
        storage.set(CONSTELLATIONS_KEY, state.as_str());
        if !on {
            self.selection.clear();
            if self.panel_expanded.is_some() {
                self.set_panel(false, page);
            }
        }
        self.sync(page);
        log::debug!("[constellations] applied {}", state);
    }

    pub fn toggle<P: Page, S: KeyValueStore>(&mut self, page: &mut P, storage: &mut SafeStorage<S>) {
        self.apply(self.state.toggled(), page, storage);
    }

    pub fn hover<P: Page>(&mut self, id: Option<String>, page: &mut P) {
        if !self.state.is_on() {
            return;
        }
        self.selection.hover = id;
        self.sync(page);
    }

    pub fn lock<P: Page>(&mut self, id: &str, page: &mut P) {
        if !self.state.is_on() {
            return;
        }
        self.selection.toggle_lock(id);
        self.sync(page);
    }

    /// Push the current selection to every group and guide item.
    pub fn sync<P: Page>(&self, page: &mut P) {
        let active = self.active_id();
        for id in &self.groups {
            page.set_group_active(id, active == Some(id.as_str()));
        }
        let locked = if self.state.is_on() {
            self.selection.locked.as_deref()
        } else {
            None
        };
        for id in &self.items {
            page.set_guide_item(
                id,
                locked == Some(id.as_str()),
                active == Some(id.as_str()),
            );
        }
    }
}

/// First occurrence of every non-empty id, in order.
fn distinct_groups(groups: &[ConstellationGroup]) -> Vec<&ConstellationGroup> {
    let mut seen = FnvHashSet::default();
    groups
        .iter()
        .filter(|g| !g.id.is_empty() && seen.insert(g.id.as_str()))
        .collect()
}
