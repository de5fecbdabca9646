use crate::dom;
use crate::selectors::*;
use fnv::FnvHashMap;
use folio_core::{
    Capabilities, ConstellationGroup, LanguageCard, Page, StyleScope, Toggle, Viewport,
};
use smallvec::SmallVec;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default)]
struct ToggleNodes {
    button: Option<web::Element>,
    text: Option<web::Element>,
}

impl ToggleNodes {
    fn find(document: &web::Document, button: &str, text: &str) -> Self {
        Self {
            button: dom::query(document, button),
            text: dom::query(document, text),
        }
    }
}

/// The live document, discovered once at startup.
pub struct DomPage {
    window: web::Window,
    document: web::Document,
    root: web::HtmlElement,
    theme_meta: Option<web::Element>,
    theme_toggle: ToggleNodes,
    motion_toggle: ToggleNodes,
    constellation_toggle: ToggleNodes,
    guide_toggle: Option<web::Element>,
    guide_panel: Option<web::HtmlElement>,
    guide_list: Option<web::Element>,
    guide_buttons: FnvHashMap<String, web::Element>,
    parallax_targets: Vec<web::HtmlElement>,
    starfield: bool,
    language_list: Option<web::Element>,
    groups: Vec<ConstellationGroup>,
    group_nodes: FnvHashMap<String, SmallVec<[web::Element; 1]>>,
    dark_scheme: Option<web::MediaQueryList>,
    reduced_motion: Option<web::MediaQueryList>,
}

impl DomPage {
    pub fn discover(window: &web::Window, document: &web::Document) -> anyhow::Result<Self> {
        let root = document
            .document_element()
            .ok_or_else(|| anyhow::anyhow!("missing document element"))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        let mut groups = Vec::new();
        let mut group_nodes: FnvHashMap<String, SmallVec<[web::Element; 1]>> =
            FnvHashMap::default();
        for el in dom::query_all(document, CONSTELLATION_GROUPS) {
            let Some(id) = el.get_attribute(GROUP_ID_ATTR).filter(|id| !id.is_empty()) else {
                continue;
            };
            groups.push(ConstellationGroup::new(
                &id,
                el.get_attribute(GROUP_NAME_ATTR).as_deref(),
                el.get_attribute(GROUP_DESCRIPTION_ATTR).as_deref(),
            ));
            group_nodes.entry(id).or_default().push(el);
        }

        let parallax_targets = dom::query_all(document, PARALLAX_TARGETS)
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .collect();

        Ok(Self {
            window: window.clone(),
            document: document.clone(),
            root,
            theme_meta: dom::query(document, THEME_META),
            theme_toggle: ToggleNodes::find(document, THEME_TOGGLE, THEME_TOGGLE_TEXT),
            motion_toggle: ToggleNodes::find(document, MOTION_TOGGLE, MOTION_TOGGLE_TEXT),
            constellation_toggle: ToggleNodes::find(
                document,
                CONSTELLATION_TOGGLE,
                CONSTELLATION_TOGGLE_TEXT,
            ),
            guide_toggle: dom::query(document, GUIDE_TOGGLE),
            guide_panel: dom::query(document, GUIDE_PANEL)
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok()),
            guide_list: dom::query(document, GUIDE_LIST),
            guide_buttons: FnvHashMap::default(),
            parallax_targets,
            starfield: dom::query(document, STARFIELD).is_some(),
            language_list: dom::query(document, LANGUAGE_LIST),
            groups,
            group_nodes,
            dark_scheme: dom::match_media(window, DARK_SCHEME_QUERY),
            reduced_motion: dom::match_media(window, REDUCED_MOTION_QUERY),
        })
    }

    pub fn toggle_button(&self, toggle: Toggle) -> Option<&web::Element> {
        self.toggle_nodes(toggle).button.as_ref()
    }

    /// The guide toggle, only when its panel exists too.
    pub fn guide_toggle(&self) -> Option<&web::Element> {
        self.guide_panel.as_ref().and(self.guide_toggle.as_ref())
    }

    pub fn guide_buttons(&self) -> impl Iterator<Item = (&String, &web::Element)> {
        self.guide_buttons.iter()
    }

    pub fn dark_scheme(&self) -> Option<&web::MediaQueryList> {
        self.dark_scheme.as_ref()
    }

    pub fn reduced_motion(&self) -> Option<&web::MediaQueryList> {
        self.reduced_motion.as_ref()
    }

    fn toggle_nodes(&self, toggle: Toggle) -> &ToggleNodes {
        match toggle {
            Toggle::Theme => &self.theme_toggle,
            Toggle::Motion => &self.motion_toggle,
            Toggle::Constellations => &self.constellation_toggle,
        }
    }

    fn build_card(&self, card: &LanguageCard) -> Option<web::Element> {
        let doc = &self.document;
        let article = dom::create(doc, "article", "language-card")?;

        let header = dom::create(doc, "div", "language-card__header")?;
        let name = dom::create(doc, "h3", "language-card__name")?;
        name.set_text_content(Some(&card.name));
        let badge = dom::create(doc, "span", "language-card__badge")?;
        badge.set_text_content(Some(&card.proficiency));
        _ = badge.set_attribute("aria-label", &card.badge_label);
        _ = header.append_child(&name);
        _ = header.append_child(&badge);

        let description = dom::create(doc, "p", "language-card__description")?;
        description.set_text_content(Some(&card.description));

        _ = article.append_child(&header);
        _ = article.append_child(&description);

        if let Some(meter) = &card.meter {
            let wrapper = dom::create(doc, "div", "language-card__meter")?;
            let label = dom::create(doc, "label", "")?;
            _ = label.set_attribute("for", &meter.id);
            label.set_text_content(Some(&meter.label));

            let progress = dom::create(doc, "progress", "")?
                .dyn_into::<web::HtmlProgressElement>()
                .ok()?;
            progress.set_id(&meter.id);
            progress.set_max(meter.max as f64);
            progress.set_value(meter.value as f64);
            _ = progress.set_attribute("aria-valuemin", &meter.min.to_string());
            _ = progress.set_attribute("aria-valuenow", &meter.value.to_string());
            _ = progress.set_attribute("aria-valuemax", &meter.max.to_string());
            _ = progress.set_attribute("aria-label", &meter.aria_label);

            _ = wrapper.append_child(&label);
            _ = wrapper.append_child(&progress);
            _ = article.append_child(&wrapper);
        }
        Some(article)
    }

    fn build_guide_item(&self, group: &ConstellationGroup) -> Option<web::Element> {
        let doc = &self.document;
        let button = dom::create(doc, "button", "constellation-guide__item")?;
        if let Some(b) = button.dyn_ref::<web::HtmlButtonElement>() {
            b.set_type("button");
        }
        _ = button.set_attribute(GUIDE_ITEM_ATTR, &group.id);
        dom::set_bool_attribute(&button, "aria-pressed", false);

        let title = dom::create(doc, "span", "constellation-guide__item-title")?;
        title.set_text_content(Some(&group.name));
        _ = button.append_child(&title);

        if !group.description.is_empty() {
            let detail = dom::create(doc, "p", "constellation-guide__item-description")?;
            detail.set_text_content(Some(&group.description));
            _ = button.append_child(&detail);
        }
        Some(button)
    }
}

impl Page for DomPage {
    fn capabilities(&self) -> Capabilities {
        let guide_panel = match (&self.guide_toggle, &self.guide_panel) {
            (Some(toggle), Some(_)) => {
                Some(toggle.get_attribute("aria-expanded").as_deref() == Some("true"))
            }
            _ => None,
        };
        Capabilities {
            parallax_targets: !self.parallax_targets.is_empty(),
            starfield: self.starfield,
            language_list: self.language_list.is_some(),
            guide_list: self.guide_list.is_some(),
            guide_panel,
            constellations: self.groups.clone(),
        }
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.get_attribute(name)
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        _ = self.root.set_attribute(name, value);
    }

    fn set_style_property(&mut self, scope: StyleScope, name: &str, value: &str) {
        match scope {
            StyleScope::Root => {
                _ = self.root.style().set_property(name, value);
            }
            StyleScope::ParallaxTargets => {
                for node in &self.parallax_targets {
                    _ = node.style().set_property(name, value);
                }
            }
        }
    }

    fn remove_style_property(&mut self, scope: StyleScope, name: &str) {
        match scope {
            StyleScope::Root => {
                _ = self.root.style().remove_property(name);
            }
            StyleScope::ParallaxTargets => {
                for node in &self.parallax_targets {
                    _ = node.style().remove_property(name);
                }
            }
        }
    }

    fn computed_root_style(&self, name: &str) -> Option<String> {
        let style = self.window.get_computed_style(&self.root).ok().flatten()?;
        style.get_property_value(name).ok()
    }

    fn set_theme_color(&mut self, color: &str) {
        if let Some(meta) = &self.theme_meta {
            _ = meta.set_attribute("content", color);
        }
    }

    fn set_toggle(&mut self, toggle: Toggle, pressed: bool, label: &str) {
        let nodes = self.toggle_nodes(toggle);
        if let Some(button) = &nodes.button {
            dom::set_bool_attribute(button, "aria-pressed", pressed);
        }
        if let Some(text) = &nodes.text {
            text.set_text_content(Some(label));
        }
    }

    fn set_guide_expanded(&mut self, expanded: bool) {
        if let (Some(toggle), Some(panel)) = (&self.guide_toggle, &self.guide_panel) {
            dom::set_bool_attribute(toggle, "aria-expanded", expanded);
            panel.set_hidden(!expanded);
        }
    }

    fn render_guide(&mut self, groups: &[ConstellationGroup]) {
        let Some(list) = self.guide_list.clone() else {
            return;
        };
        self.guide_buttons.clear();
        list.set_inner_html("");
        for group in groups {
            let Some(button) = self.build_guide_item(group) else {
                continue;
            };
            _ = list.append_child(&button);
            self.guide_buttons.insert(group.id.clone(), button);
        }
    }

    fn set_group_active(&mut self, id: &str, active: bool) {
        if let Some(nodes) = self.group_nodes.get(id) {
            for el in nodes {
                _ = el.class_list().toggle_with_force(ACTIVE_CLASS, active);
            }
        }
    }

    fn set_guide_item(&mut self, id: &str, pressed: bool, active: bool) {
        if let Some(button) = self.guide_buttons.get(id) {
            dom::set_bool_attribute(button, "aria-pressed", pressed);
            _ = button.class_list().toggle_with_force(ACTIVE_CLASS, active);
        }
    }

    fn render_languages(&mut self, cards: &[LanguageCard]) {
        let Some(list) = self.language_list.clone() else {
            return;
        };
        list.set_inner_html("");
        for card in cards {
            if let Some(el) = self.build_card(card) {
                _ = list.append_child(&el);
            }
        }
    }

    fn viewport(&self) -> Viewport {
        let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        Viewport {
            width: read(self.window.inner_width()),
            height: read(self.window.inner_height()),
        }
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion.as_ref().is_some_and(|m| m.matches())
    }
}
