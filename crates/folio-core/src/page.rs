//! The seam between the controller and whatever renders the page.
//!
//! The web driver implements [`Page`] over real DOM nodes; tests implement it
//! with a recorder. Every mutating method must be a silent no-op when the
//! corresponding collaborator does not exist on the page.

use crate::languages::LanguageCard;

/// Toggle buttons whose pressed state and label mirror a preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Toggle {
    Theme,
    Motion,
    Constellations,
}

/// Where a style property is published.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleScope {
    /// The document root element.
    Root,
    /// Every hero parallax target.
    ParallaxTargets,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// A decorative constellation group found in the markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstellationGroup {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl ConstellationGroup {
    /// Build from raw markup attributes; the name falls back to the id.
    pub fn new(id: &str, name: Option<&str>, description: Option<&str>) -> Self {
        let name = name.filter(|n| !n.is_empty()).unwrap_or(id);
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.unwrap_or_default().to_string(),
        }
    }
}

/// Which optional collaborators the page carries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Capabilities {
    pub parallax_targets: bool,
    pub starfield: bool,
    pub language_list: bool,
    pub guide_list: bool,
    /// `Some(expanded)` when both the guide toggle and its panel exist.
    pub guide_panel: Option<bool>,
    /// Groups in document order; ids may repeat.
    pub constellations: Vec<ConstellationGroup>,
}

pub trait Page {
    fn capabilities(&self) -> Capabilities;

    fn root_attribute(&self, name: &str) -> Option<String>;
    fn set_root_attribute(&mut self, name: &str, value: &str);

    fn set_style_property(&mut self, scope: StyleScope, name: &str, value: &str);
    fn remove_style_property(&mut self, scope: StyleScope, name: &str);
    /// Computed (cascaded) value of a property on the root element.
    fn computed_root_style(&self, name: &str) -> Option<String>;

    /// Write the `theme-color` meta tag content.
    fn set_theme_color(&mut self, color: &str);
    fn set_toggle(&mut self, toggle: Toggle, pressed: bool, label: &str);

    fn set_guide_expanded(&mut self, expanded: bool);
    /// Replace the guide list with one item per group, all unpressed.
    fn render_guide(&mut self, groups: &[ConstellationGroup]);
    /// Toggle the active highlight on every group element carrying `id`.
    fn set_group_active(&mut self, id: &str, active: bool);
    fn set_guide_item(&mut self, id: &str, pressed: bool, active: bool);

    /// Replace the language list contents with `cards`, in order.
    fn render_languages(&mut self, cards: &[LanguageCard]);

    fn viewport(&self) -> Viewport;
    fn scroll_y(&self) -> f64;
    fn prefers_reduced_motion(&self) -> bool;
}
