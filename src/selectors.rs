// Attribute-based selectors the controller uses to find its collaborators.
// Any of them may match nothing; the dependent feature then stays inactive.

pub const THEME_META: &str = "meta[name=\"theme-color\"]";
pub const THEME_TOGGLE: &str = "[data-theme-toggle]";
pub const THEME_TOGGLE_TEXT: &str = "[data-theme-toggle-text]";
pub const MOTION_TOGGLE: &str = "[data-motion-toggle]";
pub const MOTION_TOGGLE_TEXT: &str = "[data-motion-toggle-text]";
pub const CONSTELLATION_TOGGLE: &str = "[data-constellation-toggle]";
pub const CONSTELLATION_TOGGLE_TEXT: &str = "[data-constellation-toggle-text]";
pub const GUIDE_TOGGLE: &str = "[data-constellation-guide-toggle]";
pub const GUIDE_PANEL: &str = "[data-constellation-panel]";
pub const GUIDE_LIST: &str = "[data-constellation-list]";
pub const PARALLAX_TARGETS: &str = "[data-parallax]";
pub const STARFIELD: &str = "[data-starfield]";
pub const LANGUAGE_LIST: &str = "[data-languages-list]";
pub const CONSTELLATION_GROUPS: &str = ".constellation[data-constellation]";

// Attributes read from constellation groups
pub const GROUP_ID_ATTR: &str = "data-constellation";
pub const GROUP_NAME_ATTR: &str = "data-name";
pub const GROUP_DESCRIPTION_ATTR: &str = "data-description";
pub const GUIDE_ITEM_ATTR: &str = "data-constellation-item";

// Classes
pub const ACTIVE_CLASS: &str = "is-active";

// System signals
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
