//! Tuning knobs, persisted keys and the attribute/style contract shared with
//! the page markup and stylesheets.

// Persisted preference keys
pub const THEME_KEY: &str = "am-theme";
pub const MOTION_KEY: &str = "am-motion";
pub const CONSTELLATIONS_KEY: &str = "am-constellations";

// Root element attributes (seed + output)
pub const THEME_ATTR: &str = "data-theme";
pub const MOTION_ATTR: &str = "data-motion";
pub const CONSTELLATIONS_ATTR: &str = "data-constellations";

// Published style properties
pub const COLOR_SCHEME_PROP: &str = "color-scheme";
pub const PARALLAX_PROGRESS_VAR: &str = "--parallax-progress";
pub const STAR_SCROLL_X_VAR: &str = "--star-scroll-x";
pub const STAR_SCROLL_Y_VAR: &str = "--star-scroll-y";
pub const STAR_PARALLAX_X_VAR: &str = "--star-parallax-x";
pub const STAR_PARALLAX_Y_VAR: &str = "--star-parallax-y";

/// Every starfield offset variable, zeroed whenever motion is not active.
pub const STAR_OFFSET_VARS: [&str; 4] = [
    STAR_PARALLAX_X_VAR,
    STAR_PARALLAX_Y_VAR,
    STAR_SCROLL_X_VAR,
    STAR_SCROLL_Y_VAR,
];

/// Value written to the starfield offsets when motion stops.
pub const ZERO_PX: &str = "0px";

// Computed property mirrored into the theme-color meta tag
pub const SURFACE_PAGE_VAR: &str = "--surface-page";

// Scroll parallax
pub const MAX_OFFSET_STARFIELD: f64 = 520.0; // scroll distance before the effect saturates
pub const MAX_OFFSET_PLAIN: f64 = 500.0; // same, on pages without a starfield
pub const STAR_SCROLL_LIMIT: f64 = 48.0; // px of vertical starfield drift at full progress
pub const STAR_SCROLL_X_FACTOR: f64 = -0.35; // horizontal drift relative to vertical

// Pointer parallax
pub const POINTER_STRENGTH_X: f64 = 36.0;
pub const POINTER_STRENGTH_Y: f64 = 24.0;
pub const POINTER_SMOOTHING: f64 = 0.1; // fraction of remaining distance per step
pub const POINTER_STEPS_PER_SEC: f64 = 45.0;
pub const POINTER_STEP_INTERVAL_MS: f64 = 1000.0 / POINTER_STEPS_PER_SEC;

// Constellation guide
pub const GUIDE_AUTO_EXPAND_MIN_WIDTH: f64 = 960.0;

// Toggle labels
pub const THEME_LABEL_DARK: &str = "Dark mode";
pub const THEME_LABEL_LIGHT: &str = "Light mode";
pub const MOTION_LABEL_ON: &str = "Motion on";
pub const MOTION_LABEL_OFF: &str = "Motion off";
pub const CONSTELLATIONS_LABEL_ON: &str = "Constellations on";
pub const CONSTELLATIONS_LABEL_OFF: &str = "Constellations off";

// Language meters
pub const LEVEL_MIN: i32 = 0;
pub const LEVEL_MAX: i32 = 100;
