//! Scroll and pointer driven parallax.
//!
//! The engine never schedules anything itself: the driver asks
//! [`ParallaxEngine::wants_frame`] after every event and feeds
//! [`crate::Event::Frame`] timestamps back in. Scroll updates are coalesced to
//! one per frame through the pending flag; the pointer loop keeps asking for
//! frames for as long as it is active.

use crate::constants::{
    MAX_OFFSET_PLAIN, MAX_OFFSET_STARFIELD, PARALLAX_PROGRESS_VAR, POINTER_SMOOTHING,
    POINTER_STEP_INTERVAL_MS, POINTER_STRENGTH_X, POINTER_STRENGTH_Y, STAR_OFFSET_VARS,
    STAR_PARALLAX_X_VAR, STAR_PARALLAX_Y_VAR, STAR_SCROLL_LIMIT, STAR_SCROLL_X_FACTOR,
    STAR_SCROLL_X_VAR, STAR_SCROLL_Y_VAR, ZERO_PX,
};
use crate::page::{Capabilities, Page, StyleScope, Viewport};
use glam::DVec2;

/// Damped pointer offset for the starfield.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointerState {
    pub active: bool,
    pub target: DVec2,
    pub current: DVec2,
    /// Timestamp of the last smoothing step, 0 right after a start.
    pub last_frame: f64,
}

impl PointerState {
    pub fn start(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        self.last_frame = 0.0;
    }

    /// Deactivate and snap everything back to zero.
    pub fn stop(&mut self) {
        *self = Self::default();
    }

    /// One smoothing step, skipped when called sooner than the rate cap
    /// allows. Returns whether `current` moved.
    ///
    /// The factor is applied per step rather than per elapsed time, so the
    /// response speed follows the frame rate up to the cap.
    pub fn step(&mut self, timestamp: f64) -> bool {
        if !self.active || timestamp - self.last_frame < POINTER_STEP_INTERVAL_MS {
            return false;
        }
        self.last_frame = timestamp;
        self.current += (self.target - self.current) * POINTER_SMOOTHING;
        true
    }
}

/// Scroll position as a fraction of the saturation distance, in `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, max_offset: f64) -> f64 {
    let progress = scroll_y / max_offset;
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

/// Starfield drift for a scroll progress: x drifts the opposite way at a
/// reduced magnitude.
pub fn star_scroll_drift(progress: f64) -> DVec2 {
    let y = progress * STAR_SCROLL_LIMIT;
    DVec2::new(y * STAR_SCROLL_X_FACTOR, y)
}

/// Pointer target offset: distance from the viewport center, scaled per axis.
pub fn pointer_target(x: f64, y: f64, viewport: Viewport) -> DVec2 {
    let width = if viewport.width > 0.0 { viewport.width } else { 1.0 };
    let height = if viewport.height > 0.0 { viewport.height } else { 1.0 };
    DVec2::new(
        (x / width - 0.5) * POINTER_STRENGTH_X,
        (y / height - 0.5) * POINTER_STRENGTH_Y,
    )
}

pub fn format_progress(progress: f64) -> String {
    format!("{:.3}", progress)
}

pub fn format_px(value: f64) -> String {
    // Round first so values that print as zero never carry a sign.
    let value = (value * 100.0).round() / 100.0;
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.2}px", value)
}

#[derive(Clone, Debug)]
pub struct ParallaxEngine {
    hero: bool,
    starfield: bool,
    max_offset: f64,
    enabled: bool,
    scroll_pending: bool,
    pointer: PointerState,
}

impl ParallaxEngine {
    /// `None` when the page has neither hero targets nor a starfield.
    pub fn from_capabilities(caps: &Capabilities) -> Option<Self> {
        if !caps.parallax_targets && !caps.starfield {
            return None;
        }
        let max_offset = if caps.starfield {
            MAX_OFFSET_STARFIELD
        } else {
            MAX_OFFSET_PLAIN
        };
        Some(Self {
            hero: caps.parallax_targets,
            starfield: caps.starfield,
            max_offset,
            enabled: false,
            scroll_pending: false,
            pointer: PointerState::default(),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn wants_frame(&self) -> bool {
        self.enabled && (self.scroll_pending || self.pointer.active)
    }

    pub fn enable<P: Page>(&mut self, page: &mut P) {
        if self.enabled {
            return;
        }
        self.enabled = true;
        self.update(page);
        if self.starfield {
            self.pointer.start();
        }
        log::debug!("[parallax] enabled");
    }

    pub fn disable<P: Page>(&mut self, page: &mut P) {
        if !self.enabled {
            return;
        }
        self.enabled = false;
        self.scroll_pending = false;
        if self.hero {
            page.remove_style_property(StyleScope::Root, PARALLAX_PROGRESS_VAR);
            page.remove_style_property(StyleScope::ParallaxTargets, PARALLAX_PROGRESS_VAR);
        }
        if self.starfield {
            self.pointer.stop();
            for name in STAR_OFFSET_VARS {
                page.set_style_property(StyleScope::Root, name, ZERO_PX);
            }
        }
        log::debug!("[parallax] disabled");
    }

    pub fn on_scroll(&mut self) {
        if self.enabled {
            self.scroll_pending = true;
        }
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, viewport: Viewport) {
        if self.enabled && self.starfield {
            self.pointer.target = pointer_target(x, y, viewport);
        }
    }

    /// Recenter smoothly; the current offset eases back instead of snapping.
    pub fn on_pointer_leave(&mut self) {
        if self.enabled {
            self.pointer.target = DVec2::ZERO;
        }
    }

    pub fn on_frame<P: Page>(&mut self, timestamp: f64, page: &mut P) {
        if !self.enabled {
            return;
        }
        if self.scroll_pending {
            self.update(page);
            self.scroll_pending = false;
        }
        if self.pointer.step(timestamp) {
            let current = self.pointer.current;
            page.set_style_property(StyleScope::Root, STAR_PARALLAX_X_VAR, &format_px(current.x));
            page.set_style_property(StyleScope::Root, STAR_PARALLAX_Y_VAR, &format_px(current.y));
        }
    }

    fn update<P: Page>(&self, page: &mut P) {
        let progress = scroll_progress(page.scroll_y(), self.max_offset);
        if self.hero {
            let formatted = format_progress(progress);
            page.set_style_property(StyleScope::Root, PARALLAX_PROGRESS_VAR, &formatted);
            page.set_style_property(StyleScope::ParallaxTargets, PARALLAX_PROGRESS_VAR, &formatted);
        }
        if self.starfield {
            let drift = star_scroll_drift(progress);
            page.set_style_property(StyleScope::Root, STAR_SCROLL_Y_VAR, &format_px(drift.y));
            page.set_style_property(StyleScope::Root, STAR_SCROLL_X_VAR, &format_px(drift.x));
        }
    }
}
