use crate::constants::{
    CONSTELLATIONS_ATTR, CONSTELLATIONS_KEY, MOTION_ATTR, MOTION_KEY, THEME_ATTR, THEME_KEY,
};
use crate::constellation::{ConstellationGuide, ConstellationSelection};
use crate::events::Event;
use crate::languages::{render_languages, LanguageEntry, LANGUAGES};
use crate::motion::MotionController;
use crate::page::{Capabilities, Page};
use crate::parallax::ParallaxEngine;
use crate::preferences::{PreferenceState, Theme};
use crate::storage::{KeyValueStore, SafeStorage};
use crate::theme::{refresh_theme_meta, ThemeController};

/// One per page. Owns the page handle, persistence and every sub-controller;
/// all mutation goes through [`PageController::dispatch`].
///
/// Which features run is decided once, from [`Page::capabilities`]: a page
/// without a starfield or constellation markup simply never activates them.
pub struct PageController<P, S> {
    page: P,
    storage: SafeStorage<S>,
    caps: Capabilities,
    languages: &'static [LanguageEntry],
    theme: ThemeController,
    motion: MotionController,
    guide: ConstellationGuide,
    parallax: Option<ParallaxEngine>,
}

impl<P: Page, S: KeyValueStore> PageController<P, S> {
    pub fn new(page: P, storage: SafeStorage<S>) -> Self {
        Self::with_languages(page, storage, LANGUAGES)
    }

    pub fn with_languages(
        page: P,
        storage: SafeStorage<S>,
        languages: &'static [LanguageEntry],
    ) -> Self {
        let caps = page.capabilities();
        let theme = seed_token(&page, &storage, THEME_ATTR, THEME_KEY);
        let motion = seed_token(&page, &storage, MOTION_ATTR, MOTION_KEY);
        let constellations = seed_token(&page, &storage, CONSTELLATIONS_ATTR, CONSTELLATIONS_KEY);
        let prefs = PreferenceState::from_tokens(
            theme.as_deref(),
            motion.as_deref(),
            constellations.as_deref(),
        );
        log::info!(
            "[page] hero={} starfield={} groups={} guide={} panel={} languages={} storage={}",
            caps.parallax_targets,
            caps.starfield,
            caps.constellations.len(),
            caps.guide_list,
            caps.guide_panel.is_some(),
            caps.language_list,
            storage.is_available()
        );
        let system_reduce = page.prefers_reduced_motion();
        Self {
            theme: ThemeController::new(prefs.theme),
            motion: MotionController::new(prefs.motion, system_reduce),
            guide: ConstellationGuide::new(prefs.constellations, &caps),
            parallax: ParallaxEngine::from_capabilities(&caps),
            languages,
            caps,
            page,
            storage,
        }
    }

    /// Render static content and apply the seeded state. Call once.
    pub fn boot(&mut self) {
        render_languages(self.languages, self.caps.language_list, &mut self.page);
        self.guide.render(&self.caps, &mut self.page);
        let width = self.page.viewport().width;
        self.guide.auto_expand(width, &mut self.page);
        refresh_theme_meta(&mut self.page);

        let prefs = self.preferences();
        self.theme.apply(prefs.theme, &mut self.page, &mut self.storage);
        self.motion.apply(
            prefs.motion,
            self.parallax.as_mut(),
            &mut self.page,
            &mut self.storage,
        );
        self.guide
            .apply(prefs.constellations, &mut self.page, &mut self.storage);
        log::info!(
            "[page] booted theme={} motion={} active={} constellations={}",
            prefs.theme,
            prefs.motion,
            self.motion.is_active(),
            prefs.constellations
        );
    }

    pub fn dispatch(&mut self, event: Event) {
        match event {
            Event::ThemeChangeRequested => self.theme.toggle(&mut self.page, &mut self.storage),
            Event::MotionChangeRequested => {
                self.motion
                    .toggle(self.parallax.as_mut(), &mut self.page, &mut self.storage)
            }
            Event::ConstellationsChangeRequested => {
                self.guide.toggle(&mut self.page, &mut self.storage)
            }
            Event::GuidePanelToggled => self.guide.toggle_panel(&mut self.page),
            Event::SystemColorScheme { prefers_dark } => {
                self.theme
                    .on_system_change(prefers_dark, &mut self.page, &mut self.storage)
            }
            Event::SystemReducedMotion { reduce } => self.motion.on_system_change(
                reduce,
                self.parallax.as_mut(),
                &mut self.page,
                &mut self.storage,
            ),
            Event::ConstellationHover(id) => self.guide.hover(id, &mut self.page),
            Event::ConstellationLock(id) => self.guide.lock(&id, &mut self.page),
            Event::ScrollTick => {
                if let Some(engine) = self.parallax.as_mut() {
                    engine.on_scroll();
                }
            }
            Event::PointerMoved { x, y } => {
                let viewport = self.page.viewport();
                if let Some(engine) = self.parallax.as_mut() {
                    engine.on_pointer_move(x, y, viewport);
                }
            }
            Event::PointerLeft => {
                if let Some(engine) = self.parallax.as_mut() {
                    engine.on_pointer_leave();
                }
            }
            Event::Frame { timestamp } => {
                if let Some(engine) = self.parallax.as_mut() {
                    engine.on_frame(timestamp, &mut self.page);
                }
            }
        }
    }

    /// Whether the driver should keep an animation frame in flight.
    pub fn wants_frame(&self) -> bool {
        self.parallax.as_ref().is_some_and(ParallaxEngine::wants_frame)
    }

    pub fn preferences(&self) -> PreferenceState {
        PreferenceState {
            theme: self.theme.theme(),
            motion: self.motion.motion(),
            constellations: self.guide.state(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn motion_active(&self) -> bool {
        self.motion.is_active()
    }

    pub fn active_constellation(&self) -> Option<&str> {
        self.guide.active_id()
    }

    pub fn selection(&self) -> &ConstellationSelection {
        self.guide.selection()
    }

    pub fn guide(&self) -> &ConstellationGuide {
        &self.guide
    }

    pub fn parallax(&self) -> Option<&ParallaxEngine> {
        self.parallax.as_ref()
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.caps
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn storage(&self) -> &SafeStorage<S> {
        &self.storage
    }
}

// Root attribute first, persisted value when the attribute is missing.
fn seed_token<P: Page, S: KeyValueStore>(
    page: &P,
    storage: &SafeStorage<S>,
    attr: &str,
    key: &str,
) -> Option<String> {
    page.root_attribute(attr).or_else(|| storage.get(key))
}
