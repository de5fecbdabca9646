use crate::constants::{
    MOTION_ATTR, MOTION_KEY, MOTION_LABEL_OFF, MOTION_LABEL_ON, STAR_OFFSET_VARS, ZERO_PX,
};
use crate::page::{Page, StyleScope, Toggle};
use crate::parallax::ParallaxEngine;
use crate::preferences::Motion;
use crate::storage::{KeyValueStore, SafeStorage};

/// Owns the motion preference and gates the parallax engine.
///
/// Animation runs only while the preference is `auto` and the OS has not
/// asked for reduced motion. The OS signal never touches the persisted
/// preference: an explicit `auto` survives a period of system suppression.
#[derive(Clone, Debug)]
pub struct MotionController {
    motion: Motion,
    system_reduce: bool,
}

impl MotionController {
    pub fn new(motion: Motion, system_reduce: bool) -> Self {
        Self {
            motion,
            system_reduce,
        }
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn system_reduce(&self) -> bool {
        self.system_reduce
    }

    pub fn is_active(&self) -> bool {
        self.motion == Motion::Auto && !self.system_reduce
    }

    pub fn apply<P: Page, S: KeyValueStore>(
        &mut self,
        motion: Motion,
        parallax: Option<&mut ParallaxEngine>,
        page: &mut P,
        storage: &mut SafeStorage<S>,
    ) {
        self.motion = motion;
        page.set_root_attribute(MOTION_ATTR, motion.as_str());
        let active = self.is_active();
        let label = if active {
            MOTION_LABEL_ON
        } else {
            MOTION_LABEL_OFF
        };
        page.set_toggle(Toggle::Motion, active, label);
        if let Some(engine) = parallax {
            if active {
                engine.enable(page);
            } else {
                engine.disable(page);
            }
        }
        if !active {
            for name in STAR_OFFSET_VARS {
                page.set_style_property(StyleScope::Root, name, ZERO_PX);
            }
        }
        storage.set(MOTION_KEY, motion.as_str());
        log::debug!("[motion] applied {} active={}", motion, active);
    }

    pub fn toggle<P: Page, S: KeyValueStore>(
        &mut self,
        parallax: Option<&mut ParallaxEngine>,
        page: &mut P,
        storage: &mut SafeStorage<S>,
    ) {
        self.apply(self.motion.toggled(), parallax, page, storage);
    }

    /// Re-evaluate the current preference against a new OS signal.
    pub fn on_system_change<P: Page, S: KeyValueStore>(
        &mut self,
        reduce: bool,
        parallax: Option<&mut ParallaxEngine>,
        page: &mut P,
        storage: &mut SafeStorage<S>,
    ) {
        self.system_reduce = reduce;
        self.apply(self.motion, parallax, page, storage);
    }
}
