//! Platform-independent controller for the portfolio pages.
//!
//! Everything here talks to the browser through the [`Page`] trait and to
//! persistence through [`KeyValueStore`], so the whole controller can be
//! driven on the host with a fake page and an in-memory store.

pub mod constants;
pub mod constellation;
pub mod controller;
pub mod error;
pub mod events;
pub mod languages;
pub mod motion;
pub mod page;
pub mod parallax;
pub mod preferences;
pub mod storage;
pub mod theme;

pub use constellation::{ConstellationGuide, ConstellationSelection};
pub use controller::PageController;
pub use error::StorageError;
pub use events::Event;
pub use languages::{LanguageCard, LanguageEntry, LanguageMeter, LANGUAGES};
pub use motion::MotionController;
pub use page::{Capabilities, ConstellationGroup, Page, StyleScope, Toggle, Viewport};
pub use parallax::{ParallaxEngine, PointerState};
pub use preferences::{Constellations, Motion, PreferenceState, Theme};
pub use storage::{KeyValueStore, MemoryStore, SafeStorage};
pub use theme::ThemeController;
