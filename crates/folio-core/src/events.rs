/// Everything that can happen to the page, as seen by [`crate::PageController`].
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Theme toggle clicked.
    ThemeChangeRequested,
    /// Motion toggle clicked.
    MotionChangeRequested,
    /// Constellation toggle clicked.
    ConstellationsChangeRequested,
    /// Guide panel expand/collapse clicked.
    GuidePanelToggled,
    /// OS color-scheme preference changed.
    SystemColorScheme { prefers_dark: bool },
    /// OS reduced-motion preference changed.
    SystemReducedMotion { reduce: bool },
    /// Pointer or focus entered (`Some`) or left (`None`) a guide item.
    ConstellationHover(Option<String>),
    /// Guide item clicked.
    ConstellationLock(String),
    ScrollTick,
    /// Pointer position in viewport (client) coordinates.
    PointerMoved { x: f64, y: f64 },
    PointerLeft,
    /// Animation frame, with its high-resolution timestamp in milliseconds.
    Frame { timestamp: f64 },
}
