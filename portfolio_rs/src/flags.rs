//! Scroll-threshold flags recomputed alongside the active section.

use crate::config::FlagConfig;
use crate::section::ScrollState;

/// Booleans the chrome reads on every scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollFlags {
    /// Navbar switches from transparent to a solid background.
    pub navbar_opaque: bool,
    /// The floating back-to-top button is shown.
    pub show_scroll_top: bool,
}

impl ScrollFlags {
    pub fn from_scroll(scroll: ScrollState, config: &FlagConfig) -> Self {
        Self {
            navbar_opaque: scroll.y > config.navbar_opaque_after,
            show_scroll_top: scroll.y > config.scroll_top_after,
        }
    }
}
