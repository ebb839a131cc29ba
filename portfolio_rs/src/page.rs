//! Page controller: the single state object owned by the top-level page.
//!
//! Scroll, resize and pointer handlers feed events in; nav links, the
//! navbar and the back-to-top button read derived values out. Nothing here
//! touches the DOM.

use crate::config::{FlagConfig, SiteConfig};
use crate::flags::ScrollFlags;
use crate::glow::PointerGlow;
use crate::section::{LayoutSource, ScrollState, SectionTable};
use crate::tracker::{ScrollDriver, SectionTracker};

#[derive(Clone, Debug)]
pub struct PageState {
    tracker: SectionTracker,
    flag_config: FlagConfig,
    scroll: ScrollState,
    flags: ScrollFlags,
    menu_open: bool,
    glow: PointerGlow,
}

impl PageState {
    pub fn new(table: SectionTable, config: &SiteConfig) -> Self {
        Self {
            tracker: SectionTracker::new(table, config.tracker.clone()),
            flag_config: config.flags.clone(),
            scroll: ScrollState::default(),
            flags: ScrollFlags::default(),
            menu_open: false,
            glow: PointerGlow::new(config.glow.clone()),
        }
    }

    /// Controller for the portfolio page's fixed sections.
    pub fn portfolio(config: &SiteConfig) -> Self {
        Self::new(SectionTable::portfolio(), config)
    }

    pub fn active(&self) -> Option<&str> {
        self.tracker.active()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.tracker.is_active(id)
    }

    pub fn flags(&self) -> ScrollFlags {
        self.flags
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn glow_css(&self) -> String {
        self.glow.css()
    }

    pub fn tracker(&self) -> &SectionTracker {
        &self.tracker
    }

    /// Scroll event: re-measure, recompute the active section and flags.
    pub fn on_scroll<L: LayoutSource + ?Sized>(&mut self, scroll: ScrollState, layout: &L) {
        self.scroll = scroll;
        self.tracker.observe(scroll, layout);
        self.flags = ScrollFlags::from_scroll(scroll, &self.flag_config);
    }

    /// Resize: geometry and the browser's scroll offset may both have
    /// moved, so recompute from a fresh reading of both.
    pub fn on_resize<L: LayoutSource + ?Sized>(&mut self, scroll: ScrollState, layout: &L) {
        self.on_scroll(scroll, layout);
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.glow.move_to(x, y);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Nav link click. Unknown ids leave every piece of state untouched.
    pub fn navigate<L, D>(&mut self, id: &str, layout: &L, driver: &mut D) -> Option<f64>
    where
        L: LayoutSource + ?Sized,
        D: ScrollDriver + ?Sized,
    {
        let mut driver = MenuClosing {
            inner: driver,
            menu_open: &mut self.menu_open,
        };
        self.tracker.scroll_to_section(id, layout, &mut driver)
    }

    pub fn scroll_to_top<D: ScrollDriver + ?Sized>(&mut self, driver: &mut D) {
        self.tracker.scroll_to_top(driver);
    }
}

/// Clears the page's own menu flag before forwarding to the real driver.
struct MenuClosing<'a, D: ?Sized> {
    inner: &'a mut D,
    menu_open: &'a mut bool,
}

impl<D: ScrollDriver + ?Sized> ScrollDriver for MenuClosing<'_, D> {
    fn smooth_scroll_to(&mut self, top: f64) {
        self.inner.smooth_scroll_to(top);
    }

    fn close_menu(&mut self) {
        *self.menu_open = false;
        self.inner.close_menu();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Section;
    use crate::tracker::tests::RecordingDriver;

    fn layout() -> Vec<Section> {
        vec![
            Section::new("home", 0.0, 900.0),
            Section::new("skills", 900.0, 600.0),
            Section::new("experience", 1500.0, 800.0),
            Section::new("work", 2300.0, 1000.0),
            Section::new("education", 3300.0, 500.0),
            Section::new("contact", 3800.0, 700.0),
        ]
    }

    fn page() -> PageState {
        PageState::portfolio(&SiteConfig::default())
    }

    #[test]
    fn scroll_updates_active_section_and_flags_together() {
        let mut page = page();
        page.on_scroll(ScrollState::new(0.0, 900.0), &layout());
        assert_eq!(page.active(), Some("home"));
        assert_eq!(page.flags(), ScrollFlags::default());

        page.on_scroll(ScrollState::new(1300.0, 900.0), &layout());
        assert_eq!(page.active(), Some("experience"));
        assert!(page.flags().navbar_opaque);
        assert!(page.flags().show_scroll_top);

        page.on_scroll(ScrollState::new(0.0, 900.0), &layout());
        assert!(!page.flags().navbar_opaque);
        assert!(!page.flags().show_scroll_top);
    }

    #[test]
    fn navigate_closes_menu_and_marks_section() {
        let mut page = page();
        page.toggle_menu();
        assert!(page.menu_open());

        let mut driver = RecordingDriver::default();
        let target = page.navigate("work", &layout(), &mut driver);

        assert_eq!(target, Some(2220.0));
        assert!(page.is_active("work"));
        assert!(!page.menu_open());
        assert_eq!(driver.menu_closes, 1);
    }

    #[test]
    fn navigate_to_unknown_id_is_a_no_op() {
        let mut page = page();
        page.on_scroll(ScrollState::new(0.0, 900.0), &layout());
        page.toggle_menu();

        let mut driver = RecordingDriver::default();
        assert_eq!(page.navigate("blog", &layout(), &mut driver), None);
        assert_eq!(page.active(), Some("home"));
        assert!(page.menu_open());
        assert!(driver.scrolls.is_empty());
    }

    #[test]
    fn resize_recomputes_with_new_geometry() {
        let mut page = page();
        page.on_scroll(ScrollState::new(700.0, 900.0), &layout());
        assert_eq!(page.active(), Some("skills"));

        // Content above grew: skills now starts further down.
        let mut grown = layout();
        grown[0].geometry.height = 1400.0;
        grown[1].geometry.top = 1400.0;
        page.on_resize(ScrollState::new(700.0, 900.0), &grown);
        assert_eq!(page.active(), Some("home"));
    }

    #[test]
    fn resize_uses_the_scroll_offset_it_is_given() {
        let mut page = page();
        page.on_scroll(ScrollState::new(0.0, 900.0), &layout());
        assert_eq!(page.active(), Some("home"));

        // Narrowing the window reflowed the page and moved scrollY with it.
        page.on_resize(ScrollState::new(1300.0, 600.0), &layout());
        assert_eq!(page.scroll(), ScrollState::new(1300.0, 600.0));
        assert_eq!(page.active(), Some("experience"));
        assert!(page.flags().show_scroll_top);
    }

    #[test]
    fn pointer_moves_feed_the_glow() {
        let mut page = page();
        page.on_pointer_move(10.0, 20.0);
        assert!(page.glow_css().contains("at 10px 20px"));
    }

    #[test]
    fn scroll_to_top_marks_home() {
        let mut page = page();
        page.on_scroll(ScrollState::new(3000.0, 900.0), &layout());
        let mut driver = RecordingDriver::default();
        page.scroll_to_top(&mut driver);
        assert_eq!(page.active(), Some("home"));
        assert_eq!(driver.scrolls, vec![0.0]);
    }
}
