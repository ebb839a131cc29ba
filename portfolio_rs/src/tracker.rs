//! Active-section tracking (scroll spy).
//!
//! On every scroll event the tracker drops a probe point a third of the way
//! down the viewport and marks the section under it as active. When the
//! probe hits nothing (above the first section, below the last, or between
//! sections during a transient layout) the previous answer is kept.

use crate::config::{TieBreak, TrackerConfig};
use crate::error::{Error, Result};
use crate::section::{LayoutSource, ScrollState, Section, SectionTable};

/// Executes the side effects of a navigation command.
pub trait ScrollDriver {
    /// Start a smooth scroll to `top`. Fire-and-forget: a later call or a
    /// manual scroll supersedes it.
    fn smooth_scroll_to(&mut self, top: f64);

    /// Close the mobile navigation menu, if the page has one open.
    fn close_menu(&mut self) {}
}

/// Index of the section containing the probe point, or `None` for "no change".
pub fn probe_index(
    scroll: ScrollState,
    sections: &[Section],
    probe_divisor: f64,
    tie_break: TieBreak,
) -> Option<usize> {
    let probe = scroll.probe_point(probe_divisor);
    if !probe.is_finite() {
        return None;
    }
    let mut hits = sections
        .iter()
        .enumerate()
        .filter(|(_, s)| s.geometry.contains(probe))
        .map(|(idx, _)| idx);

    match tie_break {
        TieBreak::First => hits.next(),
        TieBreak::Last => hits.last(),
    }
}

/// Id of the section containing the probe point, or `None` for "no change".
pub fn recompute_active<'a>(
    scroll: ScrollState,
    sections: &'a [Section],
    config: &TrackerConfig,
) -> Option<&'a str> {
    probe_index(scroll, sections, config.probe_divisor, config.tie_break)
        .map(|idx| sections[idx].id.as_str())
}

/// Owns the section table and the active pointer.
///
/// The active pointer is an index into the fixed table, so it can only ever
/// name a known section.
#[derive(Clone, Debug)]
pub struct SectionTracker {
    table: SectionTable,
    active: Option<usize>,
    config: TrackerConfig,
}

impl SectionTracker {
    pub fn new(table: SectionTable, config: TrackerConfig) -> Self {
        Self {
            table,
            active: None,
            config,
        }
    }

    /// Tracker over the portfolio page's sections.
    pub fn portfolio(config: TrackerConfig) -> Self {
        Self::new(SectionTable::portfolio(), config)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.and_then(|idx| self.table.id_at(idx))
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }

    pub fn table(&self) -> &SectionTable {
        &self.table
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Seed the active pointer without scrolling, e.g. from a saved position.
    pub fn restore(&mut self, id: &str) -> Result<()> {
        let idx = self
            .table
            .position(id)
            .ok_or_else(|| Error::UnknownSection(id.to_string()))?;
        self.active = Some(idx);
        Ok(())
    }

    /// Re-measure all sections from the current layout.
    pub fn refresh<L: LayoutSource + ?Sized>(&mut self, layout: &L) -> usize {
        self.table.refresh(layout)
    }

    /// Recompute the active section from the table's current geometry.
    /// Returns `true` when the active section changed.
    pub fn recompute(&mut self, scroll: ScrollState) -> bool {
        let hit = probe_index(
            scroll,
            self.table.sections(),
            self.config.probe_divisor,
            self.config.tie_break,
        );
        match hit {
            Some(idx) if self.active != Some(idx) => {
                self.active = Some(idx);
                tracing::debug!(
                    section = self.table.id_at(idx).unwrap_or_default(),
                    y = scroll.y,
                    "active section changed"
                );
                true
            }
            _ => false,
        }
    }

    /// Refresh geometry from `layout`, then recompute.
    pub fn observe<L: LayoutSource + ?Sized>(&mut self, scroll: ScrollState, layout: &L) -> bool {
        self.refresh(layout);
        self.recompute(scroll)
    }

    /// Mark `id` active immediately and scroll it into view below the navbar.
    ///
    /// Unknown ids are ignored. Returns the scroll target, or `None` when
    /// nothing was scrolled (unknown id, or section not currently rendered).
    pub fn scroll_to_section<L, D>(&mut self, id: &str, layout: &L, driver: &mut D) -> Option<f64>
    where
        L: LayoutSource + ?Sized,
        D: ScrollDriver + ?Sized,
    {
        let Some(idx) = self.table.position(id) else {
            if self.config.warn_unknown_sections {
                tracing::warn!(section = id, "scroll requested to unknown section");
            } else {
                tracing::debug!(section = id, "ignoring unknown section");
            }
            return None;
        };

        self.active = Some(idx);
        driver.close_menu();

        let Some(geometry) = layout.measure(id).filter(|g| g.is_valid()) else {
            tracing::debug!(section = id, "section not rendered, skipping scroll");
            return None;
        };
        let target = (geometry.top - self.config.navbar_offset).max(0.0);
        driver.smooth_scroll_to(target);
        Some(target)
    }

    /// Scroll to the very top and mark the first section active.
    pub fn scroll_to_top<D: ScrollDriver + ?Sized>(&mut self, driver: &mut D) {
        if !self.table.is_empty() {
            self.active = Some(0);
        }
        driver.smooth_scroll_to(0.0);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::section::SectionGeometry;

    /// Records every side effect instead of touching a window.
    #[derive(Default)]
    pub(crate) struct RecordingDriver {
        pub scrolls: Vec<f64>,
        pub menu_closes: usize,
    }

    impl ScrollDriver for RecordingDriver {
        fn smooth_scroll_to(&mut self, top: f64) {
            self.scrolls.push(top);
        }

        fn close_menu(&mut self) {
            self.menu_closes += 1;
        }
    }

    fn layout() -> Vec<Section> {
        vec![
            Section::new("home", 0.0, 800.0),
            Section::new("skills", 800.0, 400.0),
            Section::new("work", 1200.0, 800.0),
        ]
    }

    fn tracker() -> SectionTracker {
        let table = SectionTable::from_sections(layout()).unwrap();
        SectionTracker::new(table, TrackerConfig::default())
    }

    #[test]
    fn probe_on_lower_bound_is_inclusive() {
        let mut t = tracker();
        assert!(t.recompute(ScrollState::new(500.0, 900.0)));
        assert_eq!(t.active(), Some("skills"));
    }

    #[test]
    fn boundary_at_exact_third_of_odd_viewport_belongs_to_lower_section() {
        let sections = vec![
            Section::new("upper", 0.0, 7.0 / 3.0),
            Section::new("lower", 7.0 / 3.0, 10.0),
        ];
        let scroll = ScrollState::new(0.0, 7.0);
        assert_eq!(
            recompute_active(scroll, &sections, &TrackerConfig::default()),
            Some("lower")
        );
    }

    #[test]
    fn top_of_page_activates_first_section() {
        let mut t = tracker();
        t.recompute(ScrollState::new(0.0, 900.0));
        assert_eq!(t.active(), Some("home"));
    }

    #[test]
    fn probe_strictly_inside_one_section() {
        let mut t = tracker();
        for (y, expected) in [(100.0, "home"), (700.0, "skills"), (1500.0, "work")] {
            t.recompute(ScrollState::new(y, 900.0));
            assert_eq!(t.active(), Some(expected), "y = {y}");
        }
    }

    #[test]
    fn probe_past_the_last_section_is_sticky() {
        let mut t = tracker();
        t.recompute(ScrollState::new(1500.0, 900.0));
        assert_eq!(t.active(), Some("work"));

        // probe = 1900 + 300 = 2200, beyond work's end at 2000
        assert!(!t.recompute(ScrollState::new(1900.0, 900.0)));
        assert_eq!(t.active(), Some("work"));
    }

    #[test]
    fn probe_above_the_first_section_is_sticky() {
        let table = SectionTable::from_sections(vec![
            Section::new("home", 400.0, 400.0),
            Section::new("skills", 800.0, 400.0),
        ])
        .unwrap();
        let mut t = SectionTracker::new(table, TrackerConfig::default());
        t.recompute(ScrollState::new(0.0, 300.0));
        assert_eq!(t.active(), None);

        t.recompute(ScrollState::new(900.0, 300.0));
        assert_eq!(t.active(), Some("skills"));
        t.recompute(ScrollState::new(0.0, 300.0));
        assert_eq!(t.active(), Some("skills"));
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut t = tracker();
        let scroll = ScrollState::new(950.0, 900.0);
        assert!(t.recompute(scroll));
        let first = t.active().map(str::to_owned);
        assert!(!t.recompute(scroll));
        assert_eq!(t.active().map(str::to_owned), first);
    }

    #[test]
    fn empty_table_never_changes() {
        let table = SectionTable::new(Vec::<String>::new()).unwrap();
        let mut t = SectionTracker::new(table, TrackerConfig::default());
        assert!(!t.recompute(ScrollState::new(0.0, 900.0)));
        assert_eq!(t.active(), None);
    }

    #[test]
    fn overlapping_sections_last_match_wins_by_default() {
        let sections = vec![
            Section::new("a", 0.0, 1000.0),
            Section::new("b", 200.0, 500.0),
        ];
        let config = TrackerConfig::default();
        let scroll = ScrollState::new(0.0, 900.0);
        assert_eq!(recompute_active(scroll, &sections, &config), Some("b"));

        let first = TrackerConfig {
            tie_break: TieBreak::First,
            ..TrackerConfig::default()
        };
        assert_eq!(recompute_active(scroll, &sections, &first), Some("a"));
    }

    #[test]
    fn observe_reads_fresh_layout() {
        let mut t = tracker();
        t.observe(ScrollState::new(0.0, 900.0), &layout());
        assert_eq!(t.active(), Some("home"));

        // Layout shifted: skills now starts at 200
        let shifted = vec![
            Section::new("home", 0.0, 200.0),
            Section::new("skills", 200.0, 400.0),
            Section::new("work", 600.0, 800.0),
        ];
        assert!(t.observe(ScrollState::new(0.0, 900.0), &shifted));
        assert_eq!(t.active(), Some("skills"));
    }

    #[test]
    fn scroll_to_known_section_is_optimistic() {
        let mut t = tracker();
        let mut driver = RecordingDriver::default();
        let target = t.scroll_to_section("work", &layout(), &mut driver);

        assert_eq!(target, Some(1120.0));
        assert_eq!(t.active(), Some("work"));
        assert_eq!(driver.scrolls, vec![1120.0]);
        assert_eq!(driver.menu_closes, 1);
    }

    #[test]
    fn scroll_target_never_goes_negative() {
        let mut t = tracker();
        let mut driver = RecordingDriver::default();
        assert_eq!(t.scroll_to_section("home", &layout(), &mut driver), Some(0.0));
    }

    #[test]
    fn scroll_to_unknown_section_changes_nothing() {
        let mut t = tracker();
        t.recompute(ScrollState::new(0.0, 900.0));
        let mut driver = RecordingDriver::default();

        assert_eq!(t.scroll_to_section("blog", &layout(), &mut driver), None);
        assert_eq!(t.active(), Some("home"));
        assert!(driver.scrolls.is_empty());
        assert_eq!(driver.menu_closes, 0);
    }

    #[test]
    fn unrendered_section_is_activated_without_scrolling() {
        let mut t = tracker();
        let mut driver = RecordingDriver::default();
        let nothing = |_: &str| -> Option<SectionGeometry> { None };

        assert_eq!(t.scroll_to_section("skills", &nothing, &mut driver), None);
        assert_eq!(t.active(), Some("skills"));
        assert!(driver.scrolls.is_empty());
    }

    #[test]
    fn custom_navbar_offset() {
        let table = SectionTable::from_sections(layout()).unwrap();
        let mut t = SectionTracker::new(
            table,
            TrackerConfig {
                navbar_offset: 64.0,
                ..TrackerConfig::default()
            },
        );
        let mut driver = RecordingDriver::default();
        assert_eq!(t.scroll_to_section("skills", &layout(), &mut driver), Some(736.0));
    }

    #[test]
    fn restore_only_accepts_known_ids() {
        let mut t = tracker();
        t.restore("skills").unwrap();
        assert_eq!(t.active(), Some("skills"));
        assert!(matches!(t.restore("blog"), Err(Error::UnknownSection(_))));
        assert_eq!(t.active(), Some("skills"));
    }

    #[test]
    fn scroll_to_top_activates_first_section() {
        let mut t = tracker();
        t.recompute(ScrollState::new(1500.0, 900.0));
        let mut driver = RecordingDriver::default();
        t.scroll_to_top(&mut driver);
        assert_eq!(t.active(), Some("home"));
        assert_eq!(driver.scrolls, vec![0.0]);
    }
}
