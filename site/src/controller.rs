//! Reactive wrapper around `PageState`, shared with every section via context.

use leptos::ev;
use leptos::prelude::*;
use portfolio::SiteConfig;
use portfolio::flags::ScrollFlags;
use portfolio::page::PageState;

use crate::dom::{self, DomLayout, WindowScroller};

#[derive(Clone, Copy)]
pub struct PageController {
    state: RwSignal<PageState>,
    active: Memo<Option<String>>,
    flags: Memo<ScrollFlags>,
    menu_open: Memo<bool>,
    glow: Memo<String>,
}

impl PageController {
    pub fn new(config: &SiteConfig) -> Self {
        let state = RwSignal::new(PageState::portfolio(config));
        Self {
            state,
            active: Memo::new(move |_| state.with(|s| s.active().map(str::to_owned))),
            flags: Memo::new(move |_| state.with(|s| s.flags())),
            menu_open: Memo::new(move |_| state.with(|s| s.menu_open())),
            glow: Memo::new(move |_| state.with(|s| s.glow_css())),
        }
    }

    /// Install scroll, resize, load and pointer listeners for the lifetime
    /// of the page, and take an initial measurement.
    pub fn attach(self) {
        let state = self.state;

        let _ = window_event_listener(ev::scroll, move |_| {
            let scroll = dom::scroll_state();
            state.update(|s| s.on_scroll(scroll, &DomLayout));
        });
        let _ = window_event_listener(ev::resize, move |_| {
            let scroll = dom::scroll_state();
            state.update(|s| s.on_resize(scroll, &DomLayout));
        });
        let _ = window_event_listener(ev::load, move |_| {
            let scroll = dom::scroll_state();
            state.update(|s| s.on_scroll(scroll, &DomLayout));
        });
        let _ = window_event_listener(ev::mousemove, move |e| {
            let (x, y) = (f64::from(e.client_x()), f64::from(e.client_y()));
            state.update(|s| s.on_pointer_move(x, y));
        });

        // Sections are in the DOM once effects run.
        Effect::new(move |_| {
            let scroll = dom::scroll_state();
            let width = dom::viewport_width();
            state.update_untracked(|s| s.on_pointer_move(width / 2.0, scroll.viewport_height / 2.0));
            state.update(|s| s.on_scroll(scroll, &DomLayout));
        });
    }

    pub fn active(&self) -> Option<String> {
        self.active.get()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.with(|a| a.as_deref() == Some(id))
    }

    pub fn flags(&self) -> ScrollFlags {
        self.flags.get()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open.get()
    }

    pub fn glow(&self) -> String {
        self.glow.get()
    }

    pub fn navigate(&self, id: &str) {
        self.state.update(|s| {
            s.navigate(id, &DomLayout, &mut WindowScroller);
        });
    }

    pub fn scroll_to_top(&self) {
        self.state.update(|s| s.scroll_to_top(&mut WindowScroller));
    }

    pub fn toggle_menu(&self) {
        self.state.update(|s| s.toggle_menu());
    }
}

/// The controller provided by `App`.
pub fn use_page() -> PageController {
    expect_context::<PageController>()
}
