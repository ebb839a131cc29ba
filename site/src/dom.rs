//! Browser adapters for the page controller.
//!
//! `DomLayout` measures sections straight from the DOM on every call, so
//! geometry is never stale after a resize or late image load.

use futures::future::LocalBoxFuture;
use portfolio::contact::{
    ContactError, ContactMessage, ContactSubmitter, SimulatedSubmitter, SubmitReceipt,
};
use portfolio::section::{LayoutSource, ScrollState, SectionGeometry};
use portfolio::tracker::ScrollDriver;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Reads `offsetTop` / `offsetHeight` of the element whose id is the section id.
pub struct DomLayout;

impl LayoutSource for DomLayout {
    fn measure(&self, id: &str) -> Option<SectionGeometry> {
        let element = web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        Some(SectionGeometry::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }
}

/// Smooth-scrolls the window. Menu state lives in the page controller.
pub struct WindowScroller;

impl ScrollDriver for WindowScroller {
    fn smooth_scroll_to(&mut self, top: f64) {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Current `scrollY` and `innerHeight`.
pub fn scroll_state() -> ScrollState {
    let Some(window) = web_sys::window() else {
        return ScrollState::default();
    };
    let y = window.scroll_y().unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    ScrollState::new(y, height)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

pub fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(&format!("[portfolio][warn] {message}")));
}

/// Resolve after `ms` milliseconds.
pub async fn sleep(ms: u64) {
    let ms = i32::try_from(ms).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Simulated submitter that waits before succeeding, so the form can show
/// its sending state.
pub struct DelayedSubmitter {
    inner: SimulatedSubmitter,
    delay_ms: u64,
}

impl DelayedSubmitter {
    pub fn new(recipient: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            inner: SimulatedSubmitter::new(recipient),
            delay_ms,
        }
    }
}

impl ContactSubmitter for DelayedSubmitter {
    fn submit<'a>(
        &'a self,
        message: &'a ContactMessage,
    ) -> LocalBoxFuture<'a, Result<SubmitReceipt, ContactError>> {
        Box::pin(async move {
            sleep(self.delay_ms).await;
            self.inner.submit(message).await
        })
    }
}
