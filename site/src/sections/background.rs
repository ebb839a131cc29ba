use leptos::prelude::*;

use crate::controller::use_page;

/// Fixed layer behind the page with a glow that follows the pointer.
#[component]
pub fn Background() -> impl IntoView {
    let page = use_page();

    view! {
        <div class="background-glow" style=move || format!("background: {}", page.glow())></div>
    }
}
