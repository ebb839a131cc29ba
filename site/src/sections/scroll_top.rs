use leptos::prelude::*;

use crate::controller::use_page;

/// Floating back-to-top button, shown once the page is scrolled far enough.
#[component]
pub fn ScrollTop() -> impl IntoView {
    let page = use_page();

    view! {
        <Show when=move || page.flags().show_scroll_top>
            <button class="scroll-top" aria-label="Back to top" on:click=move |_| page.scroll_to_top()>
                "↑"
            </button>
        </Show>
    }
}
