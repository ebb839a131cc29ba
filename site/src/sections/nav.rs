use leptos::prelude::*;

use crate::controller::use_page;

/// Nav entries in display order. Education is tracked but has no link.
const NAV_LINKS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("work", "Work"),
    ("contact", "Contact"),
];

fn label_for(id: &str) -> &'static str {
    match id {
        "education" => "Education",
        _ => NAV_LINKS
            .iter()
            .find(|(link, _)| *link == id)
            .map(|(_, label)| *label)
            .unwrap_or(""),
    }
}

#[component]
pub fn Nav(brand: String) -> impl IntoView {
    let page = use_page();

    let links = move || {
        NAV_LINKS
            .into_iter()
            .map(|(id, label)| {
                view! {
                    <a
                        href=format!("#{id}")
                        class=move || if page.is_active(id) { "nav-link active" } else { "nav-link" }
                        on:click=move |ev| {
                            ev.prevent_default();
                            page.navigate(id);
                        }
                    >
                        {label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class=move || if page.flags().navbar_opaque { "nav nav-opaque" } else { "nav" }>
            <div class="nav-inner">
                <a
                    href="#home"
                    class="nav-brand"
                    on:click=move |ev| {
                        ev.prevent_default();
                        page.navigate("home");
                    }
                >
                    {brand}
                </a>
                <div class="nav-links">{links}</div>
                <span class="nav-current">
                    {move || page.active().map(|id| label_for(&id)).unwrap_or_default()}
                </span>
                <button
                    class=move || if page.menu_open() { "nav-toggle open" } else { "nav-toggle" }
                    aria-label="Toggle menu"
                    on:click=move |_| page.toggle_menu()
                >
                    {move || if page.menu_open() { "✕" } else { "☰" }}
                </button>
            </div>

            // Mobile drawer
            <Show when=move || page.menu_open()>
                <div class="nav-drawer">{links}</div>
            </Show>
        </nav>
    }
}
