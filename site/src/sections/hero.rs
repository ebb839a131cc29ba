use leptos::prelude::*;
use portfolio::config::TypewriterConfig;
use portfolio::content::Profile;
use portfolio::typewriter::Typewriter;
use std::time::Duration;

use crate::controller::use_page;

#[component]
pub fn Hero(profile: Profile, typewriter: TypewriterConfig) -> impl IntoView {
    let page = use_page();
    let writer = RwSignal::new(Typewriter::new(profile.roles.clone(), typewriter));

    // Timeout chain; stops once the signal is disposed.
    Effect::new(move |_| {
        if let Some(first) = writer.try_with_untracked(Typewriter::first_delay) {
            schedule_tick(writer, first);
        }
    });

    let socials = profile
        .socials
        .iter()
        .map(|link| {
            view! {
                <a href=link.url.clone() target="_blank" rel="noopener" class="hero-social">
                    {link.label.clone()}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="home" class="hero">
            <div class="container">
                <p class="hero-greeting">"Hi, I'm"</p>
                <h1 class="hero-title">{profile.name.clone()}</h1>
                <h2 class="hero-role">
                    <span class="hero-typed">{move || writer.with(|w| w.text().to_string())}</span>
                    <span class="hero-cursor">"|"</span>
                </h2>
                <p class="hero-description">{profile.tagline.clone()}</p>
                <div class="hero-actions">
                    <button class="btn btn-primary" on:click=move |_| page.navigate("work")>
                        "View my work"
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| page.navigate("contact")>
                        "Get in touch"
                    </button>
                    {profile.resume_url.clone().map(|url| view! {
                        <a href=url target="_blank" class="btn btn-ghost">"Résumé"</a>
                    })}
                </div>
                <div class="hero-socials">{socials}</div>
            </div>
        </section>
    }
}

fn schedule_tick(writer: RwSignal<Typewriter>, delay: Duration) {
    set_timeout(
        move || {
            if let Some(next) = writer.try_update(|w| w.tick()) {
                schedule_tick(writer, next);
            }
        },
        delay,
    );
}
