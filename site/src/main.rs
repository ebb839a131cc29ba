// Portfolio — Leptos 0.8 single-page site

mod controller;
mod dom;
mod sections;

use controller::PageController;
use leptos::prelude::*;
use portfolio::SiteConfig;
use portfolio::content::PortfolioData;
use sections::*;

/// Site settings, compiled in. Same format as the CLI's `portfolio.toml`.
const SITE_CONFIG: &str = include_str!("../portfolio.toml");

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

fn load_config() -> SiteConfig {
    SiteConfig::from_toml_str(SITE_CONFIG).unwrap_or_else(|e| {
        dom::warn(&format!("portfolio.toml ignored: {e}"));
        SiteConfig::default()
    })
}

fn load_content() -> PortfolioData {
    PortfolioData::builtin().unwrap_or_else(|e| {
        dom::warn(&format!("built-in content unreadable: {e}"));
        PortfolioData::default()
    })
}

#[component]
fn App() -> impl IntoView {
    let config = load_config();
    let data = load_content();

    let page = PageController::new(&config);
    provide_context(page);
    page.attach();

    view! {
        <Background />
        <Nav brand=data.profile.name.clone() />
        <main>
            <Hero profile=data.profile.clone() typewriter=config.typewriter.clone() />
            <Skills categories=data.skills.clone() />
            <ExperienceSection entries=data.experience.clone() />
            <Projects data=data.clone() />
            <EducationSection entries=data.education.clone() />
            <Contact profile=data.profile.clone() config=config.contact.clone() />
        </main>
        <Footer profile=data.profile />
        <ScrollTop />
    }
}
