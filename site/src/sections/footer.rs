use leptos::prelude::*;
use portfolio::content::Profile;

#[component]
pub fn Footer(profile: Profile) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-links">
                    {profile
                        .socials
                        .into_iter()
                        .map(|link| view! {
                            <a href=link.url target="_blank" rel="noopener" class="footer-link">{link.label}</a>
                        })
                        .collect::<Vec<_>>()}
                </div>
                <p class="footer-copyright">
                    {format!("© {} · Built with Rust + Leptos", profile.name)}
                </p>
            </div>
        </footer>
    }
}
