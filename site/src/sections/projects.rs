use leptos::prelude::*;
use portfolio::content::{ALL_CATEGORIES, PortfolioData, Project};

/// Project gallery with category filter buttons.
#[component]
pub fn Projects(data: PortfolioData) -> impl IntoView {
    let (selected, set_selected) = signal(ALL_CATEGORIES.to_string());
    let categories = data.categories();

    let filters = categories
        .into_iter()
        .map(|category| {
            let key = category.clone();
            let choice = category.clone();
            view! {
                <button
                    class=move || selected.with(|s| if *s == key { "filter active" } else { "filter" })
                    on:click=move |_| set_selected.set(choice.clone())
                >
                    {category}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let cards = move || {
        selected.with(|category| {
            data.projects_in(category)
                .into_iter()
                .map(|project| view! { <ProjectCard project=project.clone() /> })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section id="work" class="section projects">
            <div class="container">
                <h2 class="section-title">"Projects"</h2>
                <div class="project-filters">{filters}</div>
                <div class="project-grid">{cards}</div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let class = if project.featured { "project-card featured" } else { "project-card" };

    view! {
        <article class=class>
            {project.image.map(|src| view! {
                <img class="project-image" src=src alt=project.title.clone() loading="lazy" />
            })}
            <div class="project-body">
                <h3>{project.title.clone()}</h3>
                <p>{project.description}</p>
                <div class="tag-list">
                    {project.tags.into_iter().map(|t| view! { <span class="tag">{t}</span> }).collect::<Vec<_>>()}
                </div>
                <div class="project-links">
                    {project.repo_url.map(|url| view! {
                        <a href=url target="_blank" rel="noopener">"Source"</a>
                    })}
                    {project.live_url.map(|url| view! {
                        <a href=url target="_blank" rel="noopener">"Live"</a>
                    })}
                </div>
            </div>
        </article>
    }
}
