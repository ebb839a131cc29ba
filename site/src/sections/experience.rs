use leptos::prelude::*;
use portfolio::content::Experience;

#[component]
pub fn ExperienceSection(entries: Vec<Experience>) -> impl IntoView {
    view! {
        <section id="experience" class="section experience">
            <div class="container">
                <h2 class="section-title">"Experience"</h2>
                <ol class="timeline">
                    {entries
                        .into_iter()
                        .map(|job| {
                            view! {
                                <li class="timeline-item">
                                    <div class="timeline-header">
                                        <h3>{job.role}</h3>
                                        <span class="timeline-period">{job.period}</span>
                                    </div>
                                    <p class="timeline-company">
                                        {job.company}
                                        {(!job.location.is_empty()).then(|| format!(" · {}", job.location))}
                                    </p>
                                    <ul class="timeline-highlights">
                                        {job.highlights.into_iter().map(|h| view! { <li>{h}</li> }).collect::<Vec<_>>()}
                                    </ul>
                                    <div class="tag-list">
                                        {job.tech.into_iter().map(|t| view! { <span class="tag">{t}</span> }).collect::<Vec<_>>()}
                                    </div>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ol>
            </div>
        </section>
    }
}
